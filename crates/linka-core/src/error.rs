// ── Core error types ──
//
// Pipeline-level errors. The `From<linka_api::Error>` impl sorts
// transport-layer errors into the step that failed.

use linka_api::ErrorKind;
use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The feed could not be fetched (transport failure or bad status).
    #[error("Sensor feed unavailable: {reason}")]
    Feed { reason: String },

    /// The feed answered with something that is not a sensor list.
    #[error("Sensor feed payload is malformed: {message}")]
    Decode { message: String },

    /// Credential verification failed.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The status update was rejected or never reached the platform.
    #[error("Status update failed: {message}")]
    Post {
        message: String,
        /// HTTP status, when the platform answered.
        status: Option<u16>,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` for errors that end the run before anything is posted.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Post { .. })
    }
}

impl From<linka_api::Error> for CoreError {
    fn from(err: linka_api::Error) -> Self {
        match err.kind() {
            ErrorKind::Network => CoreError::Feed {
                reason: err.to_string(),
            },
            ErrorKind::Decode => CoreError::Decode {
                message: err.to_string(),
            },
            ErrorKind::Auth => CoreError::Authentication {
                message: err.to_string(),
            },
            ErrorKind::Post => CoreError::Post {
                status: err.status(),
                message: err.to_string(),
            },
            ErrorKind::Setup => CoreError::Config {
                message: err.to_string(),
            },
        }
    }
}
