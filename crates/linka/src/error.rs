//! Binary error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into operator-facing errors with
//! actionable help text and a distinct exit code per fatal step.

use miette::Diagnostic;
use thiserror::Error;

use linka_config::ConfigError;
use linka_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const CONFIG: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const DECODE: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum RunError {
    // ── Feed ─────────────────────────────────────────────────────────

    #[error("Could not fetch the sensor feed")]
    #[diagnostic(
        code(linka::feed_unavailable),
        help(
            "{reason}\n\
             Check that API_URL points at a reachable sensor feed."
        )
    )]
    FeedUnavailable { reason: String },

    #[error("The sensor feed returned an unexpected payload")]
    #[diagnostic(
        code(linka::feed_malformed),
        help("{message}\nThe endpoint must answer with a JSON array of sensors.")
    )]
    FeedMalformed { message: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed")]
    #[diagnostic(
        code(linka::auth_failed),
        help(
            "{message}\n\
             Verify CONSUMER_KEY, CONSUMER_SECRET, ACCESS_TOKEN and ACCESS_TOKEN_SECRET."
        )
    )]
    AuthFailed { message: String },

    // ── Posting ──────────────────────────────────────────────────────

    #[error("Status update failed")]
    #[diagnostic(
        code(linka::post_failed),
        severity(Warning),
        help("{message}\nThe report was not posted; the run itself still succeeds.")
    )]
    PostFailed { message: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(
        code(linka::config),
        help("Set API_URL in the environment or in a .env file in the working directory.")
    )]
    Config(#[from] ConfigError),

    #[error("Could not set up the HTTP clients")]
    #[diagnostic(
        code(linka::client_setup),
        help(
            "{message}\n\
             Check LINKA_TWITTER_API_URL and that the TLS backend is usable on this host."
        )
    )]
    ClientSetup { message: String },
}

impl RunError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FeedUnavailable { .. } => exit_code::CONNECTION,
            Self::FeedMalformed { .. } => exit_code::DECODE,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::PostFailed { .. } => exit_code::SUCCESS,
            Self::Config(_) => exit_code::CONFIG,
            Self::ClientSetup { .. } => exit_code::GENERAL,
        }
    }
}

// ── CoreError → RunError mapping ─────────────────────────────────────

impl From<CoreError> for RunError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Feed { reason } => RunError::FeedUnavailable { reason },
            CoreError::Decode { message } => RunError::FeedMalformed { message },
            CoreError::Authentication { message } => RunError::AuthFailed { message },
            CoreError::Post { message, .. } => RunError::PostFailed { message },
            CoreError::Config { message } => RunError::ClientSetup { message },
        }
    }
}
