use thiserror::Error;

/// Top-level error type for the `linka-api` crate.
///
/// Covers every failure mode of the two remote collaborators: the
/// sensor feed (transport, status, decoding) and the Twitter API
/// (credential verification, status posting). `linka-core` maps these
/// into pipeline-level errors by [`ErrorKind`].
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The feed endpoint answered with a non-success status.
    #[error("Sensor feed returned HTTP {status} from {url}")]
    FeedStatus { status: u16, url: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Twitter ─────────────────────────────────────────────────────
    /// Credential verification was rejected or could not be completed.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The status update was rejected by the platform.
    #[error("Status update rejected (HTTP {status}): {message}")]
    PostRejected {
        status: u16,
        message: String,
        code: Option<u32>,
    },

    /// The status update never reached the platform.
    #[error("Status update failed: {message}")]
    PostFailed { message: String },

    // ── Setup ───────────────────────────────────────────────────────
    /// URL parsing or joining error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Coarse classification of an [`Error`], one per pipeline failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure or non-success status while fetching the feed.
    Network,
    /// Malformed feed payload.
    Decode,
    /// Credential verification rejected or unreachable.
    Auth,
    /// Status submission rejected or unreachable.
    Post,
    /// Bad URL or client construction failure.
    Setup,
}

impl Error {
    /// Classify this error into the pipeline failure mode it represents.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) | Self::FeedStatus { .. } => ErrorKind::Network,
            Self::Deserialization { .. } => ErrorKind::Decode,
            Self::Authentication { .. } => ErrorKind::Auth,
            Self::PostRejected { .. } | Self::PostFailed { .. } => ErrorKind::Post,
            Self::InvalidUrl(_) | Self::Client(_) => ErrorKind::Setup,
        }
    }

    /// Returns `true` if the request timed out at the transport level.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// The HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::FeedStatus { status, .. } | Self::PostRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
