use std::time::Duration;
use thiserror::Error;

/// Result type for classifier setup
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Errors raised while assembling a classifier
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Invalid remote lookup configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl ClassifierError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Why a remote lookup produced no level.
///
/// None of these are fatal: the classifier falls back to the local chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("remote lookup disabled")]
    Disabled,

    #[error("remote lookup timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("remote transport error: {0}")]
    Transport(String),

    #[error("remote returned HTTP {0}")]
    Status(u16),

    #[error("malformed remote response: {0}")]
    Malformed(String),

    #[error("remote response carries no recognizable level")]
    MissingLevel,
}
