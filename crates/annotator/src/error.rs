use std::path::PathBuf;
use thiserror::Error;

/// Result type for annotation runs
pub type Result<T> = std::result::Result<T, AnnotatorError>;

/// Fatal annotation errors. Malformed lines and remote failures never end up here.
#[derive(Error, Debug)]
pub enum AnnotatorError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error while streaming lines
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AnnotatorError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
