use thiserror::Error;

/// Result type for lexicon operations
pub type Result<T> = std::result::Result<T, LexiconError>;

/// Errors that can occur while building or loading a lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    /// Level label that is not one of A1..C2 (or rank 1..6)
    #[error("Unknown CEFR level: {0}")]
    InvalidLevel(String),

    /// Lexicon file could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LexiconError {
    /// Create an invalid level error
    pub fn invalid_level(raw: impl Into<String>) -> Self {
        Self::InvalidLevel(raw.into())
    }
}

impl From<toml::de::Error> for LexiconError {
    fn from(err: toml::de::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}
