use cefr_lexicon::Level;
use serde::Serialize;
use std::fmt;

/// What produced a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Explicit tier membership
    Lexicon,
    /// Length heuristic for unknown words
    Heuristic,
    /// External lookup service
    Remote,
    /// Degenerate input (nothing left to classify)
    Default,
}

impl Source {
    pub const fn as_str(self) -> &'static str {
        match self {
            Source::Lexicon => "lexicon",
            Source::Heuristic => "heuristic",
            Source::Remote => "remote",
            Source::Default => "default",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level assigned to a single phrase token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenClassification {
    pub text: String,
    pub level: Level,
    pub source: Source,
}

/// Outcome of classifying a word or phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub level: Level,

    /// For phrases: the source of the first token holding the maximum level
    pub source: Source,

    /// Per-token breakdown; empty for single words and remote hits
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<TokenClassification>,
}

impl Classification {
    pub fn new(level: Level, source: Source) -> Self {
        Self {
            level,
            source,
            tokens: Vec::new(),
        }
    }

    /// A1 for input that has nothing to classify
    pub fn degenerate() -> Self {
        Self::new(Level::A1, Source::Default)
    }
}

/// JSON-friendly view of a classification together with its input
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub input: String,
    #[serde(flatten)]
    pub classification: Classification,
}
