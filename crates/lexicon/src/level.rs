use crate::error::{LexiconError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CEFR proficiency level, ordered from easiest (A1) to hardest (C2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Level {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl Level {
    /// All levels in ascending order
    pub const ALL: [Level; 6] = [
        Level::A1,
        Level::A2,
        Level::B1,
        Level::B2,
        Level::C1,
        Level::C2,
    ];

    /// Upper-case label ("A1".."C2")
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
            Level::C2 => "C2",
        }
    }

    /// Numeric rank, 1 for A1 up to 6 for C2
    pub const fn rank(self) -> u8 {
        match self {
            Level::A1 => 1,
            Level::A2 => 2,
            Level::B1 => 3,
            Level::B2 => 4,
            Level::C1 => 5,
            Level::C2 => 6,
        }
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|level| level.rank() == rank)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LexiconError;

    /// Accepts labels in any case ("b2", " C1 ") and numeric ranks ("1".."6").
    fn from_str(raw: &str) -> Result<Self> {
        let label = raw.trim().to_ascii_uppercase();
        if let Some(level) = Self::ALL.iter().copied().find(|l| l.as_str() == label) {
            return Ok(level);
        }
        label
            .parse::<u8>()
            .ok()
            .and_then(Self::from_rank)
            .ok_or_else(|| LexiconError::invalid_level(raw))
    }
}

impl TryFrom<String> for Level {
    type Error = LexiconError;

    fn try_from(raw: String) -> Result<Self> {
        raw.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_totally_ordered() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(Level::ALL.iter().max(), Some(&Level::C2));
        assert_eq!(Level::B1.max(Level::A2), Level::B1);
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("a1".parse::<Level>().unwrap(), Level::A1);
        assert_eq!(" c2 ".parse::<Level>().unwrap(), Level::C2);
        assert_eq!("B2".parse::<Level>().unwrap(), Level::B2);
    }

    #[test]
    fn parses_numeric_ranks() {
        assert_eq!("3".parse::<Level>().unwrap(), Level::B1);
        assert!("0".parse::<Level>().is_err());
        assert!("7".parse::<Level>().is_err());
    }

    #[test]
    fn rejects_unknown_labels() {
        assert!("D1".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
        assert!("UNKNOWN".parse::<Level>().is_err());
    }

    #[test]
    fn rank_round_trips_for_every_level() {
        for level in Level::ALL {
            assert_eq!(Level::from_rank(level.rank()), Some(level));
        }
    }
}
