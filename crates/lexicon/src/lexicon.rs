use crate::error::Result;
use crate::level::Level;
use crate::words;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;

static BUILTIN: Lazy<Arc<Lexicon>> = Lazy::new(|| Arc::new(Lexicon::builtin()));

/// Lower-case and trim a word the way tier entries are stored.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// The set of words pre-classified at one level
#[derive(Debug, Clone)]
pub struct LexiconTier {
    level: Level,
    words: HashSet<String>,
}

impl LexiconTier {
    /// Build a tier, normalizing every entry and dropping blanks
    pub fn new<I, S>(level: Level, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { level, words }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A word listed in more than one tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub word: String,
    /// Every level containing the word, ascending; the first one wins lookups.
    pub levels: Vec<Level>,
}

/// Six immutable tiers, consulted strictly from A1 up to C2.
///
/// Lookups stop at the first tier containing the word, so a word listed in
/// several tiers resolves to the lowest of them. Such duplicates are kept as
/// they are and reported through [`Lexicon::duplicates`].
#[derive(Debug, Clone)]
pub struct Lexicon {
    tiers: Vec<LexiconTier>,
    duplicates: Vec<Duplicate>,
}

impl Lexicon {
    /// Lexicon built from the bundled word lists
    pub fn builtin() -> Self {
        Self::from_tiers(
            Level::ALL
                .iter()
                .map(|&level| LexiconTier::new(level, words::builtin(level).iter().copied())),
        )
    }

    /// Process-wide copy of the bundled lexicon, built on first use
    pub fn shared() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN)
    }

    /// Assemble a lexicon from tiers in any order.
    ///
    /// Levels without a tier get an empty one; tiers repeating a level are
    /// merged into it.
    pub fn from_tiers(tiers: impl IntoIterator<Item = LexiconTier>) -> Self {
        let mut by_level: BTreeMap<Level, HashSet<String>> =
            Level::ALL.iter().map(|&l| (l, HashSet::new())).collect();
        for tier in tiers {
            by_level.entry(tier.level).or_default().extend(tier.words);
        }

        let tiers: Vec<LexiconTier> = by_level
            .into_iter()
            .map(|(level, words)| LexiconTier { level, words })
            .collect();
        let duplicates = find_duplicates(&tiers);
        for dup in &duplicates {
            log::warn!(
                "Word '{}' is listed in several tiers {:?}; {} wins",
                dup.word,
                dup.levels,
                dup.levels[0]
            );
        }

        Self { tiers, duplicates }
    }

    /// Parse a TOML lexicon: one array of words per level label.
    ///
    /// ```toml
    /// A1 = ["cat", "dog"]
    /// B2 = ["hypothesis"]
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let table: BTreeMap<Level, Vec<String>> = toml::from_str(raw)?;
        Ok(Self::from_tiers(
            table
                .into_iter()
                .map(|(level, words)| LexiconTier::new(level, words)),
        ))
    }

    /// Load a TOML lexicon file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let lexicon = Self::from_toml_str(&raw)?;
        log::debug!(
            "Loaded lexicon from {} ({} words)",
            path.display(),
            lexicon.word_count()
        );
        Ok(lexicon)
    }

    /// Level of a normalized word, scanning tiers from A1 to C2.
    ///
    /// No normalization happens here; callers pass lower-cased, trimmed text.
    pub fn classify_known(&self, word: &str) -> Option<Level> {
        self.tiers
            .iter()
            .find(|tier| tier.contains(word))
            .map(LexiconTier::level)
    }

    pub fn tiers(&self) -> &[LexiconTier] {
        &self.tiers
    }

    pub fn duplicates(&self) -> &[Duplicate] {
        &self.duplicates
    }

    pub fn word_count(&self) -> usize {
        self.tiers.iter().map(LexiconTier::len).sum()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

fn find_duplicates(tiers: &[LexiconTier]) -> Vec<Duplicate> {
    let mut seen: BTreeMap<&str, Vec<Level>> = BTreeMap::new();
    for tier in tiers {
        for word in &tier.words {
            seen.entry(word.as_str()).or_default().push(tier.level);
        }
    }
    seen.into_iter()
        .filter(|(_, levels)| levels.len() > 1)
        .map(|(word, levels)| Duplicate {
            word: word.to_string(),
            levels,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tiers_have_no_cross_tier_duplicates() {
        let lexicon = Lexicon::builtin();
        assert!(
            lexicon.duplicates().is_empty(),
            "duplicates in bundled lists: {:?}",
            lexicon.duplicates()
        );
    }

    #[test]
    fn builtin_has_one_non_empty_tier_per_level_in_order() {
        let lexicon = Lexicon::builtin();
        let levels: Vec<Level> = lexicon.tiers().iter().map(LexiconTier::level).collect();
        assert_eq!(levels, Level::ALL.to_vec());
        assert!(lexicon.tiers().iter().all(|tier| !tier.is_empty()));
    }

    #[test]
    fn classify_known_finds_each_tier() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.classify_known("cat"), Some(Level::A1));
        assert_eq!(lexicon.classify_known("weather"), Some(Level::A2));
        assert_eq!(lexicon.classify_known("opinion"), Some(Level::B1));
        assert_eq!(lexicon.classify_known("hypothesis"), Some(Level::B2));
        assert_eq!(lexicon.classify_known("meticulous"), Some(Level::C1));
        assert_eq!(lexicon.classify_known("ephemeral"), Some(Level::C2));
    }

    #[test]
    fn classify_known_does_not_normalize() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.classify_known("Cat"), None);
        assert_eq!(lexicon.classify_known(" cat"), None);
        assert_eq!(lexicon.classify_known("beautiful"), None);
    }

    #[test]
    fn lowest_tier_wins_for_duplicates() {
        let lexicon = Lexicon::from_tiers([
            LexiconTier::new(Level::C1, ["bank"]),
            LexiconTier::new(Level::A2, ["bank"]),
        ]);
        assert_eq!(lexicon.classify_known("bank"), Some(Level::A2));
        assert_eq!(
            lexicon.duplicates(),
            &[Duplicate {
                word: "bank".to_string(),
                levels: vec![Level::A2, Level::C1],
            }]
        );
    }

    #[test]
    fn tier_entries_are_normalized() {
        let tier = LexiconTier::new(Level::B1, ["  Apple ", "", "   "]);
        assert!(tier.contains("apple"));
        assert_eq!(tier.len(), 1);
    }

    #[test]
    fn shared_lexicon_is_reused() {
        let a = Lexicon::shared();
        let b = Lexicon::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
