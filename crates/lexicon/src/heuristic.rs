use crate::level::Level;

/// Length-band fallback for words missing from every lexicon tier.
///
/// Bands are checked in order and the first match wins:
///
/// | length (chars) | level |
/// |---|---|
/// | ≤ 4, lowercase a-z only | A1 |
/// | ≤ 6 | A2 |
/// | ≤ 8 | B1 |
/// | ≤ 10 | B2 |
/// | longer | C1 |
///
/// C2 is never produced here; it comes only from explicit lexicon membership.
/// The input is expected to be normalized already.
#[must_use]
pub fn classify_unknown(word: &str) -> Level {
    let length = word.chars().count();
    if length <= 4 && word.chars().all(|c| c.is_ascii_lowercase()) {
        return Level::A1;
    }
    match length {
        0..=6 => Level::A2,
        7..=8 => Level::B1,
        9..=10 => Level::B2,
        _ => Level::C1,
    }
}
