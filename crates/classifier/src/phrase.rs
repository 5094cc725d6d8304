use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("static punctuation pattern"));

/// Split a phrase into normalized tokens.
///
/// Lower-cases, drops every character that is neither a word character nor
/// whitespace, then splits on whitespace runs. "Don't stop!" yields
/// `["dont", "stop"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Whether the input takes the phrase path rather than the single-word path
pub fn is_phrase(text: &str) -> bool {
    text.trim().chars().any(char::is_whitespace)
}
