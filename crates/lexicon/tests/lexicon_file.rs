use cefr_lexicon::{classify_unknown, normalize, Level, Lexicon};
use proptest::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_toml_lexicon_and_normalizes_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lexicon.toml");
    fs::write(
        &path,
        r#"
A1 = ["Sun", " moon "]
b2 = ["eclipse"]
C2 = ["syzygy"]
"#,
    )
    .unwrap();

    let lexicon = Lexicon::load(&path).expect("valid lexicon");
    assert_eq!(lexicon.classify_known("sun"), Some(Level::A1));
    assert_eq!(lexicon.classify_known("moon"), Some(Level::A1));
    assert_eq!(lexicon.classify_known("eclipse"), Some(Level::B2));
    assert_eq!(lexicon.classify_known("syzygy"), Some(Level::C2));
    assert_eq!(lexicon.classify_known("cat"), None);
    assert_eq!(lexicon.word_count(), 4);
    assert_eq!(lexicon.tiers().len(), 6);
}

#[test]
fn rejects_unknown_level_keys() {
    let err = Lexicon::from_toml_str(r#"D1 = ["nope"]"#).unwrap_err();
    assert!(err.to_string().contains("D1"), "unexpected error: {err}");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = Lexicon::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, cefr_lexicon::LexiconError::IoError(_)));
}

#[test]
fn known_words_match_regardless_of_case_and_padding_after_normalize() {
    let lexicon = Lexicon::builtin();
    for raw in ["CAT", " cat", "Cat  ", "\tcat\n"] {
        assert_eq!(lexicon.classify_known(&normalize(raw)), Some(Level::A1));
    }
    assert_eq!(
        lexicon.classify_known(&normalize("  EPHEMERAL ")),
        Some(Level::C2)
    );
}

fn band(len: usize) -> Level {
    match len {
        0..=4 => Level::A1,
        5..=6 => Level::A2,
        7..=8 => Level::B1,
        9..=10 => Level::B2,
        _ => Level::C1,
    }
}

proptest! {
    #[test]
    fn lowercase_words_follow_length_bands(word in "[a-z]{1,20}") {
        prop_assert_eq!(classify_unknown(&word), band(word.len()));
    }

    #[test]
    fn shorter_words_never_score_higher(a in "[a-z]{1,20}", b in "[a-z]{1,20}") {
        let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        prop_assert!(classify_unknown(&short) <= classify_unknown(&long));
    }

    #[test]
    fn heuristic_never_yields_c2(word in "\\PC{0,40}") {
        prop_assert_ne!(classify_unknown(&word), Level::C2);
    }
}
