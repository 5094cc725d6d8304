use cefr_classifier::{tokenize, Classifier};
use cefr_lexicon::Level;
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,14}",
        Just("cat".to_string()),
        Just("weather".to_string()),
        Just("hypothesis".to_string()),
        Just("ephemeral".to_string()),
        Just("Meticulous,".to_string()),
    ]
}

proptest! {
    #[test]
    fn phrase_level_is_max_of_token_levels(words in prop::collection::vec(word(), 2..8)) {
        let classifier = Classifier::builtin();
        let phrase = words.join(" ");

        let expected = tokenize(&phrase)
            .iter()
            .map(|token| classifier.classify_word(token).level)
            .max()
            .unwrap_or(Level::A1);

        let result = classifier.classify_phrase(&phrase);
        prop_assert_eq!(result.level, expected);
        prop_assert!(result.tokens.iter().all(|t| t.level <= result.level));
    }
}

#[test]
fn cat_beautiful_is_max_of_parts() {
    let classifier = Classifier::builtin();
    let expected = classifier
        .classify_word("cat")
        .level
        .max(classifier.classify_word("beautiful").level);
    assert_eq!(classifier.classify_phrase("cat beautiful").level, expected);
    assert_eq!(expected, Level::B2);
}
