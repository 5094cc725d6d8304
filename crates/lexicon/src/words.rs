//! Built-in word lists, one slice per level.
//!
//! Entries are stored already normalized. No word may appear in more than one
//! slice; `builtin_tiers_have_no_cross_tier_duplicates` guards that.

use crate::level::Level;

pub(crate) const A1: &[&str] = &[
    "a", "am", "an", "and", "are", "at", "bad", "be", "big", "blue", "book", "car", "cat", "cold",
    "come", "day", "do", "dog", "drink", "eat", "family", "father", "food", "friend", "go",
    "good", "green", "happy", "has", "have", "he", "hello", "home", "hot", "house", "i", "in",
    "is", "it", "like", "look", "mother", "my", "name", "need", "new", "no", "of", "old", "on",
    "one", "red", "school", "see", "she", "small", "that", "the", "they", "this", "three", "time",
    "to", "two", "want", "water", "we", "work", "year", "yes", "you", "your",
];

pub(crate) const A2: &[&str] = &[
    "about", "after", "again", "answer", "arrive", "because", "believe", "between", "borrow",
    "careful", "cheap", "dangerous", "different", "during", "expensive", "explain", "forget",
    "future", "healthy", "holiday", "hungry", "important", "invite", "journey", "kitchen",
    "large", "market", "most", "often", "question", "quickly", "remember", "sometimes",
    "through", "ticket", "tired", "usually", "village", "weather", "world", "write", "young",
];

pub(crate) const B1: &[&str] = &[
    "accurate", "achieve", "advice", "afford", "ambition", "apply", "argue", "attitude",
    "available", "behaviour", "benefit", "career", "challenge", "compare", "complain",
    "confident", "consider", "culture", "decision", "describe", "environment", "experience",
    "improve", "influence", "knowledge", "opinion", "opportunity", "permanent", "prefer",
    "realise", "reduce", "research", "responsible", "situation", "solution", "suggest",
    "support", "traditional", "various", "volunteer",
];

pub(crate) const B2: &[&str] = &[
    "abandon", "acknowledge", "adequate", "advocate", "allocate", "ambiguous", "anticipate",
    "arbitrary", "assess", "assumption", "bias", "coherent", "compensate", "comprehensive",
    "consequently", "contemplate", "controversial", "crucial", "deteriorate", "dilemma",
    "diminish", "distinguish", "emphasis", "enhance", "evident", "feasible", "fluctuate",
    "hypothesis", "implication", "inevitable", "integrity", "justify", "notion", "perceive",
    "predominantly", "prospect", "reluctant", "subsequent", "sustainable", "undermine",
    "versatile",
];

pub(crate) const C1: &[&str] = &[
    "alleviate", "ambivalent", "articulate", "benevolent", "candid", "circumvent", "coalesce",
    "complacent", "conducive", "corroborate", "culminate", "daunting", "discrepancy", "elicit",
    "empirical", "exacerbate", "exemplify", "formidable", "galvanize", "imminent", "impeccable",
    "intricate", "meticulous", "mitigate", "nuance", "paradigm", "pertinent", "pragmatic",
    "precarious", "prevalent", "proficient", "rigorous", "scrutiny", "succinct", "tenacious",
    "ubiquitous", "unprecedented", "viable", "warrant",
];

pub(crate) const C2: &[&str] = &[
    "abstruse", "acquiesce", "anachronism", "antithesis", "apocryphal", "assuage", "cacophony",
    "capricious", "circumlocution", "conflagration", "deleterious", "ebullient", "egregious",
    "enervate", "ephemeral", "equivocate", "esoteric", "evanescent", "ineffable", "inexorable",
    "insidious", "juxtaposition", "laconic", "loquacious", "magnanimous", "obfuscate",
    "obsequious", "perfunctory", "perspicacious", "pusillanimous", "quintessential",
    "recalcitrant", "sanguine", "serendipity", "sycophant", "vicissitude", "zeitgeist",
];

pub(crate) fn builtin(level: Level) -> &'static [&'static str] {
    match level {
        Level::A1 => A1,
        Level::A2 => A2,
        Level::B1 => B1,
        Level::B2 => B2,
        Level::C1 => C1,
        Level::C2 => C2,
    }
}
