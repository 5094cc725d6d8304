use crate::phrase::{is_phrase, tokenize};
use crate::remote::{DisabledRemoteLookup, RemoteLookup};
use crate::types::{Classification, Source, TokenClassification};
use cefr_lexicon::{classify_unknown, normalize, Lexicon};
use std::sync::Arc;

/// Single classification entry point.
///
/// The local chain is lexicon, then length heuristic, with phrases scored as
/// their hardest token. When a remote lookup is enabled it is tried once per
/// input (the whole phrase, never per token) and any failure falls back to the
/// local chain for that input.
#[derive(Clone)]
pub struct Classifier {
    lexicon: Arc<Lexicon>,
    remote: Arc<dyn RemoteLookup>,
}

impl Classifier {
    /// Local-only classifier over the given lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            remote: Arc::new(DisabledRemoteLookup),
        }
    }

    /// Local-only classifier over the bundled lexicon
    pub fn builtin() -> Self {
        Self::new(Lexicon::shared())
    }

    #[must_use]
    pub fn with_remote(mut self, remote: Arc<dyn RemoteLookup>) -> Self {
        self.remote = remote;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn remote_enabled(&self) -> bool {
        self.remote.is_enabled()
    }

    /// Classify one word: lexicon hit, else the length heuristic
    pub fn classify_word(&self, word: &str) -> Classification {
        let word = normalize(word);
        match self.lexicon.classify_known(&word) {
            Some(level) => Classification::new(level, Source::Lexicon),
            None => Classification::new(classify_unknown(&word), Source::Heuristic),
        }
    }

    /// Classify a phrase as the maximum level over its tokens.
    ///
    /// Input with no tokens left after punctuation removal is A1.
    pub fn classify_phrase(&self, text: &str) -> Classification {
        let tokens: Vec<TokenClassification> = tokenize(text)
            .into_iter()
            .map(|token| {
                let word = self.classify_word(&token);
                TokenClassification {
                    text: token,
                    level: word.level,
                    source: word.source,
                }
            })
            .collect();

        let Some(hardest) = tokens
            .iter()
            .reduce(|best, next| if next.level > best.level { next } else { best })
        else {
            return Classification::degenerate();
        };

        Classification {
            level: hardest.level,
            source: hardest.source,
            tokens,
        }
    }

    /// Local chain only, dispatching on whether the input holds whitespace
    pub fn classify_local(&self, text: &str) -> Classification {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Classification::degenerate()
        } else if is_phrase(trimmed) {
            self.classify_phrase(trimmed)
        } else {
            self.classify_word(trimmed)
        }
    }

    /// Remote lookup first (if enabled), local chain otherwise or on failure.
    ///
    /// Never fails: an unavailable remote only costs a warning.
    pub async fn classify(&self, text: &str) -> Classification {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Classification::degenerate();
        }

        if self.remote.is_enabled() {
            match self.remote.lookup(trimmed).await {
                Ok(level) => return Classification::new(level, Source::Remote),
                Err(err) => {
                    log::warn!(
                        "Remote lookup via {} failed for '{trimmed}', classifying locally: {err}",
                        self.remote.name()
                    );
                }
            }
        }

        self.classify_local(trimmed)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("words", &self.lexicon.word_count())
            .field("remote", &self.remote.name())
            .finish()
    }
}
