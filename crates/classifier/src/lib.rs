//! # CEFR Classifier
//!
//! Assigns a CEFR level to a word or a phrase.
//!
//! ## Chain
//!
//! ```text
//! input
//!     │
//!     ├──> Remote lookup (optional, one attempt, bounded wait)
//!     │      └─> level ─────────────────────────────> done
//!     │      └─> unavailable ─┐
//!     │                       ▼
//!     ├──> single word ──> Lexicon ─ miss ─> Heuristic
//!     │
//!     └──> phrase ──> tokenize ──> each token as a word ──> max level
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cefr_classifier::{Classifier, Source};
//! use cefr_lexicon::Level;
//!
//! let classifier = Classifier::builtin();
//! let result = classifier.classify_local("This is a beautiful day");
//! assert_eq!(result.level, Level::B2);
//! assert_eq!(result.source, Source::Heuristic);
//! ```

mod classifier;
mod error;
mod phrase;
mod remote;
mod types;

pub use classifier::Classifier;
pub use error::{ClassifierError, RemoteError, Result};
pub use phrase::{is_phrase, tokenize};
pub use remote::{
    extract_level, DisabledRemoteLookup, HttpRemoteLookup, RemoteConfig, RemoteLookup,
    DEFAULT_REMOTE_TIMEOUT_MS,
};
pub use types::{Classification, ClassificationReport, Source, TokenClassification};
