//! # CEFR Lexicon
//!
//! Word-level building blocks for CEFR tagging.
//!
//! ## Lookup order
//!
//! ```text
//! normalized word
//!     │
//!     ├──> A1 tier ─ hit ─> A1
//!     ├──> A2 tier ─ hit ─> A2
//!     │    ...
//!     ├──> C2 tier ─ hit ─> C2
//!     │
//!     └──> miss ─> length heuristic (A1..C1, never C2)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cefr_lexicon::{classify_unknown, normalize, Lexicon, Level};
//!
//! let lexicon = Lexicon::builtin();
//! let word = normalize("  Cat ");
//! assert_eq!(lexicon.classify_known(&word), Some(Level::A1));
//!
//! let unknown = normalize("beautiful");
//! assert_eq!(lexicon.classify_known(&unknown), None);
//! assert_eq!(classify_unknown(&unknown), Level::B2);
//! ```

mod error;
mod heuristic;
mod level;
mod lexicon;
mod words;

pub use error::{LexiconError, Result};
pub use heuristic::classify_unknown;
pub use level::Level;
pub use lexicon::{normalize, Duplicate, Lexicon, LexiconTier};
