//! # CEFR Annotator
//!
//! Streams a tab-separated file and appends a CEFR level to one field of each
//! record.
//!
//! ## Per line
//!
//! ```text
//! raw line ──> strip \r\n
//!     │
//!     ├──> blank / comment ──────────────> copied as-is
//!     ├──> fewer than min_fields ────────> copied as-is
//!     ├──> text field blank ─────────────> copied as-is
//!     └──> classify text field ──> append level to level field ──> rejoin
//! ```
//!
//! Output order always equals input order. Repeated runs accumulate tags
//! (`"A1"` becomes `"A1 A1"`).
//!
//! ## Example
//!
//! ```no_run
//! use cefr_annotator::{Annotator, AnnotatorConfig};
//! use cefr_classifier::Classifier;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let annotator = Annotator::new(Classifier::builtin(), AnnotatorConfig::default())?;
//!     let stats = annotator.annotate_file("deck.txt", "deck_CEFR.txt").await?;
//!     println!("{} entries tagged", stats.annotated);
//!     Ok(())
//! }
//! ```

mod annotator;
mod config;
mod error;
mod line;
mod stats;

pub use annotator::{default_output_path, AnnotatedLine, Annotator};
pub use config::{AnnotatorConfig, MAX_CONCURRENCY};
pub use error::{AnnotatorError, Result};
pub use line::LineOutcome;
pub use stats::AnnotateStats;
