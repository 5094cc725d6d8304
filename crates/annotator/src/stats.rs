use crate::line::LineOutcome;
use cefr_classifier::Source;
use cefr_lexicon::Level;
use serde::Serialize;
use std::collections::BTreeMap;

/// Counters for one annotation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotateStats {
    /// Every input line, whatever happened to it
    pub lines: usize,
    pub annotated: usize,
    pub blank: usize,
    pub comment: usize,
    pub short: usize,
    pub empty_text: usize,
    pub skipped: usize,
    /// Annotated entries answered by the remote lookup
    pub remote: usize,
    pub by_level: BTreeMap<Level, usize>,
}

impl AnnotateStats {
    pub(crate) fn record(&mut self, outcome: LineOutcome, source: Option<Source>) {
        self.lines += 1;
        match outcome {
            LineOutcome::Blank => self.blank += 1,
            LineOutcome::Comment => self.comment += 1,
            LineOutcome::Short => self.short += 1,
            LineOutcome::EmptyText => self.empty_text += 1,
            LineOutcome::Skipped => self.skipped += 1,
            LineOutcome::Annotated(level) => {
                self.annotated += 1;
                *self.by_level.entry(level).or_default() += 1;
                if source == Some(Source::Remote) {
                    self.remote += 1;
                }
            }
        }
    }

    /// Lines copied through without a new tag
    pub fn passed_through(&self) -> usize {
        self.lines - self.annotated
    }
}
