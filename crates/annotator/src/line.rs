use crate::config::AnnotatorConfig;
use cefr_lexicon::Level;

/// What happened to one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Blank,
    Comment,
    /// Fewer fields than the configured minimum
    Short,
    /// Enough fields, but the text field is blank
    EmptyText,
    /// Left untouched because the entry limit was reached
    Skipped,
    Annotated(Level),
}

/// A line stripped of its terminator, sorted into pass-through or data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Record<'a> {
    PassThrough(LineOutcome),
    Data { fields: Vec<&'a str>, text: &'a str },
}

/// Drop one trailing `\n` or `\r\n`; any other `\r` is content.
pub(crate) fn strip_terminator(raw: &str) -> &str {
    match raw.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => raw,
    }
}

/// Sort a terminator-free line.
///
/// A marker-prefixed line counts as a comment only when it carries no tab:
/// a record whose first field happens to start with the marker is still data.
pub(crate) fn inspect<'a>(line: &'a str, config: &AnnotatorConfig) -> Record<'a> {
    if line.trim().is_empty() {
        return Record::PassThrough(LineOutcome::Blank);
    }
    if line.starts_with(config.comment_marker.as_str()) && !line.contains('\t') {
        return Record::PassThrough(LineOutcome::Comment);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < config.min_fields {
        return Record::PassThrough(LineOutcome::Short);
    }

    let text = fields[config.text_field].trim();
    if text.is_empty() {
        return Record::PassThrough(LineOutcome::EmptyText);
    }
    Record::Data { fields, text }
}

/// Rejoin `fields` with `level` appended to the level field.
///
/// Existing tags are trimmed and kept; the new tag follows after one space.
pub(crate) fn append_level(fields: &[&str], level_field: usize, level: Level) -> String {
    let existing = fields[level_field].trim();
    let tagged = if existing.is_empty() {
        level.as_str().to_string()
    } else {
        format!("{existing} {level}")
    };

    let mut out: Vec<&str> = fields.to_vec();
    out[level_field] = &tagged;
    out.join("\t")
}
