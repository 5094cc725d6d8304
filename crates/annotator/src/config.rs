use serde::{Deserialize, Serialize};

/// Upper bound on lines classified at once
pub const MAX_CONCURRENCY: usize = 1024;

/// Layout of the annotated file and run limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// 0-based field holding the word or phrase to classify
    pub text_field: usize,

    /// 0-based field receiving the level tag
    pub level_field: usize,

    /// Data lines with fewer fields pass through unchanged
    pub min_fields: usize,

    /// Prefix of header/comment lines
    pub comment_marker: String,

    /// Stop classifying after this many entries; later lines are copied as-is
    pub max_entries: Option<usize>,

    /// Lines classified concurrently (output order is always input order)
    pub concurrency: usize,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            text_field: 3,
            level_field: 11,
            min_fields: 12,
            comment_marker: "#".to_string(),
            max_entries: None,
            concurrency: 1,
        }
    }
}

impl AnnotatorConfig {
    /// Layout that appends levels to a tags column (field 14 of 15)
    pub fn tags_column() -> Self {
        Self {
            level_field: 14,
            min_fields: 15,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_fields <= self.text_field {
            return Err(format!(
                "min_fields ({}) must cover text_field ({})",
                self.min_fields, self.text_field
            ));
        }

        if self.min_fields <= self.level_field {
            return Err(format!(
                "min_fields ({}) must cover level_field ({})",
                self.min_fields, self.level_field
            ));
        }

        if self.comment_marker.is_empty() {
            return Err("comment_marker must not be empty".to_string());
        }

        if self.comment_marker.contains('\t') {
            return Err("comment_marker must not contain a tab".to_string());
        }

        if self.max_entries == Some(0) {
            return Err("max_entries must be > 0".to_string());
        }

        if self.concurrency == 0 {
            return Err("concurrency must be > 0".to_string());
        }

        if self.concurrency > MAX_CONCURRENCY {
            return Err(format!(
                "concurrency ({}) must be <= {MAX_CONCURRENCY}",
                self.concurrency
            ));
        }

        Ok(())
    }
}
