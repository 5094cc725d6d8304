use crate::config::AnnotatorConfig;
use crate::error::{AnnotatorError, Result};
use crate::line::{append_level, inspect, strip_terminator, LineOutcome, Record};
use crate::stats::AnnotateStats;
use cefr_classifier::{Classifier, Source};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};

/// One output line and how it was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedLine {
    /// Output text without terminator
    pub text: String,
    pub outcome: LineOutcome,
    /// Set for annotated lines only
    pub source: Option<Source>,
}

impl AnnotatedLine {
    fn unchanged(line: &str, outcome: LineOutcome) -> Self {
        Self {
            text: line.to_string(),
            outcome,
            source: None,
        }
    }
}

enum Plan<'a> {
    Done(AnnotatedLine),
    Classify { fields: Vec<&'a str>, text: &'a str },
}

/// Streaming, order-preserving annotator for tab-separated files
pub struct Annotator {
    classifier: Classifier,
    config: AnnotatorConfig,
}

impl Annotator {
    pub fn new(classifier: Classifier, config: AnnotatorConfig) -> Result<Self> {
        config.validate().map_err(AnnotatorError::invalid_config)?;
        Ok(Self { classifier, config })
    }

    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Annotate a single line. The entry limit does not apply here.
    pub async fn annotate_line(&self, raw: &str) -> AnnotatedLine {
        let line = strip_terminator(raw);
        match inspect(line, &self.config) {
            Record::PassThrough(outcome) => AnnotatedLine::unchanged(line, outcome),
            Record::Data { fields, text } => self.classify_record(&fields, text).await,
        }
    }

    /// Rewrite every line of `reader` into `writer`, one `\n`-terminated line
    /// per input line, in input order.
    ///
    /// Only I/O errors are fatal.
    pub async fn annotate<R, W>(&self, reader: R, writer: &mut W) -> Result<AnnotateStats>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut stats = AnnotateStats::default();
        let mut remaining = self.config.max_entries;
        let mut window: Vec<String> = Vec::new();

        loop {
            window.clear();
            while window.len() < self.config.concurrency {
                match lines.next_line().await? {
                    Some(line) => window.push(line),
                    None => break,
                }
            }
            if window.is_empty() {
                break;
            }

            for line in self.annotate_window(&window, &mut remaining).await {
                if line.outcome == LineOutcome::Short {
                    log::debug!(
                        "Line {}: fewer than {} fields, passing through",
                        stats.lines + 1,
                        self.config.min_fields
                    );
                }
                writer.write_all(line.text.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                stats.record(line.outcome, line.source);
            }
        }

        writer.flush().await?;
        log::debug!(
            "Annotated {} of {} lines ({} skipped by limit)",
            stats.annotated,
            stats.lines,
            stats.skipped
        );
        Ok(stats)
    }

    /// Annotate `input` into `output`.
    ///
    /// Output goes to a temporary sibling first and is renamed into place only
    /// after the whole input was processed, so `output` is either complete or
    /// untouched. `input` and `output` may be the same file.
    pub async fn annotate_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<AnnotateStats> {
        let input = input.as_ref();
        let output = output.as_ref();

        let source = File::open(input)
            .await
            .map_err(|e| AnnotatorError::read(input, e))?;
        let tmp = temp_path_for(output);
        let sink = File::create(&tmp)
            .await
            .map_err(|e| AnnotatorError::write(&tmp, e))?;

        let mut writer = BufWriter::new(sink);
        let result = self.annotate(BufReader::new(source), &mut writer).await;
        drop(writer);

        let stats = match result {
            Ok(stats) => stats,
            Err(err) => {
                tokio::fs::remove_file(&tmp).await.ok();
                return Err(err);
            }
        };

        if let Err(err) = tokio::fs::rename(&tmp, output).await {
            tokio::fs::remove_file(&tmp).await.ok();
            return Err(AnnotatorError::write(output, err));
        }
        Ok(stats)
    }

    async fn annotate_window(
        &self,
        window: &[String],
        remaining: &mut Option<usize>,
    ) -> Vec<AnnotatedLine> {
        let mut plans = Vec::with_capacity(window.len());
        for line in window {
            let line = line.as_str();
            let plan = match inspect(line, &self.config) {
                Record::PassThrough(outcome) => Plan::Done(AnnotatedLine::unchanged(line, outcome)),
                Record::Data { .. } if *remaining == Some(0) => {
                    Plan::Done(AnnotatedLine::unchanged(line, LineOutcome::Skipped))
                }
                Record::Data { fields, text } => {
                    if let Some(left) = remaining.as_mut() {
                        *left -= 1;
                    }
                    Plan::Classify { fields, text }
                }
            };
            plans.push(plan);
        }

        futures::future::join_all(plans.into_iter().map(|plan| async move {
            match plan {
                Plan::Done(line) => line,
                Plan::Classify { fields, text } => self.classify_record(&fields, text).await,
            }
        }))
        .await
    }

    async fn classify_record(&self, fields: &[&str], text: &str) -> AnnotatedLine {
        let classification = self.classifier.classify(text).await;
        AnnotatedLine {
            text: append_level(fields, self.config.level_field, classification.level),
            outcome: LineOutcome::Annotated(classification.level),
            source: Some(classification.source),
        }
    }
}

/// `<stem>_CEFR.<ext>` next to `input`
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let name = match input.extension() {
        Some(ext) => format!("{stem}_CEFR.{}", ext.to_string_lossy()),
        None => format!("{stem}_CEFR"),
    };
    input.with_file_name(name)
}

fn temp_path_for(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.{}.tmp", path.display(), std::process::id()))
}
