//! TaskExtractor — the single public extraction surface.

use chrono::Utc;
use tracing::{debug, warn};

use taskscan_core::{
    ExtractOptions, ExtractResult, ITaskExtractor, Task, TaskExtraction, TaskId,
};

use crate::patterns::{categories, dates, verbs};
use crate::scoring;

/// Extracts zero-or-one task from a sentence of free-form text.
///
/// Stateless apart from its options; reads only the immutable pattern
/// tables, so one instance can be shared across threads.
pub struct TaskExtractor {
    options: ExtractOptions,
}

impl TaskExtractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    /// Create an extractor with caller-supplied options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract a task from `text`.
    ///
    /// Returns `None` when the text is not a task, when confidence falls
    /// below the configured threshold, or when an internal fault occurs —
    /// faults are logged here and never surfaced to the caller.
    pub fn extract_task(&self, text: &str) -> Option<TaskExtraction> {
        match self.try_extract(text) {
            Ok(result) => result,
            Err(error) => {
                warn!(%error, "task extraction failed");
                None
            }
        }
    }

    fn try_extract(&self, text: &str) -> ExtractResult<Option<TaskExtraction>> {
        self.options.validate()?;

        let normalized = text.to_lowercase();
        let normalized = normalized.trim();

        let matched_verbs = verbs::matched_verbs(normalized);
        if matched_verbs.is_empty() {
            debug!("no task verb present, not a task");
            return Ok(None);
        }

        let due_date = dates::resolve_due_date(normalized, Utc::now().date_naive());
        let category = categories::determine_category(normalized, self.options.default_category);
        let keyword_hits = categories::keyword_hits(normalized, category);

        let confidence = scoring::confidence(
            due_date.is_some(),
            category,
            matched_verbs.len(),
            keyword_hits,
        );

        if confidence.value() < self.options.min_confidence {
            debug!(%confidence, threshold = self.options.min_confidence, "below confidence threshold");
            return Ok(None);
        }

        let now = Utc::now();
        let task = Task {
            id: TaskId::new(),
            text: text.to_string(),
            due_date,
            status: self.options.default_status,
            category,
            created_at: now,
            updated_at: now,
        };

        Ok(Some(TaskExtraction {
            task,
            confidence,
            source_text: text.to_string(),
        }))
    }
}

impl Default for TaskExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ITaskExtractor for TaskExtractor {
    fn extract(&self, text: &str) -> Option<TaskExtraction> {
        self.extract_task(text)
    }
}
