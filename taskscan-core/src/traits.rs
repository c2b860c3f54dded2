use serde::{Deserialize, Serialize};

use crate::task::{Confidence, Task};

/// Result of a successful extraction: the task plus scoring metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskExtraction {
    /// The extracted task.
    pub task: Task,
    /// Confidence score of the extraction.
    pub confidence: Confidence,
    /// The original text that was processed.
    pub source_text: String,
}

/// Task extraction from free-form text.
///
/// "Not a task", "below threshold", and internal faults all collapse to
/// `None` — implementations never surface an error to the caller.
pub trait ITaskExtractor: Send + Sync {
    /// Extract zero-or-one task from one sentence of text.
    fn extract(&self, text: &str) -> Option<TaskExtraction>;
}
