use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// UUID v4 identifier for an extracted task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a task. Extraction always produces the configured
/// default (normally `Pending`); later states belong to the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

/// Life-domain a task belongs to.
///
/// Variant order is the classification priority order: when a sentence
/// matches keywords from several categories, the first one here wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Health,
    Work,
    Personal,
    Shopping,
    Other,
}

impl TaskCategory {
    /// All categories in classification priority order.
    pub const ALL: [TaskCategory; 5] = [
        Self::Health,
        Self::Work,
        Self::Personal,
        Self::Shopping,
        Self::Other,
    ];
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Health => "health",
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Shopping => "shopping",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// A to-do item extracted from one sentence of transcript text.
///
/// Immutable after creation — `updated_at` equals `created_at` and the
/// extraction pipeline never touches a task again once it is returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// UUID v4 identifier.
    pub id: TaskId,
    /// The original (non-normalized) sentence the task was extracted from.
    pub text: String,
    /// Calendar date the task is due, if one could be resolved.
    pub due_date: Option<NaiveDate>,
    /// Current status, always the configured default at creation.
    pub status: TaskStatus,
    /// Classified life-domain.
    pub category: TaskCategory,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last updated. Equal to `created_at` at creation.
    pub updated_at: DateTime<Utc>,
}
