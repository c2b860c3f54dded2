//! Task model: the extracted to-do item and its supporting value types.

mod base;
mod confidence;

pub use base::{Task, TaskCategory, TaskId, TaskStatus};
pub use confidence::Confidence;
