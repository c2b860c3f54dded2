//! # taskscan-core
//!
//! Foundation crate for the taskscan extraction pipeline.
//! Defines the task model, extraction options, errors, and the extractor trait.
//! The engine crate depends on this; no heavy dependencies live here.

pub mod config;
pub mod errors;
pub mod task;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ExtractOptions;
pub use errors::{ExtractResult, ExtractionError};
pub use task::{Confidence, Task, TaskCategory, TaskId, TaskStatus};
pub use traits::{ITaskExtractor, TaskExtraction};
