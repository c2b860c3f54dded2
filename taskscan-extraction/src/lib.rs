//! # taskscan-extraction
//!
//! Keyword and pattern based task extraction. One pass over a normalized
//! sentence: verb gate, due-date resolution, category classification,
//! confidence scoring, threshold filter, task assembly.
//!
//! All lookup tables are immutable statics with process lifetime; the
//! engine is stateless apart from its options and safe to share across
//! threads.

pub mod engine;
pub mod patterns;
pub mod scoring;

pub use engine::TaskExtractor;
