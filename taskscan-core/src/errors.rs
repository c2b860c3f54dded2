//! Extraction pipeline errors.
//!
//! These never cross the public extraction surface: the engine catches them
//! at its boundary, logs, and reports "no task found" instead.

/// Errors raised by the internal extraction plumbing.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("invalid options: min_confidence must be within [0.0, 1.0], got {value}")]
    InvalidMinConfidence { value: f64 },
}

pub type ExtractResult<T> = Result<T, ExtractionError>;
