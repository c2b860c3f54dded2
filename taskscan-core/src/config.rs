//! Per-call extraction options.

use serde::{Deserialize, Serialize};

use crate::errors::{ExtractResult, ExtractionError};
use crate::task::{Confidence, TaskCategory, TaskStatus};

/// Options for a task extraction call. Supplied per call (or per engine
/// instance); there is no persisted or global configuration state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Minimum confidence score required to return a task, in [0.0, 1.0].
    pub min_confidence: f64,
    /// Category assigned when no keyword table matches.
    pub default_category: TaskCategory,
    /// Status assigned to newly created tasks.
    pub default_status: TaskStatus,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_confidence: Confidence::LOW,
            default_category: TaskCategory::Other,
            default_status: TaskStatus::Pending,
        }
    }
}

impl ExtractOptions {
    /// Validate option ranges. An out-of-range threshold is the one way a
    /// caller can hand the engine malformed configuration.
    pub fn validate(&self) -> ExtractResult<()> {
        if !self.min_confidence.is_finite() || !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ExtractionError::InvalidMinConfidence {
                value: self.min_confidence,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_pipeline_contract() {
        let opts = ExtractOptions::default();
        assert_eq!(opts.min_confidence, 0.3);
        assert_eq!(opts.default_category, TaskCategory::Other);
        assert_eq!(opts.default_status, TaskStatus::Pending);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let mut opts = ExtractOptions::default();
        opts.min_confidence = 1.2;
        assert!(opts.validate().is_err());
        opts.min_confidence = -0.1;
        assert!(opts.validate().is_err());
        opts.min_confidence = f64::NAN;
        assert!(opts.validate().is_err());
    }
}
