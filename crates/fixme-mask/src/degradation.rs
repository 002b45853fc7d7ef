//! Graceful degradation for the masker.
//!
//! If a regex pattern fails to compile, masking finds no spans and unmasking
//! falls back to plain substring replacement. The tracker records the gap.

use fixme_core::errors::FixMeError;
use fixme_observability::events;

/// Record of a pattern that failed to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFailure {
    pub pattern_name: String,
    pub fallback: String,
}

/// Degradation tracker: accumulates failures during a mask or unmask pass.
#[derive(Debug, Default)]
pub struct DegradationTracker {
    failures: Vec<PatternFailure>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pattern failure and log it. The caller carries on with the fallback.
    pub fn record_failure(&mut self, pattern_name: &str, fallback: &str) {
        events::degradation_triggered(pattern_name, "pattern failed to compile", fallback);
        self.failures.push(PatternFailure {
            pattern_name: pattern_name.to_string(),
            fallback: fallback.to_string(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[PatternFailure] {
        &self.failures
    }

    /// The first failure as a `DegradedMode` error, for callers that would
    /// rather refuse than run on a fallback.
    pub fn into_error(self) -> Option<FixMeError> {
        self.failures
            .into_iter()
            .next()
            .map(|f| FixMeError::DegradedMode {
                component: f.pattern_name,
                fallback: f.fallback,
            })
    }
}
