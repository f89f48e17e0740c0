//! Error types for the aggregation engine.
//!
//! Only structurally invalid input surfaces as an error. Arithmetic and
//! classification edge cases (division by zero, unknown categories, malformed
//! timestamps) are resolved locally with documented defaults and never
//! propagate.

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for engine operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A custom period filter that cannot describe a usable interval, e.g.
    /// a start bound after the end bound. Downstream filtering would be
    /// meaningless, so this is surfaced instead of silently defaulted.
    #[error("invalid custom period: {reason}")]
    InvalidPeriod { reason: String },
}

impl EngineError {
    /// Build an [`EngineError::InvalidPeriod`] with the given reason.
    pub fn invalid_period(reason: impl Into<String>) -> Self {
        EngineError::InvalidPeriod {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_period_display() {
        let err = EngineError::invalid_period("start after end");
        assert_eq!(err.to_string(), "invalid custom period: start after end");
    }
}
