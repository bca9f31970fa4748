//! Error types for statistical operations.

use thiserror::Error;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur during statistical operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Invalid parameter value for a distribution.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// Input data is empty when non-empty data is required.
    #[error("Empty data in {context}")]
    EmptyData { context: String },

    /// Input data has insufficient length.
    #[error("Insufficient data in {context}: need {required} elements, got {got}")]
    InsufficientData {
        required: usize,
        got: usize,
        context: String,
    },

    /// Probability value out of range [0, 1].
    #[error("Invalid probability {value}: must be in [0, 1]")]
    InvalidProbability { value: f64 },

    /// Mismatched array lengths.
    #[error("Length mismatch in {context}: expected {expected}, got {got}")]
    LengthMismatch {
        expected: usize,
        got: usize,
        context: String,
    },
}

impl StatsError {
    pub(crate) fn invalid_parameter(name: &str, value: f64, reason: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            value,
            reason: reason.to_string(),
        }
    }
}
