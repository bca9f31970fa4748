//! Error types for QoE distribution estimation.

use crate::stats::StatsError;
use thiserror::Error;

/// Result type for QoE estimation.
pub type QoeResult<T> = Result<T, QoeError>;

/// Errors raised while validating inputs or building rating distributions.
///
/// Every failure is raised before a distribution is produced; no partial
/// results are returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QoeError {
    /// Scale bounds are not finite or `low >= high`.
    #[error("invalid rating scale [{low}, {high}]: bounds must be finite with low < high")]
    InvalidScale { low: f64, high: f64 },

    /// The scale is valid but its points are not evenly spaced integers.
    #[error("rating scale [{low}, {high}] does not consist of integer points")]
    NonIntegerScale { low: f64, high: f64 },

    /// An integer scale with more points than a discrete law may hold.
    #[error("rating scale [{low}, {high}] has more than {max_points} integer points")]
    TooManyPoints { low: f64, high: f64, max_points: i64 },

    /// MOS outside `[low, high]`.
    #[error("MOS {mos} must be in the range [{low}, {high}]")]
    InvalidMos { mos: f64, low: f64, high: f64 },

    /// Negative (or NaN) SOS.
    #[error("SOS {sos} must be a non-negative number")]
    InvalidSos { sos: f64 },

    /// SOS larger than the maximum achievable for the given MOS.
    #[error("SOS {sos} exceeds the maximum SOS {max_sos} for MOS {mos}")]
    SosExceedsBound { sos: f64, mos: f64, max_sos: f64 },

    /// SOS parameter outside `[0, 1]`.
    #[error("SOS parameter {value} must be in the range [0, 1]")]
    InvalidSosParameter { value: f64 },

    /// Evaluation point outside the rating scale.
    #[error("rating {x} must be in the range [{low}, {high}]")]
    OutOfRangeRating { x: f64, low: f64, high: f64 },

    /// Rating samples are not one of the supported shapes.
    #[error("invalid rating samples: {reason}")]
    InvalidInputType { reason: String },

    /// Inputs are feasible but do not determine a proper Beta law.
    #[error("shape parameters (a = {a}, b = {b}) must be positive and finite")]
    DegenerateShape { a: f64, b: f64 },

    /// Per-condition MOS and SOS slices differ in length.
    #[error("{mos} MOS values but {sos} SOS values")]
    LengthMismatch { mos: usize, sos: usize },

    /// No conditions or MOS values were supplied.
    #[error("no measurements given")]
    EmptyMeasurements,

    /// All conditions sit on a scale bound, leaving the SOS parameter undetermined.
    #[error("all {conditions} conditions have their MOS on a scale bound")]
    UninformativeMeasurements { conditions: usize },

    /// Probability argument outside `[0, 1]`.
    #[error("probability {value} must be in the range [0, 1]")]
    InvalidProbability { value: f64 },

    /// Failure reported by the underlying distribution.
    #[error(transparent)]
    Distribution(#[from] StatsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QoeError::SosExceedsBound {
            sos: 3.0,
            mos: 3.0,
            max_sos: 2.0,
        };
        assert_eq!(err.to_string(), "SOS 3 exceeds the maximum SOS 2 for MOS 3");

        let err = QoeError::InvalidScale {
            low: 5.0,
            high: 1.0,
        };
        assert!(err.to_string().contains("[5, 1]"));

        let err: QoeError = StatsError::InvalidProbability { value: 2.0 }.into();
        assert!(matches!(err, QoeError::Distribution(_)));
        assert!(err.to_string().contains("[0, 1]"));
    }
}
