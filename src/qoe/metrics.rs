//! Tail-mass QoE metrics of the discretized rating distribution.

use crate::qoe::discrete::build_discrete_distribution;
use crate::qoe::error::QoeResult;
use crate::qoe::scale::RatingScale;

/// Poor-or-worse ratio for a MOS and SOS parameter: P(rating ≤ low + 1).
///
/// # Errors
///
/// Validation errors, or [`QoeError::NonIntegerScale`](crate::QoeError::NonIntegerScale).
///
/// # Examples
///
/// ```
/// use qoedist::{RatingScale, poor_or_worse};
///
/// assert_eq!(poor_or_worse(5.0, 0.25, RatingScale::new(1.0, 5.0)).unwrap(), 0.0);
/// ```
pub fn poor_or_worse(mos: f64, sos_parameter: f64, scale: RatingScale) -> QoeResult<f64> {
    Ok(build_discrete_distribution(mos, sos_parameter, scale)?.poor_or_worse())
}

/// Good-or-better ratio for a MOS and SOS parameter: P(rating ≥ high − 1).
///
/// # Errors
///
/// Validation errors, or [`QoeError::NonIntegerScale`](crate::QoeError::NonIntegerScale).
pub fn good_or_better(mos: f64, sos_parameter: f64, scale: RatingScale) -> QoeResult<f64> {
    Ok(build_discrete_distribution(mos, sos_parameter, scale)?.good_or_better())
}
