//! Feasibility checks run before any distribution is built.

use crate::qoe::error::{QoeError, QoeResult};
use crate::qoe::scale::RatingScale;

/// A dispersion measure, either raw or normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dispersion {
    /// Standard deviation of opinion scores, on the rating scale.
    Sos(f64),
    /// Scale-invariant SOS parameter in `[0, 1]`.
    SosParameter(f64),
}

/// Validate a MOS together with its dispersion on a rating scale.
///
/// Checks, in order: the scale, the MOS range, then the dispersion. A raw
/// SOS must be non-negative and satisfy `sos² ≤ (high − mos)(mos − low)`;
/// an SOS parameter must lie in `[0, 1]`.
///
/// # Errors
///
/// [`QoeError::InvalidScale`], [`QoeError::InvalidMos`],
/// [`QoeError::InvalidSos`], [`QoeError::SosExceedsBound`] or
/// [`QoeError::InvalidSosParameter`].
///
/// # Examples
///
/// ```
/// use qoedist::{Dispersion, QoeError, RatingScale, validate_parameters};
///
/// let scale = RatingScale::new(1.0, 5.0);
/// assert!(validate_parameters(3.0, Dispersion::Sos(2.0), scale).is_ok());
/// assert!(matches!(
///     validate_parameters(3.0, Dispersion::Sos(3.0), scale),
///     Err(QoeError::SosExceedsBound { .. })
/// ));
/// ```
pub fn validate_parameters(mos: f64, dispersion: Dispersion, scale: RatingScale) -> QoeResult<()> {
    scale.validate()?;
    validate_mos(mos, scale)?;

    match dispersion {
        Dispersion::Sos(sos) => {
            if sos.is_nan() || sos < 0.0 {
                return Err(QoeError::InvalidSos { sos });
            }
            if sos * sos > scale.max_variance(mos) {
                return Err(QoeError::SosExceedsBound {
                    sos,
                    mos,
                    max_sos: scale.max_sos(mos),
                });
            }
        }
        Dispersion::SosParameter(value) => {
            if !(0.0..=1.0).contains(&value) {
                return Err(QoeError::InvalidSosParameter { value });
            }
        }
    }
    Ok(())
}

pub(crate) fn validate_mos(mos: f64, scale: RatingScale) -> QoeResult<()> {
    if !scale.contains(mos) {
        return Err(QoeError::InvalidMos {
            mos,
            low: scale.low,
            high: scale.high,
        });
    }
    Ok(())
}
