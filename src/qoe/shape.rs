//! Shape parameters of the rescaled Beta law.

use crate::qoe::error::{QoeError, QoeResult};
use crate::qoe::scale::RatingScale;
use crate::qoe::validate::{Dispersion, validate_parameters};
use serde::{Deserialize, Serialize};

/// The two shape parameters `(a, b)` of a Beta law, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeParameters {
    /// Weight toward `high`
    pub a: f64,
    /// Weight toward `low`
    pub b: f64,
}

impl ShapeParameters {
    fn checked(a: f64, b: f64) -> QoeResult<Self> {
        if a.is_finite() && b.is_finite() && a > 0.0 && b > 0.0 {
            Ok(Self { a, b })
        } else {
            Err(QoeError::DegenerateShape { a, b })
        }
    }
}

/// Shape parameters from MOS and SOS parameter.
///
/// `a = (1−p)(mos−low) / ((high−low)p)` and
/// `b = (1−p)(high−mos) / ((high−low)p)`.
///
/// # Errors
///
/// Validation errors, or [`QoeError::DegenerateShape`] when `mos` is on a
/// scale bound or `p` is 0 or 1. Those inputs describe point masses, which
/// [`RatingDistribution`](crate::RatingDistribution) builds directly.
///
/// # Examples
///
/// ```
/// use qoedist::{RatingScale, shape_parameters};
///
/// let s = shape_parameters(4.0, 0.25, RatingScale::new(1.0, 5.0)).unwrap();
/// assert!((s.a - 2.25).abs() < 1e-12);
/// assert!((s.b - 0.75).abs() < 1e-12);
/// ```
pub fn shape_parameters(
    mos: f64,
    sos_parameter: f64,
    scale: RatingScale,
) -> QoeResult<ShapeParameters> {
    validate_parameters(mos, Dispersion::SosParameter(sos_parameter), scale)?;

    let p = sos_parameter;
    let denom = scale.span() * p;
    let a = (1.0 - p) * (mos - scale.low) / denom;
    let b = (1.0 - p) * (scale.high - mos) / denom;
    ShapeParameters::checked(a, b)
}

/// Shape parameters from MOS and SOS by moment matching.
///
/// With `mu = (mos−low)/(high−low)` and `sigma² = (sos/(high−low))²`:
/// `a = ((1−mu)/sigma² − 1/mu)·mu²` and `b = a·(1/mu − 1)`.
///
/// # Errors
///
/// Validation errors, or [`QoeError::DegenerateShape`] when `mos` is on a
/// scale bound, `sos` is zero or `sos` equals its maximum.
pub fn shape_parameters_from_sos(
    mos: f64,
    sos: f64,
    scale: RatingScale,
) -> QoeResult<ShapeParameters> {
    validate_parameters(mos, Dispersion::Sos(sos), scale)?;

    let mu = scale.normalize(mos);
    let sigma = sos / scale.span();
    let sigma2 = sigma * sigma;

    let a = ((1.0 - mu) / sigma2 - 1.0 / mu) * mu * mu;
    let b = a * (1.0 / mu - 1.0);
    ShapeParameters::checked(a, b)
}

/// SOS parameter matching a raw SOS: `p = sos² / ((high−mos)(mos−low))`.
///
/// This inverts `sos² = p·(high−mos)(mos−low)`, the variance of the Beta law
/// built by [`shape_parameters`]. On a scale bound the only feasible SOS is
/// zero and the result is 0.
pub fn sos_parameter_for(mos: f64, sos: f64, scale: RatingScale) -> QoeResult<f64> {
    validate_parameters(mos, Dispersion::Sos(sos), scale)?;

    let max_variance = scale.max_variance(mos);
    if max_variance <= 0.0 {
        return Ok(0.0);
    }
    Ok((sos * sos / max_variance).min(1.0))
}
