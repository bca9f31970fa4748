//! Continuous rating distributions: a Beta law stretched over the rating
//! scale, or one of its closed-form limits.
//!
//! | input | law |
//! |---|---|
//! | `mos == low` or `mos == high` | point mass at `mos` |
//! | `p == 0` / `sos == 0` | point mass at `mos` |
//! | `p ≈ 1` / `sos` at its maximum | mass only on `low` and `high` |
//! | otherwise | `Beta(a, b)` on `[low, high]` |
//!
//! A point mass at `low` has cumulative 1 on the whole scale: evaluation
//! points below `low` are rejected, so the jump at `low` is never observed.

use log::debug;

use crate::qoe::discrete::DiscreteRatingDistribution;
use crate::qoe::error::{QoeError, QoeResult};
use crate::qoe::scale::RatingScale;
use crate::qoe::shape::{ShapeParameters, shape_parameters, shape_parameters_from_sos};
use crate::qoe::validate::{Dispersion, validate_parameters};
use crate::stats::{Beta, ContinuousDistribution, Distribution};

/// SOS parameters within this distance of 1 give the two-point law. Shape
/// parameters below it are rounding noise of `sos² / max_variance`.
const SATURATION_TOLERANCE: f64 = 1e-12;

/// The law behind a [`RatingDistribution`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingLaw {
    /// All mass on a single rating.
    PointMass { at: f64 },
    /// Mass `1 − p_high` on `low` and `p_high` on `high`.
    TwoPoint { p_high: f64 },
    /// Beta law with location `low` and scale `high − low`.
    Beta(Beta),
}

/// A continuous approximation of the rating distribution for one condition.
///
/// # Examples
///
/// ```
/// use qoedist::stats::Distribution;
/// use qoedist::{RatingScale, build_continuous_distribution};
///
/// let d = build_continuous_distribution(4.0, 0.25, RatingScale::new(1.0, 5.0)).unwrap();
/// assert_eq!(d.cdf(5.0).unwrap(), 1.0);
/// assert!((d.mean() - 4.0).abs() < 1e-12);
/// assert!(d.cdf(5.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingDistribution {
    scale: RatingScale,
    law: RatingLaw,
}

impl RatingDistribution {
    /// Build the distribution for a MOS and SOS parameter.
    ///
    /// # Errors
    ///
    /// Validation errors from [`validate_parameters`].
    pub fn new(mos: f64, sos_parameter: f64, scale: RatingScale) -> QoeResult<Self> {
        validate_parameters(mos, Dispersion::SosParameter(sos_parameter), scale)?;

        let law = if mos == scale.low || mos == scale.high || sos_parameter == 0.0 {
            RatingLaw::PointMass { at: mos }
        } else if sos_parameter >= 1.0 - SATURATION_TOLERANCE {
            RatingLaw::TwoPoint {
                p_high: scale.normalize(mos),
            }
        } else {
            Self::beta_law(shape_parameters(mos, sos_parameter, scale)?, scale)?
        };

        debug!(
            "Rating distribution for MOS {} with SOS parameter {}: {:?}",
            mos, sos_parameter, law
        );
        Ok(Self { scale, law })
    }

    /// Build the distribution for a MOS and raw SOS by moment matching.
    ///
    /// # Errors
    ///
    /// Validation errors from [`validate_parameters`].
    pub fn from_mos_sos(mos: f64, sos: f64, scale: RatingScale) -> QoeResult<Self> {
        validate_parameters(mos, Dispersion::Sos(sos), scale)?;

        let law = if mos == scale.low || mos == scale.high || sos == 0.0 {
            RatingLaw::PointMass { at: mos }
        } else if sos * sos / scale.max_variance(mos) >= 1.0 - SATURATION_TOLERANCE {
            RatingLaw::TwoPoint {
                p_high: scale.normalize(mos),
            }
        } else {
            Self::beta_law(shape_parameters_from_sos(mos, sos, scale)?, scale)?
        };

        debug!(
            "Rating distribution for MOS {} with SOS {}: {:?}",
            mos, sos, law
        );
        Ok(Self { scale, law })
    }

    fn beta_law(shape: ShapeParameters, scale: RatingScale) -> QoeResult<RatingLaw> {
        let beta = Beta::scaled(shape.a, shape.b, scale.low, scale.span())?;
        Ok(RatingLaw::Beta(beta))
    }

    /// The rating scale the distribution lives on.
    pub fn scale(&self) -> RatingScale {
        self.scale
    }

    /// The underlying law.
    pub fn law(&self) -> &RatingLaw {
        &self.law
    }

    /// Shape parameters, if the law is a proper Beta law.
    pub fn shape(&self) -> Option<ShapeParameters> {
        match self.law {
            RatingLaw::Beta(beta) => Some(ShapeParameters {
                a: beta.alpha(),
                b: beta.beta(),
            }),
            _ => None,
        }
    }

    fn check_rating(&self, x: f64) -> QoeResult<()> {
        if !self.scale.contains(x) {
            return Err(QoeError::OutOfRangeRating {
                x,
                low: self.scale.low,
                high: self.scale.high,
            });
        }
        Ok(())
    }

    /// P(X ≤ x) for a rating `x` on the scale.
    ///
    /// # Errors
    ///
    /// [`QoeError::OutOfRangeRating`] if `x ∉ [low, high]`.
    pub fn cdf(&self, x: f64) -> QoeResult<f64> {
        self.check_rating(x)?;
        Ok(self.cdf_unchecked(x))
    }

    /// Density at a rating `x` on the scale. Atoms have infinite density.
    ///
    /// # Errors
    ///
    /// [`QoeError::OutOfRangeRating`] if `x ∉ [low, high]`.
    pub fn pdf(&self, x: f64) -> QoeResult<f64> {
        self.check_rating(x)?;
        let density = match self.law {
            RatingLaw::PointMass { at } => {
                if x == at {
                    f64::INFINITY
                } else {
                    0.0
                }
            }
            RatingLaw::TwoPoint { .. } => {
                if x == self.scale.low || x == self.scale.high {
                    f64::INFINITY
                } else {
                    0.0
                }
            }
            RatingLaw::Beta(beta) => beta.pdf(x),
        };
        Ok(density)
    }

    /// P(X > x) for a rating `x` on the scale.
    ///
    /// # Errors
    ///
    /// [`QoeError::OutOfRangeRating`] if `x ∉ [low, high]`.
    pub fn sf(&self, x: f64) -> QoeResult<f64> {
        self.check_rating(x)?;
        Ok(match self.law {
            RatingLaw::Beta(beta) => beta.sf(x),
            _ => 1.0 - self.cdf_unchecked(x),
        })
    }

    /// Smallest rating x with P(X ≤ x) ≥ q.
    ///
    /// # Errors
    ///
    /// [`QoeError::InvalidProbability`] if `q ∉ [0, 1]`.
    pub fn quantile(&self, q: f64) -> QoeResult<f64> {
        if !(0.0..=1.0).contains(&q) {
            return Err(QoeError::InvalidProbability { value: q });
        }
        Ok(match self.law {
            RatingLaw::PointMass { at } => at,
            RatingLaw::TwoPoint { p_high } => {
                if q <= 1.0 - p_high {
                    self.scale.low
                } else {
                    self.scale.high
                }
            }
            RatingLaw::Beta(beta) => beta.ppf(q)?,
        })
    }

    /// Project onto the integer points of the scale.
    ///
    /// # Errors
    ///
    /// [`QoeError::NonIntegerScale`] if the scale is not made of integers.
    pub fn discretize(&self) -> QoeResult<DiscreteRatingDistribution> {
        DiscreteRatingDistribution::from_continuous(self)
    }

    pub(crate) fn cdf_unchecked(&self, x: f64) -> f64 {
        match self.law {
            RatingLaw::PointMass { at } => {
                if x < at {
                    0.0
                } else {
                    1.0
                }
            }
            RatingLaw::TwoPoint { p_high } => {
                if x < self.scale.low {
                    0.0
                } else if x < self.scale.high {
                    1.0 - p_high
                } else {
                    1.0
                }
            }
            RatingLaw::Beta(beta) => beta.cdf(x),
        }
    }
}

impl Distribution for RatingDistribution {
    fn mean(&self) -> f64 {
        match self.law {
            RatingLaw::PointMass { at } => at,
            RatingLaw::TwoPoint { p_high } => self.scale.denormalize(p_high),
            RatingLaw::Beta(beta) => beta.mean(),
        }
    }

    fn var(&self) -> f64 {
        match self.law {
            RatingLaw::PointMass { .. } => 0.0,
            RatingLaw::TwoPoint { p_high } => {
                let span = self.scale.span();
                p_high * (1.0 - p_high) * span * span
            }
            RatingLaw::Beta(beta) => beta.var(),
        }
    }
}

/// Build the continuous rating distribution for a MOS and SOS parameter.
pub fn build_continuous_distribution(
    mos: f64,
    sos_parameter: f64,
    scale: RatingScale,
) -> QoeResult<RatingDistribution> {
    RatingDistribution::new(mos, sos_parameter, scale)
}

/// P(X ≤ x) of the rating distribution for a MOS and SOS parameter.
///
/// # Errors
///
/// Validation errors, or [`QoeError::OutOfRangeRating`] if `x ∉ [low, high]`.
pub fn cumulative_at(x: f64, mos: f64, sos_parameter: f64, scale: RatingScale) -> QoeResult<f64> {
    RatingDistribution::new(mos, sos_parameter, scale)?.cdf(x)
}

/// Density of the rating distribution for a MOS and SOS parameter.
///
/// # Errors
///
/// Validation errors, or [`QoeError::OutOfRangeRating`] if `x ∉ [low, high]`.
pub fn density_at(x: f64, mos: f64, sos_parameter: f64, scale: RatingScale) -> QoeResult<f64> {
    RatingDistribution::new(mos, sos_parameter, scale)?.pdf(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::DiscreteDistribution;

    const SCALE: RatingScale = RatingScale::FIVE_POINT;

    #[test]
    fn test_beta_law() {
        let d = RatingDistribution::new(4.0, 0.25, SCALE).unwrap();
        let shape = d.shape().unwrap();
        assert!((shape.a - 2.25).abs() < 1e-12);
        assert!((shape.b - 0.75).abs() < 1e-12);

        assert_eq!(d.cdf(1.0).unwrap(), 0.0);
        assert_eq!(d.cdf(5.0).unwrap(), 1.0);
        assert!((d.mean() - 4.0).abs() < 1e-12);
        // SOS² = p·(high − mos)(mos − low)
        assert!((d.var() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_cdf_matches_standard_beta() {
        let d = RatingDistribution::new(2.5, 0.4, SCALE).unwrap();
        let shape = d.shape().unwrap();
        let standard = Beta::new(shape.a, shape.b).unwrap();
        for x in [1.5, 2.0, 3.3, 4.9] {
            let z = SCALE.normalize(x);
            assert!((d.cdf(x).unwrap() - standard.cdf(z)).abs() < 1e-14);
            assert!((d.pdf(x).unwrap() - standard.pdf(z) / 4.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_out_of_range() {
        let d = RatingDistribution::new(3.0, 0.25, SCALE).unwrap();
        for x in [0.99, 5.01, f64::NAN] {
            assert!(matches!(d.cdf(x), Err(QoeError::OutOfRangeRating { .. })));
            assert!(matches!(d.pdf(x), Err(QoeError::OutOfRangeRating { .. })));
        }
        assert!(matches!(
            cumulative_at(6.0, 3.0, 0.25, SCALE),
            Err(QoeError::OutOfRangeRating { .. })
        ));
    }

    #[test]
    fn test_invalid_inputs_fail_before_construction() {
        assert!(matches!(
            RatingDistribution::new(6.0, 0.25, SCALE),
            Err(QoeError::InvalidMos { .. })
        ));
        assert!(matches!(
            RatingDistribution::new(3.0, 1.2, SCALE),
            Err(QoeError::InvalidSosParameter { .. })
        ));
        assert!(matches!(
            RatingDistribution::from_mos_sos(3.0, 3.0, SCALE),
            Err(QoeError::SosExceedsBound { .. })
        ));
        assert!(matches!(
            density_at(3.0, 3.0, 0.25, RatingScale::new(5.0, 1.0)),
            Err(QoeError::InvalidScale { .. })
        ));
    }

    #[test]
    fn test_point_mass_at_high() {
        let d = RatingDistribution::new(5.0, 0.25, SCALE).unwrap();
        assert_eq!(d.law(), &RatingLaw::PointMass { at: 5.0 });
        assert_eq!(d.cdf(1.0).unwrap(), 0.0);
        assert_eq!(d.cdf(4.999).unwrap(), 0.0);
        assert_eq!(d.cdf(5.0).unwrap(), 1.0);
        assert_eq!(d.pdf(5.0).unwrap(), f64::INFINITY);
        assert_eq!(d.pdf(3.0).unwrap(), 0.0);
        assert!(d.shape().is_none());
    }

    #[test]
    fn test_point_mass_at_low_is_one_everywhere() {
        // Cumulative is 1 on the whole scale, including at low itself
        let d = RatingDistribution::new(1.0, 0.25, SCALE).unwrap();
        for x in [1.0, 1.5, 3.0, 5.0] {
            assert_eq!(cumulative_at(x, 1.0, 0.25, SCALE).unwrap(), 1.0);
            assert_eq!(d.cdf(x).unwrap(), 1.0);
        }
        assert_eq!(d.mean(), 1.0);
        assert_eq!(d.var(), 0.0);
    }

    #[test]
    fn test_zero_dispersion() {
        let d = RatingDistribution::new(3.4, 0.0, SCALE).unwrap();
        assert_eq!(d.law(), &RatingLaw::PointMass { at: 3.4 });
        assert_eq!(d.cdf(3.39).unwrap(), 0.0);
        assert_eq!(d.cdf(3.4).unwrap(), 1.0);

        let d = RatingDistribution::from_mos_sos(3.4, 0.0, SCALE).unwrap();
        assert_eq!(d.law(), &RatingLaw::PointMass { at: 3.4 });
    }

    #[test]
    fn test_max_dispersion() {
        let d = RatingDistribution::new(4.0, 1.0, SCALE).unwrap();
        assert_eq!(d.law(), &RatingLaw::TwoPoint { p_high: 0.75 });
        assert!((d.cdf(1.0).unwrap() - 0.25).abs() < 1e-12);
        assert!((d.cdf(4.9).unwrap() - 0.25).abs() < 1e-12);
        assert_eq!(d.cdf(5.0).unwrap(), 1.0);
        assert!((d.mean() - 4.0).abs() < 1e-12);
        // Variance reaches the bound (high − mos)(mos − low)
        assert!((d.var() - 3.0).abs() < 1e-12);

        let d = RatingDistribution::from_mos_sos(3.0, 2.0, SCALE).unwrap();
        assert_eq!(d.law(), &RatingLaw::TwoPoint { p_high: 0.5 });
    }

    #[test]
    fn test_max_sos_sweep_gives_two_point() {
        for i in 1..400 {
            let mos = 1.0 + 4.0 * i as f64 / 400.0;
            let sos = SCALE.max_sos(mos);
            let d = RatingDistribution::from_mos_sos(mos, sos, SCALE).unwrap();
            assert_eq!(
                d.law(),
                &RatingLaw::TwoPoint {
                    p_high: SCALE.normalize(mos)
                },
                "mos={}",
                mos
            );

            let disc = DiscreteRatingDistribution::from_mos_sos(mos, sos, SCALE).unwrap();
            assert!((disc.pmf(1) + disc.pmf(5) - 1.0).abs() < 1e-12, "mos={}", mos);
        }
    }

    #[test]
    fn test_from_mos_sos_matches_sos_parameter() {
        let mos = 2.2;
        let p = 0.3;
        let sos = (p * SCALE.max_variance(mos)).sqrt();
        let a = RatingDistribution::new(mos, p, SCALE).unwrap();
        let b = RatingDistribution::from_mos_sos(mos, sos, SCALE).unwrap();
        for x in [1.0, 1.7, 2.2, 3.9, 5.0] {
            assert!((a.cdf(x).unwrap() - b.cdf(x).unwrap()).abs() < 1e-9);
        }
        assert!((b.std() - sos).abs() < 1e-12);
    }

    #[test]
    fn test_sf_and_quantile() {
        let d = RatingDistribution::new(3.6, 0.2, SCALE).unwrap();
        for x in [1.5, 3.0, 4.5] {
            assert!((d.sf(x).unwrap() + d.cdf(x).unwrap() - 1.0).abs() < 1e-12);
        }
        for q in [0.1, 0.5, 0.9] {
            let x = d.quantile(q).unwrap();
            assert!((d.cdf(x).unwrap() - q).abs() < 1e-8);
        }
        assert_eq!(d.quantile(0.0).unwrap(), 1.0);
        assert_eq!(d.quantile(1.0).unwrap(), 5.0);
        assert!(matches!(
            d.quantile(1.5),
            Err(QoeError::InvalidProbability { .. })
        ));

        let two_point = RatingDistribution::new(4.0, 1.0, SCALE).unwrap();
        assert_eq!(two_point.quantile(0.2).unwrap(), 1.0);
        assert_eq!(two_point.quantile(0.3).unwrap(), 5.0);
    }

    #[test]
    fn test_density_at() {
        // Beta(2, 2) on [1, 5]: f(3) = 1.5 / 4
        let p = 1.0 / 5.0;
        let d = density_at(3.0, 3.0, p, SCALE).unwrap();
        assert!((d - 1.5 / 4.0).abs() < 1e-12);
    }
}
