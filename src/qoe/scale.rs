//! Rating scales and their normalization to the unit interval.

use crate::qoe::error::{QoeError, QoeResult};
use serde::{Deserialize, Serialize};

/// A bounded rating scale `[low, high]`.
///
/// The fields are public so a scale can be written literally or
/// deserialized; every entry point of this crate calls
/// [`validate`](Self::validate) before using one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingScale {
    /// Lowest rating, e.g. 1 on a 5-point ACR scale
    pub low: f64,
    /// Highest rating, e.g. 5 on a 5-point ACR scale
    pub high: f64,
}

impl Default for RatingScale {
    fn default() -> Self {
        Self::FIVE_POINT
    }
}

impl RatingScale {
    /// The 5-point absolute category rating scale `[1, 5]`.
    pub const FIVE_POINT: Self = Self::new(1.0, 5.0);

    /// Most integer points a discretized scale may have.
    pub const MAX_POINTS: i64 = 1_000_000;

    /// Create a scale without validating it.
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Check that both bounds are finite and `low < high`.
    ///
    /// # Errors
    ///
    /// Returns [`QoeError::InvalidScale`] otherwise.
    pub fn validate(&self) -> QoeResult<()> {
        if !self.low.is_finite() || !self.high.is_finite() || self.low >= self.high {
            return Err(QoeError::InvalidScale {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    /// Width of the scale, `high - low`.
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// Map a rating to the unit interval.
    pub fn normalize(&self, x: f64) -> f64 {
        (x - self.low) / self.span()
    }

    /// Map a unit-interval value back onto the scale.
    pub fn denormalize(&self, z: f64) -> f64 {
        self.low + z * self.span()
    }

    /// Whether `x` lies in `[low, high]`. NaN is never contained.
    pub fn contains(&self, x: f64) -> bool {
        (self.low..=self.high).contains(&x)
    }

    /// Largest variance any law on the scale with mean `mos` can have.
    pub fn max_variance(&self, mos: f64) -> f64 {
        (self.high - mos) * (mos - self.low)
    }

    /// Largest SOS any law on the scale with mean `mos` can have.
    ///
    /// The square root is rounded down, so `max_sos(mos)²` never exceeds
    /// [`max_variance`](Self::max_variance) and the result always passes
    /// validation as a raw SOS.
    pub fn max_sos(&self, mos: f64) -> f64 {
        let variance = self.max_variance(mos).max(0.0);
        let mut sos = variance.sqrt();
        while sos > 0.0 && sos * sos > variance {
            sos = f64::from_bits(sos.to_bits() - 1);
        }
        sos
    }

    /// Integer bounds of a scale made of the points `low, low+1, ..., high`.
    ///
    /// # Errors
    ///
    /// Returns [`QoeError::InvalidScale`] for an invalid scale,
    /// [`QoeError::NonIntegerScale`] when a bound is not an integer and
    /// [`QoeError::TooManyPoints`] above [`MAX_POINTS`](Self::MAX_POINTS).
    pub fn integer_bounds(&self) -> QoeResult<(i64, i64)> {
        self.validate()?;
        if self.low.fract() != 0.0
            || self.high.fract() != 0.0
            || self.low.abs() > i64::MAX as f64 / 2.0
            || self.high.abs() > i64::MAX as f64 / 2.0
        {
            return Err(QoeError::NonIntegerScale {
                low: self.low,
                high: self.high,
            });
        }
        if self.high - self.low + 1.0 > Self::MAX_POINTS as f64 {
            return Err(QoeError::TooManyPoints {
                low: self.low,
                high: self.high,
                max_points: Self::MAX_POINTS,
            });
        }
        Ok((self.low as i64, self.high as i64))
    }

    /// The integer rating points of the scale.
    pub fn points(&self) -> QoeResult<Vec<i64>> {
        let (low, high) = self.integer_bounds()?;
        Ok((low..=high).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qoe::validate::{Dispersion, validate_parameters};

    #[test]
    fn test_default_is_five_point() {
        let s = RatingScale::default();
        assert_eq!(s.low, 1.0);
        assert_eq!(s.high, 5.0);
        assert!(s.validate().is_ok());
        assert_eq!(s.points().unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_validate() {
        assert!(matches!(
            RatingScale::new(5.0, 1.0).validate(),
            Err(QoeError::InvalidScale { .. })
        ));
        assert!(RatingScale::new(1.0, 1.0).validate().is_err());
        assert!(RatingScale::new(f64::NAN, 5.0).validate().is_err());
        assert!(RatingScale::new(1.0, f64::INFINITY).validate().is_err());
        assert!(RatingScale::new(-3.0, 3.0).validate().is_ok());
    }

    #[test]
    fn test_normalize() {
        let s = RatingScale::new(1.0, 5.0);
        assert_eq!(s.span(), 4.0);
        assert_eq!(s.normalize(1.0), 0.0);
        assert_eq!(s.normalize(3.0), 0.5);
        assert_eq!(s.normalize(5.0), 1.0);
        assert_eq!(s.denormalize(0.75), 4.0);
    }

    #[test]
    fn test_max_sos() {
        let s = RatingScale::new(1.0, 5.0);
        assert_eq!(s.max_variance(3.0), 4.0);
        assert_eq!(s.max_sos(3.0), 2.0);
        assert_eq!(s.max_sos(5.0), 0.0);
        assert_eq!(s.max_sos(1.0), 0.0);
    }

    #[test]
    fn test_max_sos_never_exceeds_bound() {
        let s = RatingScale::FIVE_POINT;
        for i in 1..400 {
            let mos = 1.0 + 4.0 * i as f64 / 400.0;
            let sos = s.max_sos(mos);
            assert!(sos * sos <= s.max_variance(mos), "mos={}", mos);
            assert!(
                validate_parameters(mos, Dispersion::Sos(sos), s).is_ok(),
                "mos={}",
                mos
            );
        }
    }

    #[test]
    fn test_contains() {
        let s = RatingScale::new(1.0, 5.0);
        assert!(s.contains(1.0));
        assert!(s.contains(5.0));
        assert!(!s.contains(0.999));
        assert!(!s.contains(f64::NAN));
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(RatingScale::new(0.0, 10.0).integer_bounds().unwrap(), (0, 10));
        assert_eq!(RatingScale::new(-3.0, 3.0).points().unwrap().len(), 7);
        assert!(matches!(
            RatingScale::new(0.5, 4.5).integer_bounds(),
            Err(QoeError::NonIntegerScale { .. })
        ));
        assert!(matches!(
            RatingScale::new(4.0, 1.0).integer_bounds(),
            Err(QoeError::InvalidScale { .. })
        ));
    }

    #[test]
    fn test_point_count_is_capped() {
        let max = RatingScale::MAX_POINTS as f64;
        assert_eq!(RatingScale::new(0.0, max - 1.0).points().unwrap().len(), 1_000_000);
        assert!(matches!(
            RatingScale::new(0.0, max).integer_bounds(),
            Err(QoeError::TooManyPoints { .. })
        ));
        assert!(matches!(
            RatingScale::new(0.0, 1e12).points(),
            Err(QoeError::TooManyPoints { .. })
        ));
    }
}
