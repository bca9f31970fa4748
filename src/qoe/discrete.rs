//! Discretization of a continuous rating law onto the integer scale points.
//!
//! Point `k` collects the probability of the bin `(k − 0.5, k + 0.5]`. The
//! outer bins are clipped to the scale, `[low, low + 0.5]` and
//! `(high − 0.5, high]`, so no mass falls outside `[low, high]`. The lowest
//! bin is closed at `low` and so also keeps an atom sitting on `low`.

use std::collections::BTreeMap;

use crate::qoe::continuous::RatingDistribution;
use crate::qoe::error::QoeResult;
use crate::qoe::scale::RatingScale;
use crate::stats::{DiscreteDistribution, Distribution, FiniteDiscrete, StatsResult};

/// Probability mass over the points `low, low + 1, ..., high` of a rating scale.
///
/// # Examples
///
/// ```
/// use qoedist::{RatingScale, build_discrete_distribution};
///
/// let d = build_discrete_distribution(4.0, 0.25, RatingScale::new(1.0, 5.0)).unwrap();
/// assert_eq!(d.points(), &[1, 2, 3, 4, 5]);
/// assert!((d.masses().iter().sum::<f64>() - 1.0).abs() < 1e-9);
/// assert!(d.good_or_better() > d.poor_or_worse());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteRatingDistribution {
    scale: RatingScale,
    pmf: FiniteDiscrete,
}

impl DiscreteRatingDistribution {
    /// Discretize the law for a MOS and SOS parameter.
    ///
    /// # Errors
    ///
    /// Validation errors, or [`QoeError::NonIntegerScale`](crate::QoeError::NonIntegerScale).
    pub fn new(mos: f64, sos_parameter: f64, scale: RatingScale) -> QoeResult<Self> {
        RatingDistribution::new(mos, sos_parameter, scale)?.discretize()
    }

    /// Discretize the law for a MOS and raw SOS.
    pub fn from_mos_sos(mos: f64, sos: f64, scale: RatingScale) -> QoeResult<Self> {
        RatingDistribution::from_mos_sos(mos, sos, scale)?.discretize()
    }

    pub(crate) fn from_continuous(dist: &RatingDistribution) -> QoeResult<Self> {
        let scale = dist.scale();
        let (low, high) = scale.integer_bounds()?;

        let mut masses = Vec::with_capacity((high - low + 1) as usize);
        let mut previous = 0.0;
        for k in low..=high {
            let upper = if k == high { scale.high } else { k as f64 + 0.5 };
            let cumulative = dist.cdf_unchecked(upper);
            masses.push((cumulative - previous).max(0.0));
            previous = cumulative;
        }

        Self::from_masses(scale, masses)
    }

    /// Build from masses aligned with the integer points of `scale`.
    pub(crate) fn from_masses(scale: RatingScale, masses: Vec<f64>) -> QoeResult<Self> {
        let points = scale.points()?;
        let pmf = FiniteDiscrete::new(points, masses)?;
        Ok(Self { scale, pmf })
    }

    /// The rating scale.
    pub fn scale(&self) -> RatingScale {
        self.scale
    }

    /// Rating points in increasing order.
    pub fn points(&self) -> &[i64] {
        self.pmf.points()
    }

    /// Masses aligned with [`points`](Self::points).
    pub fn masses(&self) -> &[f64] {
        self.pmf.masses()
    }

    /// Iterate over `(rating, mass)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.pmf.iter()
    }

    /// The distribution as a rating → mass map.
    pub fn to_map(&self) -> BTreeMap<i64, f64> {
        self.pmf.iter().collect()
    }

    /// The underlying finite discrete law.
    pub fn as_finite(&self) -> &FiniteDiscrete {
        &self.pmf
    }

    /// Poor-or-worse ratio: mass at or below the second-lowest point.
    pub fn poor_or_worse(&self) -> f64 {
        let low = self.pmf.points()[0];
        self.pmf.cdf(low + 1)
    }

    /// Good-or-better ratio: mass at or above the second-highest point.
    pub fn good_or_better(&self) -> f64 {
        let high = self.pmf.points()[self.pmf.points().len() - 1];
        self.pmf.sf(high - 2)
    }
}

impl Distribution for DiscreteRatingDistribution {
    fn mean(&self) -> f64 {
        self.pmf.mean()
    }

    fn var(&self) -> f64 {
        self.pmf.var()
    }
}

impl DiscreteDistribution for DiscreteRatingDistribution {
    fn pmf(&self, k: i64) -> f64 {
        self.pmf.pmf(k)
    }

    fn cdf(&self, k: i64) -> f64 {
        self.pmf.cdf(k)
    }

    fn sf(&self, k: i64) -> f64 {
        self.pmf.sf(k)
    }

    fn ppf(&self, p: f64) -> StatsResult<i64> {
        self.pmf.ppf(p)
    }
}

/// Discretize the rating distribution for a MOS and SOS parameter.
///
/// # Errors
///
/// Validation errors, or [`QoeError::NonIntegerScale`](crate::QoeError::NonIntegerScale).
pub fn build_discrete_distribution(
    mos: f64,
    sos_parameter: f64,
    scale: RatingScale,
) -> QoeResult<DiscreteRatingDistribution> {
    DiscreteRatingDistribution::new(mos, sos_parameter, scale)
}
