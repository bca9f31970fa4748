//! Discrete distribution on a finite set of integer points.

use super::MASS_TOLERANCE;
use crate::stats::distribution::{DiscreteDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};

/// Discrete distribution given by explicit support points and masses.
///
/// P(X = points[i]) = masses[i]
///
/// Points are strictly increasing integers; masses are non-negative and sum
/// to one.
///
/// # Examples
///
/// ```
/// use qoedist::stats::{DiscreteDistribution, Distribution, FiniteDiscrete};
///
/// let d = FiniteDiscrete::new(vec![1, 2, 3], vec![0.25, 0.5, 0.25]).unwrap();
/// assert!((d.mean() - 2.0).abs() < 1e-12);
/// assert!((d.cdf(2) - 0.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FiniteDiscrete {
    points: Vec<i64>,
    masses: Vec<f64>,
}

impl FiniteDiscrete {
    /// Create a distribution from support points and their masses.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the inputs are empty or differ in length
    /// - points are not strictly increasing
    /// - a mass is negative or not finite
    /// - masses do not sum to one within 1e-9
    pub fn new(points: Vec<i64>, masses: Vec<f64>) -> StatsResult<Self> {
        if points.is_empty() {
            return Err(StatsError::EmptyData {
                context: "FiniteDiscrete::new".to_string(),
            });
        }
        if points.len() != masses.len() {
            return Err(StatsError::LengthMismatch {
                expected: points.len(),
                got: masses.len(),
                context: "FiniteDiscrete::new masses".to_string(),
            });
        }
        if let Some(w) = points.windows(2).find(|w| w[0] >= w[1]) {
            return Err(StatsError::invalid_parameter(
                "points",
                w[1] as f64,
                "support points must be strictly increasing",
            ));
        }
        if let Some(&m) = masses.iter().find(|m| !m.is_finite() || **m < 0.0) {
            return Err(StatsError::invalid_parameter(
                "masses",
                m,
                "masses must be finite and non-negative",
            ));
        }
        let total: f64 = masses.iter().sum();
        if (total - 1.0).abs() > MASS_TOLERANCE {
            return Err(StatsError::invalid_parameter(
                "masses",
                total,
                "masses must sum to 1",
            ));
        }

        Ok(Self { points, masses })
    }

    /// Support points in increasing order.
    pub fn points(&self) -> &[i64] {
        &self.points
    }

    /// Masses aligned with [`points`](Self::points).
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Iterate over `(point, mass)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.points.iter().copied().zip(self.masses.iter().copied())
    }
}

impl Distribution for FiniteDiscrete {
    fn mean(&self) -> f64 {
        self.iter().map(|(k, m)| k as f64 * m).sum()
    }

    fn var(&self) -> f64 {
        let mean = self.mean();
        self.iter()
            .map(|(k, m)| {
                let d = k as f64 - mean;
                d * d * m
            })
            .sum()
    }
}

impl DiscreteDistribution for FiniteDiscrete {
    fn pmf(&self, k: i64) -> f64 {
        match self.points.binary_search(&k) {
            Ok(i) => self.masses[i],
            Err(_) => 0.0,
        }
    }

    fn cdf(&self, k: i64) -> f64 {
        let end = self.points.partition_point(|&p| p <= k);
        if end == self.points.len() {
            return 1.0;
        }
        self.masses[..end].iter().sum()
    }

    fn sf(&self, k: i64) -> f64 {
        let start = self.points.partition_point(|&p| p <= k);
        self.masses[start..].iter().sum()
    }

    fn ppf(&self, p: f64) -> StatsResult<i64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(StatsError::InvalidProbability { value: p });
        }

        let mut acc = 0.0;
        for (k, m) in self.iter() {
            acc += m;
            if acc >= p {
                return Ok(k);
            }
        }
        // Rounding left the running sum just short of p
        Ok(self.points[self.points.len() - 1])
    }
}
