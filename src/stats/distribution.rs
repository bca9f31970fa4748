//! Distribution traits shared by continuous and discrete laws.

use crate::stats::error::StatsResult;

/// Moments common to every distribution.
pub trait Distribution {
    /// Expected value.
    fn mean(&self) -> f64;

    /// Variance.
    fn var(&self) -> f64;

    /// Standard deviation.
    fn std(&self) -> f64 {
        self.var().sqrt()
    }
}

/// A distribution with a density on the real line.
pub trait ContinuousDistribution: Distribution {
    /// Probability density function.
    fn pdf(&self, x: f64) -> f64;

    /// Natural log of the density.
    fn log_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: f64) -> f64;

    /// Survival function P(X > x).
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Percent point function (inverse CDF).
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is not in [0, 1].
    fn ppf(&self, p: f64) -> StatsResult<f64>;
}

/// A distribution with mass on integer points.
pub trait DiscreteDistribution: Distribution {
    /// Probability mass function P(X = k).
    fn pmf(&self, k: i64) -> f64;

    /// Cumulative distribution function P(X ≤ k).
    fn cdf(&self, k: i64) -> f64;

    /// Survival function P(X > k).
    fn sf(&self, k: i64) -> f64 {
        1.0 - self.cdf(k)
    }

    /// Smallest support point k with P(X ≤ k) ≥ p.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is not in [0, 1].
    fn ppf(&self, p: f64) -> StatsResult<i64>;
}
