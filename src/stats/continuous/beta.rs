//! Beta distribution.

use super::special;
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};

/// Beta distribution on [loc, loc + scale].
///
/// The standard beta distribution with shape parameters α and β has PDF:
///
/// f(z) = z^(α-1) (1-z)^(β-1) / B(α, β)  for 0 < z < 1
///
/// where B(α, β) is the beta function. A location/scale pair moves it to an
/// arbitrary interval: X = loc + scale·Z.
///
/// # Examples
///
/// ```
/// use qoedist::stats::{Beta, ContinuousDistribution, Distribution};
///
/// // Uniform distribution as Beta(1, 1)
/// let b = Beta::new(1.0, 1.0).unwrap();
/// assert!((b.pdf(0.5) - 1.0).abs() < 1e-10);
///
/// // The same shape stretched over a 5-point rating scale
/// let b = Beta::scaled(2.25, 0.75, 1.0, 4.0).unwrap();
/// assert!((b.mean() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beta {
    /// Shape parameter α
    alpha: f64,
    /// Shape parameter β
    beta: f64,
    /// Lower end of the support
    loc: f64,
    /// Width of the support
    scale: f64,
    /// Log of normalizing constant: -ln(B(α, β))
    log_norm: f64,
}

impl Beta {
    /// Create a new beta distribution on [0, 1] with shape parameters α and β.
    ///
    /// # Arguments
    ///
    /// * `alpha` - First shape parameter (must be positive)
    /// * `beta` - Second shape parameter (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error if parameters are not positive and finite.
    pub fn new(alpha: f64, beta: f64) -> StatsResult<Self> {
        Self::scaled(alpha, beta, 0.0, 1.0)
    }

    /// Create a beta distribution supported on [loc, loc + scale].
    ///
    /// # Errors
    ///
    /// Returns an error if a shape parameter is not positive and finite, or if
    /// `scale` is not positive and finite.
    pub fn scaled(alpha: f64, beta: f64, loc: f64, scale: f64) -> StatsResult<Self> {
        if alpha.is_nan() || alpha <= 0.0 {
            return Err(StatsError::invalid_parameter(
                "alpha",
                alpha,
                "must be positive",
            ));
        }
        if beta.is_nan() || beta <= 0.0 {
            return Err(StatsError::invalid_parameter("beta", beta, "must be positive"));
        }
        if !alpha.is_finite() || !beta.is_finite() {
            return Err(StatsError::invalid_parameter(
                "alpha/beta",
                alpha,
                "parameters must be finite",
            ));
        }
        if !loc.is_finite() {
            return Err(StatsError::invalid_parameter("loc", loc, "must be finite"));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(StatsError::invalid_parameter(
                "scale",
                scale,
                "must be positive and finite",
            ));
        }

        let log_norm = -special::lbeta(alpha, beta);
        Ok(Self {
            alpha,
            beta,
            loc,
            scale,
            log_norm,
        })
    }

    /// Get the first shape parameter α.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the second shape parameter β.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Lower end of the support.
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Width of the support.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn standardize(&self, x: f64) -> f64 {
        (x - self.loc) / self.scale
    }

    /// Density of the standard law at z ∈ [0, 1].
    fn standard_pdf(&self, z: f64) -> f64 {
        if z <= 0.0 || z >= 1.0 {
            // Boundary values depend on the shape
            if z == 0.0 && self.alpha < 1.0 {
                return f64::INFINITY;
            }
            if z == 1.0 && self.beta < 1.0 {
                return f64::INFINITY;
            }
            if z == 0.0 && self.alpha == 1.0 {
                return self.log_norm.exp();
            }
            if z == 1.0 && self.beta == 1.0 {
                return self.log_norm.exp();
            }
            return 0.0;
        }
        (self.log_norm + (self.alpha - 1.0) * z.ln() + (self.beta - 1.0) * (1.0 - z).ln()).exp()
    }
}

impl Distribution for Beta {
    fn mean(&self) -> f64 {
        self.loc + self.scale * self.alpha / (self.alpha + self.beta)
    }

    fn var(&self) -> f64 {
        let sum = self.alpha + self.beta;
        self.scale * self.scale * (self.alpha * self.beta) / (sum * sum * (sum + 1.0))
    }
}

impl ContinuousDistribution for Beta {
    fn pdf(&self, x: f64) -> f64 {
        self.standard_pdf(self.standardize(x)) / self.scale
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        if z <= 0.0 || z >= 1.0 {
            return self.pdf(x).ln();
        }
        self.log_norm + (self.alpha - 1.0) * z.ln() + (self.beta - 1.0) * (1.0 - z).ln()
            - self.scale.ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        if z <= 0.0 {
            0.0
        } else if z >= 1.0 {
            1.0
        } else {
            special::betainc(self.alpha, self.beta, z)
        }
    }

    fn sf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        if z <= 0.0 {
            1.0
        } else if z >= 1.0 {
            0.0
        } else {
            // SF(z; α, β) = I_{1-z}(β, α)
            special::betainc(self.beta, self.alpha, 1.0 - z)
        }
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(StatsError::InvalidProbability { value: p });
        }
        let z = if p == 0.0 {
            0.0
        } else if p == 1.0 {
            1.0
        } else {
            special::betaincinv(self.alpha, self.beta, p)
        };
        Ok(self.loc + self.scale * z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beta_creation() {
        let b = Beta::new(2.0, 3.0).unwrap();
        assert!((b.alpha() - 2.0).abs() < 1e-10);
        assert!((b.beta() - 3.0).abs() < 1e-10);
        assert_eq!(b.loc(), 0.0);
        assert_eq!(b.scale(), 1.0);

        assert!(Beta::new(0.0, 1.0).is_err());
        assert!(Beta::new(1.0, 0.0).is_err());
        assert!(Beta::new(-1.0, 1.0).is_err());
        assert!(Beta::new(f64::NAN, 1.0).is_err());
        assert!(Beta::new(f64::INFINITY, 1.0).is_err());
        assert!(Beta::scaled(1.0, 1.0, 1.0, 0.0).is_err());
        assert!(Beta::scaled(1.0, 1.0, 1.0, -4.0).is_err());
    }

    #[test]
    fn test_beta_uniform() {
        // Beta(1, 1) = Uniform(0, 1)
        let b = Beta::new(1.0, 1.0).unwrap();

        assert!((b.mean() - 0.5).abs() < 1e-10);
        assert!((b.var() - 1.0 / 12.0).abs() < 1e-10);
        assert!((b.pdf(0.5) - 1.0).abs() < 1e-10);
        assert!((b.cdf(0.5) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_beta_moments() {
        let b = Beta::new(2.0, 5.0).unwrap();

        // Mean = α/(α+β) = 2/7
        assert!((b.mean() - 2.0 / 7.0).abs() < 1e-10);

        // Var = αβ/((α+β)²(α+β+1)) = 10/(49*8) = 10/392
        assert!((b.var() - 10.0 / 392.0).abs() < 1e-10);
    }

    #[test]
    fn test_beta_scaled_moments() {
        // Shape of MOS 4 with SOS parameter 0.25 on [1, 5]
        let b = Beta::scaled(2.25, 0.75, 1.0, 4.0).unwrap();
        assert!((b.mean() - 4.0).abs() < 1e-12);

        // SOS² = p·(high − mos)(mos − low) = 0.25·1·3
        assert!((b.var() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_beta_pdf() {
        let b = Beta::new(2.0, 2.0).unwrap();

        // Symmetric around 0.5
        assert!((b.pdf(0.3) - b.pdf(0.7)).abs() < 1e-10);

        // Mode at 0.5
        let mode_pdf = b.pdf(0.5);
        assert!(b.pdf(0.3) < mode_pdf);
        assert!(b.pdf(0.7) < mode_pdf);

        // PDF = 0 outside [0, 1]
        assert!((b.pdf(-0.1) - 0.0).abs() < 1e-10);
        assert!((b.pdf(1.1) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_beta_scaled_pdf_integrates_to_one() {
        let b = Beta::scaled(2.0, 3.0, 1.0, 4.0).unwrap();
        let n = 4000;
        let h = 4.0 / n as f64;
        let total: f64 = (0..n)
            .map(|i| b.pdf(1.0 + (i as f64 + 0.5) * h) * h)
            .sum();
        assert!((total - 1.0).abs() < 1e-6);

        assert!((b.log_pdf(2.5) - b.pdf(2.5).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_beta_cdf() {
        let b = Beta::new(2.0, 2.0).unwrap();

        assert!((b.cdf(0.0) - 0.0).abs() < 1e-10);
        assert!((b.cdf(0.5) - 0.5).abs() < 1e-10); // Symmetric
        assert!((b.cdf(1.0) - 1.0).abs() < 1e-10);

        // CDF is monotonic
        assert!(b.cdf(0.3) < b.cdf(0.5));
        assert!(b.cdf(0.5) < b.cdf(0.7));
    }

    #[test]
    fn test_beta_scaled_cdf() {
        let b = Beta::scaled(2.0, 2.0, 1.0, 4.0).unwrap();
        assert_eq!(b.cdf(1.0), 0.0);
        assert_eq!(b.cdf(5.0), 1.0);
        assert!((b.cdf(3.0) - 0.5).abs() < 1e-10);
        // I_{0.25}(2, 2) = 3/16 - 2/64
        assert!((b.cdf(2.0) - (3.0 / 16.0 - 2.0 / 64.0)).abs() < 1e-12);
    }

    #[test]
    fn test_beta_ppf() {
        let b = Beta::new(2.0, 5.0).unwrap();

        // PPF should be inverse of CDF
        for p in [0.1, 0.25, 0.5, 0.75, 0.9] {
            let x = b.ppf(p).unwrap();
            assert!((b.cdf(x) - p).abs() < 1e-6, "Failed for p={}", p);
        }

        assert!(b.ppf(-0.1).is_err());
        assert!(b.ppf(1.1).is_err());

        let b = Beta::scaled(2.0, 5.0, 1.0, 4.0).unwrap();
        assert_eq!(b.ppf(0.0).unwrap(), 1.0);
        assert_eq!(b.ppf(1.0).unwrap(), 5.0);
    }

    #[test]
    fn test_beta_sf() {
        let b = Beta::new(2.0, 3.0).unwrap();

        // SF + CDF = 1
        for x in [0.2, 0.4, 0.6, 0.8] {
            assert!((b.sf(x) + b.cdf(x) - 1.0).abs() < 1e-10);
        }
    }
}
