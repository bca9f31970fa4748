//! Probability building blocks: distribution traits, the Beta law, finite
//! discrete laws and descriptive statistics.
//!
//! Special functions (log-gamma, the regularized incomplete beta function and
//! its inverse) are evaluated in-crate, so nothing here depends on an external
//! statistics library.
//!
//! # Distributions
//!
//! ```
//! use qoedist::stats::{Beta, ContinuousDistribution, Distribution};
//!
//! let b = Beta::scaled(2.0, 2.0, 1.0, 4.0).unwrap();
//!
//! assert!((b.mean() - 3.0).abs() < 1e-12);
//! assert!((b.cdf(3.0) - 0.5).abs() < 1e-10);
//! assert_eq!(b.cdf(5.0), 1.0);
//! ```

// Core modules
mod continuous;
pub mod descriptive;
mod discrete;
mod distribution;
mod error;

// Public API: Distribution traits and types
pub use distribution::{ContinuousDistribution, DiscreteDistribution, Distribution};
pub use error::{StatsError, StatsResult};

// Public API: Continuous distributions
pub use continuous::Beta;

// Public API: Discrete distributions
pub use discrete::FiniteDiscrete;
