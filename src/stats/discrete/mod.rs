//! Discrete probability distributions.

mod finite;

pub use finite::FiniteDiscrete;

/// Absolute tolerance on the total mass of a discrete distribution.
pub(crate) const MASS_TOLERANCE: f64 = 1e-9;
