//! QoE rating distributions from MOS and SOS.
//!
//! Given the Mean Opinion Score of a test condition and a measure of rating
//! spread, this module reconstructs a plausible distribution of the
//! individual ratings: a Beta law stretched over the rating scale, and its
//! projection onto the integer points of the scale.
//!
//! The layers build on each other:
//!
//! 1. [`RatingScale`] normalizes ratings to the unit interval.
//! 2. [`validate_parameters`] checks MOS and dispersion feasibility.
//! 3. [`derive_sos_parameter`] and [`shape_parameters`] derive the
//!    parameters of the law.
//! 4. [`RatingDistribution`] evaluates the continuous law.
//! 5. [`DiscreteRatingDistribution`] bins it onto integer ratings, and
//!    provides the poor-or-worse and good-or-better ratios.
//!
//! ```
//! use qoedist::qoe::{
//!     RatingSamples, RatingScale, build_discrete_distribution, derive_sos_parameter,
//! };
//!
//! let scale = RatingScale::new(1.0, 5.0);
//! let ratings = RatingSamples::Rectangular(vec![
//!     vec![1.0, 2.0, 2.0, 3.0],
//!     vec![3.0, 4.0, 4.0, 5.0],
//!     vec![4.0, 5.0, 5.0, 5.0],
//! ]);
//! let a = derive_sos_parameter(&ratings, scale).unwrap();
//!
//! let d = build_discrete_distribution(3.8, a, scale).unwrap();
//! assert!((d.masses().iter().sum::<f64>() - 1.0).abs() < 1e-9);
//! ```

mod continuous;
mod discrete;
mod error;
mod metrics;
mod model;
mod samples;
mod scale;
mod shape;
mod system;
mod validate;

pub use continuous::{
    RatingDistribution, RatingLaw, build_continuous_distribution, cumulative_at, density_at,
};
pub use discrete::{DiscreteRatingDistribution, build_discrete_distribution};
pub use error::{QoeError, QoeResult};
pub use metrics::{good_or_better, poor_or_worse};
pub use model::{DEFAULT_SOS_PARAMETER, QoeModel};
pub use samples::{
    ConditionStatistics, RatingRecord, RatingSamples, derive_sos_parameter,
    derive_sos_parameter_from_measurements,
};
pub use scale::RatingScale;
pub use shape::{ShapeParameters, shape_parameters, shape_parameters_from_sos, sos_parameter_for};
pub use system::system_distribution;
pub use validate::{Dispersion, validate_parameters};
