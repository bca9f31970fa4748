//! qoedist - QoE rating distributions from MOS and SOS
//!
//! Subjective studies usually publish only the Mean Opinion Score (MOS) of a
//! test condition and, at best, the standard deviation of the opinion scores
//! (SOS). qoedist reconstructs a plausible distribution of the individual
//! ratings from those two numbers, as a continuous law on the rating scale and
//! as a probability mass function over its integer points.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                         qoe                              │
//! │  (scale, validation, SOS parameter, shape parameters,   │
//! │   continuous law, discretization, PoW/GoB, system QoE)  │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                        stats                             │
//! │  (Beta, finite discrete laws, special fn, descriptive)  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`qoe`] - Distribution estimation from MOS, SOS and rating samples
//! - [`stats`] - Distribution traits, Beta law, incomplete beta function
//!
//! # Logging
//!
//! Derivations emit records through the [`log`] facade (`debug` for derived
//! parameters and chosen laws, `trace` per condition, `warn` for an
//! out-of-range SOS parameter). The library never installs a logger.
//!
//! # Example
//!
//! ```
//! use qoedist::{DiscreteDistribution, Distribution, QoeModel, RatingScale};
//!
//! let model = QoeModel::new(RatingScale::new(1.0, 5.0), 0.25).unwrap();
//!
//! // Continuous law for MOS 4
//! let cont = model.continuous(4.0).unwrap();
//! assert!((cont.mean() - 4.0).abs() < 1e-12);
//! assert_eq!(cont.cdf(5.0).unwrap(), 1.0);
//!
//! // Discrete 5-point distribution and its tail ratios
//! let disc = model.discrete(4.0).unwrap();
//! assert!(disc.pmf(5) > disc.pmf(1));
//! assert!(disc.good_or_better() > 0.5);
//! ```

pub mod qoe;
pub mod stats;

// Re-export main types for convenience
pub use qoe::{
    ConditionStatistics, DEFAULT_SOS_PARAMETER, DiscreteRatingDistribution, Dispersion,
    QoeError, QoeModel, QoeResult, RatingDistribution, RatingLaw, RatingRecord, RatingSamples,
    RatingScale, ShapeParameters, build_continuous_distribution, build_discrete_distribution,
    cumulative_at, density_at, derive_sos_parameter, derive_sos_parameter_from_measurements,
    good_or_better, poor_or_worse, shape_parameters, shape_parameters_from_sos,
    sos_parameter_for, system_distribution, validate_parameters,
};
pub use stats::{
    Beta, ContinuousDistribution, DiscreteDistribution, Distribution, FiniteDiscrete, StatsError,
    StatsResult,
};
