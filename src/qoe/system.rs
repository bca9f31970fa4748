//! System-level QoE: the rating distribution over many usage situations.
//!
//! Each QoS sample maps to a MOS (through whatever MOS model the caller
//! uses). The system's rating distribution is the equal-weight mixture of the
//! per-sample discrete distributions, so its mean is the expected system QoE
//! and its tail ratios are the averages of the per-sample ratios.

use log::debug;

use crate::qoe::discrete::{DiscreteRatingDistribution, build_discrete_distribution};
use crate::qoe::error::{QoeError, QoeResult};
use crate::qoe::scale::RatingScale;

/// Mixture of the discrete rating distributions of `mos_values`.
///
/// # Errors
///
/// [`QoeError::EmptyMeasurements`] for an empty slice; otherwise the first
/// validation error of any MOS value.
///
/// # Examples
///
/// ```
/// use qoedist::stats::Distribution;
/// use qoedist::{RatingScale, system_distribution};
///
/// let scale = RatingScale::new(1.0, 5.0);
/// let system = system_distribution(&[1.0, 5.0], 0.25, scale).unwrap();
/// assert_eq!(system.masses(), &[0.5, 0.0, 0.0, 0.0, 0.5]);
/// assert_eq!(system.mean(), 3.0);
/// ```
pub fn system_distribution(
    mos_values: &[f64],
    sos_parameter: f64,
    scale: RatingScale,
) -> QoeResult<DiscreteRatingDistribution> {
    if mos_values.is_empty() {
        return Err(QoeError::EmptyMeasurements);
    }

    let points = scale.points()?;
    let mut totals = vec![0.0; points.len()];
    for &mos in mos_values {
        let dist = build_discrete_distribution(mos, sos_parameter, scale)?;
        for (total, mass) in totals.iter_mut().zip(dist.masses()) {
            *total += mass;
        }
    }

    let n = mos_values.len() as f64;
    let masses: Vec<f64> = totals.into_iter().map(|t| t / n).collect();
    debug!(
        "System QoE distribution over {} MOS values: {:?}",
        mos_values.len(),
        masses
    );
    DiscreteRatingDistribution::from_masses(scale, masses)
}
