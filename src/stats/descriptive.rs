//! Descriptive statistics over rating slices.

use crate::stats::error::{StatsError, StatsResult};

/// Arithmetic mean.
///
/// # Errors
///
/// Returns an error if `x` is empty.
pub fn mean(x: &[f64]) -> StatsResult<f64> {
    if x.is_empty() {
        return Err(StatsError::EmptyData {
            context: "mean".to_string(),
        });
    }
    Ok(x.iter().sum::<f64>() / x.len() as f64)
}

/// Variance with `ddof` delta degrees of freedom.
///
/// `ddof = 0` gives the population variance, `ddof = 1` the unbiased sample
/// variance.
///
/// # Errors
///
/// Returns an error if `x` has no more than `ddof` elements.
pub fn var(x: &[f64], ddof: usize) -> StatsResult<f64> {
    if x.len() <= ddof {
        return Err(StatsError::InsufficientData {
            required: ddof + 1,
            got: x.len(),
            context: "variance".to_string(),
        });
    }
    let m = mean(x)?;
    let ss: f64 = x.iter().map(|v| (v - m) * (v - m)).sum();
    Ok(ss / (x.len() - ddof) as f64)
}

/// Standard deviation with `ddof` delta degrees of freedom.
pub fn std(x: &[f64], ddof: usize) -> StatsResult<f64> {
    var(x, ddof).map(f64::sqrt)
}
