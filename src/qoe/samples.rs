//! SOS parameter estimation from rating samples.
//!
//! The estimator is the weighted least-squares fit of the SOS hypothesis
//! `z_var = p·(z_mos − z_mos²)` over all conditions, with `z_mos` and `z_var`
//! the per-condition mean and variance normalized to the unit interval.

use std::collections::BTreeMap;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::qoe::error::{QoeError, QoeResult};
use crate::qoe::scale::RatingScale;
use crate::stats::descriptive;

/// One row of a tabular rating set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// Identifier of the test condition the rating belongs to
    pub condition: String,
    /// The rating given by one subject
    pub rating: f64,
}

impl RatingRecord {
    /// Create a record for one rating of `condition`.
    pub fn new(condition: impl Into<String>, rating: f64) -> Self {
        Self {
            condition: condition.into(),
            rating,
        }
    }
}

/// Raw ratings for a set of test conditions.
#[derive(Debug, Clone, PartialEq)]
pub enum RatingSamples {
    /// One row per condition, one column per rater. Rows must share a
    /// non-zero length. Dispersion is the population standard deviation.
    Rectangular(Vec<Vec<f64>>),
    /// `(condition, rating)` rows, grouped by condition. Dispersion is the
    /// sample standard deviation, so each condition needs two ratings.
    Tabular(Vec<RatingRecord>),
}

/// Per-condition MOS and SOS, aligned by index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionStatistics {
    /// Mean rating of each condition
    pub mos: Vec<f64>,
    /// Standard deviation of the ratings of each condition
    pub sos: Vec<f64>,
}

impl ConditionStatistics {
    /// Number of conditions.
    pub fn len(&self) -> usize {
        self.mos.len()
    }

    /// Whether there are no conditions.
    pub fn is_empty(&self) -> bool {
        self.mos.is_empty()
    }
}

impl RatingSamples {
    /// Per-condition mean and standard deviation.
    ///
    /// Tabular conditions come out in ascending order of their identifier.
    ///
    /// # Errors
    ///
    /// [`QoeError::InvalidInputType`] for an empty or ragged rectangular
    /// array, an empty table, or a condition with a single rating.
    pub fn condition_statistics(&self) -> QoeResult<ConditionStatistics> {
        match self {
            Self::Rectangular(rows) => rectangular_statistics(rows),
            Self::Tabular(records) => tabular_statistics(records),
        }
    }
}

fn rectangular_statistics(rows: &[Vec<f64>]) -> QoeResult<ConditionStatistics> {
    let width = match rows.first() {
        Some(row) if !row.is_empty() => row.len(),
        _ => {
            return Err(QoeError::InvalidInputType {
                reason: "rectangular ratings need at least one condition and one rater"
                    .to_string(),
            });
        }
    };
    if let Some(i) = rows.iter().position(|row| row.len() != width) {
        return Err(QoeError::InvalidInputType {
            reason: format!(
                "ragged rating array: row {} has {} ratings, expected {}",
                i,
                rows[i].len(),
                width
            ),
        });
    }

    let mut stats = ConditionStatistics::default();
    for row in rows {
        stats.mos.push(descriptive::mean(row)?);
        stats.sos.push(descriptive::std(row, 0)?);
    }
    Ok(stats)
}

fn tabular_statistics(records: &[RatingRecord]) -> QoeResult<ConditionStatistics> {
    if records.is_empty() {
        return Err(QoeError::InvalidInputType {
            reason: "tabular ratings are empty".to_string(),
        });
    }

    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.condition.as_str())
            .or_default()
            .push(record.rating);
    }

    let mut stats = ConditionStatistics::default();
    for (condition, ratings) in &groups {
        if ratings.len() < 2 {
            return Err(QoeError::InvalidInputType {
                reason: format!(
                    "condition '{}' has a single rating; its standard deviation is undefined",
                    condition
                ),
            });
        }
        stats.mos.push(descriptive::mean(ratings)?);
        stats.sos.push(descriptive::std(ratings, 1)?);
    }
    Ok(stats)
}

/// SOS parameter from per-condition MOS and SOS values.
///
/// Returns `Σ(z_mos − z_mos²)·z_var / Σ(z_mos − z_mos²)²`. Individual values
/// are not checked against the scale.
///
/// # Errors
///
/// [`QoeError::InvalidScale`], [`QoeError::LengthMismatch`],
/// [`QoeError::EmptyMeasurements`], or
/// [`QoeError::UninformativeMeasurements`] when every MOS is on a bound.
pub fn derive_sos_parameter_from_measurements(
    mos: &[f64],
    sos: &[f64],
    scale: RatingScale,
) -> QoeResult<f64> {
    scale.validate()?;
    if mos.len() != sos.len() {
        return Err(QoeError::LengthMismatch {
            mos: mos.len(),
            sos: sos.len(),
        });
    }
    if mos.is_empty() {
        return Err(QoeError::EmptyMeasurements);
    }

    let span = scale.span();
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, (&m, &s)) in mos.iter().zip(sos).enumerate() {
        let z_mos = scale.normalize(m);
        let z_sos = s / span;
        let z_var = z_sos * z_sos;
        let w = z_mos - z_mos * z_mos;
        trace!("condition {}: z_mos={:.4} z_var={:.5}", i, z_mos, z_var);

        numerator += w * z_var;
        denominator += w * w;
    }

    if denominator == 0.0 {
        return Err(QoeError::UninformativeMeasurements {
            conditions: mos.len(),
        });
    }

    let sos_parameter = numerator / denominator;
    debug!(
        "Derived SOS parameter {:.4} from {} conditions",
        sos_parameter,
        mos.len()
    );
    Ok(sos_parameter)
}

/// SOS parameter from raw rating samples.
///
/// # Errors
///
/// See [`RatingSamples::condition_statistics`] and
/// [`derive_sos_parameter_from_measurements`].
///
/// # Examples
///
/// ```
/// use qoedist::{RatingSamples, RatingScale, derive_sos_parameter};
///
/// let samples = RatingSamples::Rectangular(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 5.0]]);
/// let p = derive_sos_parameter(&samples, RatingScale::new(1.0, 5.0)).unwrap();
/// assert!((0.0..=1.0).contains(&p));
/// ```
pub fn derive_sos_parameter(samples: &RatingSamples, scale: RatingScale) -> QoeResult<f64> {
    scale.validate()?;
    let stats = samples.condition_statistics()?;
    let sos_parameter = derive_sos_parameter_from_measurements(&stats.mos, &stats.sos, scale)?;

    if !(0.0..=1.0).contains(&sos_parameter) {
        warn!(
            "SOS parameter {:.4} derived from {} conditions is outside [0, 1]",
            sos_parameter,
            stats.len()
        );
    }
    Ok(sos_parameter)
}
