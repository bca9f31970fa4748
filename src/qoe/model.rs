//! A configured QoE estimator: a rating scale plus an SOS parameter.

use serde::{Deserialize, Serialize};

use crate::qoe::continuous::RatingDistribution;
use crate::qoe::discrete::DiscreteRatingDistribution;
use crate::qoe::error::{QoeError, QoeResult};
use crate::qoe::samples::{RatingSamples, derive_sos_parameter};
use crate::qoe::scale::RatingScale;
use crate::qoe::shape::{ShapeParameters, shape_parameters};
use crate::qoe::system::system_distribution;

/// SOS parameter used when none is configured.
pub const DEFAULT_SOS_PARAMETER: f64 = 0.25;

/// Rating scale and SOS parameter shared by every condition of a study.
///
/// Missing fields take their defaults when deserializing: the 5-point scale
/// `[1, 5]` and an SOS parameter of 0.25.
///
/// # Examples
///
/// ```
/// use qoedist::{QoeModel, RatingScale};
///
/// let model = QoeModel::new(RatingScale::new(1.0, 5.0), 0.1).unwrap();
/// let d = model.discrete(3.5).unwrap();
/// assert_eq!(d.points().len(), 5);
/// assert!(model.good_or_better(3.5).unwrap() > model.poor_or_worse(3.5).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QoeModel {
    /// Rating scale of the study
    pub scale: RatingScale,
    /// Scale-invariant SOS parameter in [0, 1]
    pub sos_parameter: f64,
}

impl Default for QoeModel {
    fn default() -> Self {
        Self {
            scale: RatingScale::default(),
            sos_parameter: DEFAULT_SOS_PARAMETER,
        }
    }
}

impl QoeModel {
    /// Create a validated model.
    ///
    /// # Errors
    ///
    /// [`QoeError::InvalidScale`] or [`QoeError::InvalidSosParameter`].
    pub fn new(scale: RatingScale, sos_parameter: f64) -> QoeResult<Self> {
        let model = Self {
            scale,
            sos_parameter,
        };
        model.validate()?;
        Ok(model)
    }

    /// Fit the SOS parameter to raw rating samples.
    ///
    /// # Errors
    ///
    /// Errors of [`derive_sos_parameter`], and
    /// [`QoeError::InvalidSosParameter`] when the samples are so dispersed
    /// that the fitted value leaves `[0, 1]`.
    pub fn fit(samples: &RatingSamples, scale: RatingScale) -> QoeResult<Self> {
        let sos_parameter = derive_sos_parameter(samples, scale)?;
        Self::new(scale, sos_parameter)
    }

    /// Check the scale and SOS parameter.
    pub fn validate(&self) -> QoeResult<()> {
        self.scale.validate()?;
        if !(0.0..=1.0).contains(&self.sos_parameter) {
            return Err(QoeError::InvalidSosParameter {
                value: self.sos_parameter,
            });
        }
        Ok(())
    }

    /// Shape parameters of the Beta law for `mos`.
    pub fn shape_parameters(&self, mos: f64) -> QoeResult<ShapeParameters> {
        shape_parameters(mos, self.sos_parameter, self.scale)
    }

    /// Continuous rating distribution for `mos`.
    pub fn continuous(&self, mos: f64) -> QoeResult<RatingDistribution> {
        RatingDistribution::new(mos, self.sos_parameter, self.scale)
    }

    /// Discrete rating distribution for `mos`.
    pub fn discrete(&self, mos: f64) -> QoeResult<DiscreteRatingDistribution> {
        DiscreteRatingDistribution::new(mos, self.sos_parameter, self.scale)
    }

    /// Poor-or-worse ratio for `mos`.
    pub fn poor_or_worse(&self, mos: f64) -> QoeResult<f64> {
        Ok(self.discrete(mos)?.poor_or_worse())
    }

    /// Good-or-better ratio for `mos`.
    pub fn good_or_better(&self, mos: f64) -> QoeResult<f64> {
        Ok(self.discrete(mos)?.good_or_better())
    }

    /// System rating distribution over many MOS values.
    pub fn system(&self, mos_values: &[f64]) -> QoeResult<DiscreteRatingDistribution> {
        system_distribution(mos_values, self.sos_parameter, self.scale)
    }
}
