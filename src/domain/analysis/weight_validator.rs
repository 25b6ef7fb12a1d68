//! Weight Validator - Checks the raw weight total and decides how weights are used.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{AdvisoryNote, Criterion};

/// Relative tolerance when checking that weights sum to 1.
pub const WEIGHT_SUM_RELATIVE_TOLERANCE: f64 = 1e-5;

/// Absolute tolerance when checking that weights sum to 1.
pub const WEIGHT_SUM_ABSOLUTE_TOLERANCE: f64 = 1e-8;

/// Ordered weights, aligned to the criterion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    /// Collects the raw weights of the given criteria.
    pub fn from_criteria(criteria: &[Criterion]) -> Self {
        Self(criteria.iter().map(Criterion::weight).collect())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// True when the total is 1 within tolerance.
    pub fn sums_to_one(&self) -> bool {
        is_close_to_one(self.sum())
    }

    /// Divides every weight by `total`.
    fn scaled_by(&self, total: f64) -> Self {
        Self(self.0.iter().map(|w| w / total).collect())
    }
}

fn is_close_to_one(sum: f64) -> bool {
    (sum - 1.0).abs() <= WEIGHT_SUM_ABSOLUTE_TOLERANCE + WEIGHT_SUM_RELATIVE_TOLERANCE
}

/// The raw weights sum to zero, so no ranking can be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Total weight is 0; at least one weight must be greater than 0")]
pub struct ZeroWeightError;

impl ZeroWeightError {
    /// The fatal note the presenter shows for this error.
    pub fn to_note(&self) -> AdvisoryNote {
        AdvisoryNote::zero_weight()
    }
}

/// Weights ready for aggregation, plus what happened to them.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedWeights {
    /// Weights the aggregator uses (rescaled when auto-normalized).
    pub effective: WeightVector,
    /// Total of the raw weights, before any rescaling.
    pub original_sum: f64,
    /// Advisory produced when the raw total was not 1.
    pub note: Option<AdvisoryNote>,
}

/// Weight total checks.
pub struct WeightValidator;

impl WeightValidator {
    /// Validates raw weights.
    ///
    /// # Outcomes
    /// - Total is exactly 0: `ZeroWeightError`
    /// - Total is 1 within tolerance: weights pass unchanged, no note
    /// - Total differs from 1, `auto_normalize`: each weight divided by the total, info note
    /// - Total differs from 1, no `auto_normalize`: weights pass unchanged, warning note
    pub fn validate(
        raw: &WeightVector,
        auto_normalize: bool,
    ) -> Result<ValidatedWeights, ZeroWeightError> {
        let original_sum = raw.sum();

        if original_sum == 0.0 {
            return Err(ZeroWeightError);
        }

        if is_close_to_one(original_sum) {
            return Ok(ValidatedWeights {
                effective: raw.clone(),
                original_sum,
                note: None,
            });
        }

        if auto_normalize {
            Ok(ValidatedWeights {
                effective: raw.scaled_by(original_sum),
                original_sum,
                note: Some(AdvisoryNote::weight_auto_normalized(original_sum)),
            })
        } else {
            Ok(ValidatedWeights {
                effective: raw.clone(),
                original_sum,
                note: Some(AdvisoryNote::weight_sum_mismatch(original_sum)),
            })
        }
    }
}
