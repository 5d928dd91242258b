//! Repair of the weight-sum invariant.
//!
//! The model is asked to split its total score across the four evidence
//! categories so that they add up exactly. It does not always comply, so
//! the breakdown is rescaled proportionally when it drifts.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::result::InferenceResult;

/// Maximum allowed gap between the weight sum and the total score.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.1;

/// Slack for binary representation error when comparing against the
/// tolerance, so a decimal gap of exactly 0.1 counts as within it.
const COMPARISON_EPSILON: f64 = 1e-9;

/// What [`normalize_weights`] did to a result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[ts(export)]
pub enum Normalization {
    /// The weights already summed to the total within tolerance.
    WithinTolerance,
    /// The weights summed to zero (or less), so there is nothing to scale.
    NonPositiveSum { sum: f64 },
    /// The weights were multiplied by `factor` and rounded to one decimal.
    Rescaled { original_sum: f64, factor: f64 },
}

/// Rescale the weight breakdown so it sums to the likelihood score.
///
/// Weights within [`WEIGHT_SUM_TOLERANCE`] of the total are left exactly
/// as they are. A non-positive sum is left alone even when it disagrees
/// with the total.
pub fn normalize_weights(result: &mut InferenceResult) -> Normalization {
    let total = result.likelihood_score;
    let sum = result.neural_weights.sum();

    if sum.is_nan() || sum <= 0.0 {
        return Normalization::NonPositiveSum { sum };
    }
    // A NaN total leaves the weights untouched as well.
    let gap = (sum - total).abs();
    if gap.is_nan() || gap <= WEIGHT_SUM_TOLERANCE + COMPARISON_EPSILON {
        return Normalization::WithinTolerance;
    }

    let factor = total / sum;
    result.neural_weights = result.neural_weights.rescaled(factor);

    Normalization::Rescaled {
        original_sum: sum,
        factor,
    }
}
