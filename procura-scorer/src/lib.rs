//! Weighted scoring and ranking of tender bids.
//!
//! The crate provides two complementary capabilities:
//! - **Composite scoring** folds a bid's four sub-scores into one value with
//!   [`WeightedBidScorer`], which implements the
//!   [`BidScorer`](procura_core::BidScorer) trait. The weighted sum is rounded
//!   to two decimal places, half away from zero, matching the `DECIMAL(5,2)`
//!   column the portal persists.
//! - **Ranking** orders every bid on a tender by composite score through
//!   [`rank_bids`], breaking ties by submission order.
//!
//! # Examples
//!
//! ```
//! use procura_core::{ScoreInputs, ScoreWeights};
//! use procura_scorer::score;
//!
//! let inputs = ScoreInputs::new(100.0, 100.0, 100.0, 100.0);
//! let total = score(&inputs, &ScoreWeights::default()).expect("finite inputs");
//! assert!((total - 100.0).abs() < f64::EPSILON);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use procura_core::{BidScorer, ScoreError, ScoreInputs, ScoreWeights};

mod error;
mod rank;
mod types;

pub use error::RankError;
pub use rank::rank_bids;
pub use types::{BidRecord, RankedBid};

/// Number of decimal places kept in composite scores.
pub const SCORE_DECIMALS: i32 = 2;

/// Scores a bid as the weighted sum of its sub-scores.
///
/// `total = price*w_price + compliance*w_compliance + quality*w_quality +
/// delivery*w_delivery`, rounded to [`SCORE_DECIMALS`] places with half-way
/// cases rounded away from zero. Inputs are neither clamped nor normalised.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WeightedBidScorer;

impl BidScorer for WeightedBidScorer {
    fn score(&self, inputs: &ScoreInputs, weights: &ScoreWeights) -> Result<f64, ScoreError> {
        inputs.validate()?;
        weights.validate()?;
        let total = round_to_cents(weighted_sum(inputs, weights));
        if total.is_finite() {
            Ok(total)
        } else {
            Err(ScoreError::NonFiniteTotal)
        }
    }
}

/// Score `inputs` under `weights` with the default [`WeightedBidScorer`].
///
/// # Errors
/// Returns [`ScoreError`] when any input is not finite or the weighted sum
/// overflows.
pub fn score(inputs: &ScoreInputs, weights: &ScoreWeights) -> Result<f64, ScoreError> {
    WeightedBidScorer.score(inputs, weights)
}

#[expect(
    clippy::float_arithmetic,
    reason = "composite scores are a floating-point weighted sum"
)]
fn weighted_sum(inputs: &ScoreInputs, weights: &ScoreWeights) -> f64 {
    inputs.price * weights.price
        + inputs.compliance * weights.compliance
        + inputs.quality * weights.quality
        + inputs.delivery * weights.delivery
}

/// Relative distance from a half cent, in units of machine epsilon, that
/// still counts as the half-way point.
const HALF_WAY_EPSILONS: f64 = 16.0;

/// Round to [`SCORE_DECIMALS`] places, half away from zero.
///
/// A scaled value within [`HALF_WAY_EPSILONS`] of a half cent is treated as
/// the exact decimal half, so `1.005` rounds to `1.01` however the sum was
/// produced. Values too large to scale carry no cent digits and are
/// returned as is. Negative zero is normalised to `0.0`.
#[expect(
    clippy::float_arithmetic,
    reason = "rounding scales by a power of ten"
)]
pub(crate) fn round_to_cents(value: f64) -> f64 {
    let scale = 10_f64.powi(SCORE_DECIMALS);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    let whole = scaled.trunc();
    let fraction = (scaled - whole).abs();
    let tolerance = HALF_WAY_EPSILONS * f64::EPSILON * scaled.abs().max(1.0);
    let cents = if (fraction - 0.5).abs() <= tolerance {
        whole + scaled.signum()
    } else {
        scaled.round()
    };
    cents / scale + 0.0
}

#[cfg(test)]
mod tests;
