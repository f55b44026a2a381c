//! Bid evaluation inputs and the scoring boundary.
//!
//! A bid is judged on four sub-scores which a [`BidScorer`] folds into one
//! composite value using caller-supplied [`ScoreWeights`].

use thiserror::Error;

/// Tolerance used when checking whether weights sum to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// The four evaluation sub-scores recorded for a bid.
///
/// Values are expected on a 0–100 scale but are not clamped.
///
/// # Examples
/// ```
/// use procura_core::ScoreInputs;
///
/// let inputs = ScoreInputs::new(80.0, 60.0, 90.0, 70.0);
/// assert_eq!(inputs.quality, 90.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreInputs {
    /// Price competitiveness.
    pub price: f64,
    /// Compliance with tender requirements.
    pub compliance: f64,
    /// Quality of the offered goods or service.
    pub quality: f64,
    /// Delivery capability.
    pub delivery: f64,
}

impl ScoreInputs {
    /// Construct a set of sub-scores.
    #[must_use]
    pub const fn new(price: f64, compliance: f64, quality: f64, delivery: f64) -> Self {
        Self {
            price,
            compliance,
            quality,
            delivery,
        }
    }

    /// Reject non-finite sub-scores.
    ///
    /// # Errors
    /// Returns [`ScoreError::NonFinite`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ScoreError> {
        ensure_finite("price", self.price)?;
        ensure_finite("compliance", self.compliance)?;
        ensure_finite("quality", self.quality)?;
        ensure_finite("delivery", self.delivery)
    }
}

/// Coefficients applied to each sub-score.
///
/// The defaults weight price at `0.4` and every other dimension at `0.2`.
/// Weights are not required to sum to one; use [`ScoreWeights::is_normalised`]
/// when a caller wants to check.
///
/// # Examples
/// ```
/// use procura_core::ScoreWeights;
///
/// let weights = ScoreWeights::default();
/// assert!(weights.is_normalised());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreWeights {
    /// Weight for the price sub-score.
    pub price: f64,
    /// Weight for the compliance sub-score.
    pub compliance: f64,
    /// Weight for the quality sub-score.
    pub quality: f64,
    /// Weight for the delivery sub-score.
    pub delivery: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            price: 0.4,
            compliance: 0.2,
            quality: 0.2,
            delivery: 0.2,
        }
    }
}

impl ScoreWeights {
    /// Construct an explicit weight set.
    #[must_use]
    pub const fn new(price: f64, compliance: f64, quality: f64, delivery: f64) -> Self {
        Self {
            price,
            compliance,
            quality,
            delivery,
        }
    }

    /// Sum of all four coefficients.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "weights are summed as plain floating-point values"
    )]
    pub fn total(&self) -> f64 {
        self.price + self.compliance + self.quality + self.delivery
    }

    /// Report whether the weights sum to one within a small tolerance.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "normalisation check compares against unity"
    )]
    pub fn is_normalised(&self) -> bool {
        (self.total() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }

    /// Reject non-finite weights.
    ///
    /// # Errors
    /// Returns [`ScoreError::NonFinite`] naming the first offending weight.
    pub fn validate(&self) -> Result<(), ScoreError> {
        ensure_finite("weights.price", self.price)?;
        ensure_finite("weights.compliance", self.compliance)?;
        ensure_finite("weights.quality", self.quality)?;
        ensure_finite("weights.delivery", self.delivery)
    }
}

/// Errors returned by [`BidScorer::score`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// A sub-score or weight was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Name of the offending input.
        field: &'static str,
    },
    /// Finite inputs overflowed while being combined.
    #[error("weighted score is not a finite number")]
    NonFiniteTotal,
}

/// Combine a bid's sub-scores into one composite score.
///
/// Implementations must be deterministic and free of side effects, and must
/// reject non-finite input rather than return NaN. Scorers are `Send + Sync`
/// so a single instance can serve concurrent evaluations.
///
/// # Examples
/// ```
/// use procura_core::{BidScorer, ScoreError, ScoreInputs, ScoreWeights};
///
/// struct PriceOnly;
///
/// impl BidScorer for PriceOnly {
///     fn score(&self, inputs: &ScoreInputs, _weights: &ScoreWeights) -> Result<f64, ScoreError> {
///         inputs.validate()?;
///         Ok(inputs.price)
///     }
/// }
///
/// let inputs = ScoreInputs::new(42.0, 0.0, 0.0, 0.0);
/// assert_eq!(PriceOnly.score(&inputs, &ScoreWeights::default()), Ok(42.0));
/// ```
pub trait BidScorer: Send + Sync {
    /// Return the composite score for `inputs` under `weights`.
    ///
    /// # Errors
    /// Returns [`ScoreError`] when any input is not a finite number.
    fn score(&self, inputs: &ScoreInputs, weights: &ScoreWeights) -> Result<f64, ScoreError>;
}

const fn ensure_finite(field: &'static str, value: f64) -> Result<(), ScoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScoreError::NonFinite { field })
    }
}
