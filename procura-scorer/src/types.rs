//! Public input and output types for bid ranking.
#![forbid(unsafe_code)]

use procura_core::ScoreInputs;

/// A submitted bid: caller identifier plus its evaluation sub-scores.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BidRecord<K> {
    /// Identifier chosen by the caller, e.g. a bid row id.
    pub bid: K,
    /// Sub-scores recorded by the evaluator.
    pub inputs: ScoreInputs,
}

impl<K> BidRecord<K> {
    /// Pair a bid identifier with its sub-scores.
    #[must_use]
    pub const fn new(bid: K, inputs: ScoreInputs) -> Self {
        Self { bid, inputs }
    }
}

/// A bid with its composite score and 1-based rank.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedBid<K> {
    /// Identifier carried over from the [`BidRecord`].
    pub bid: K,
    /// Rounded composite score.
    pub score: f64,
    /// Position in the ranking, starting at 1 for the best bid.
    pub rank: usize,
}
