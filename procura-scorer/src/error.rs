//! Error types raised while ranking bids.
#![forbid(unsafe_code)]

use procura_core::ScoreError;
use thiserror::Error;

/// Errors raised while ranking the bids on a tender.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// Scoring one of the bids failed.
    #[error("failed to score bid at position {position}")]
    Score {
        /// Zero-based position of the bid in the submitted list.
        position: usize,
        /// Source error from the scorer.
        #[source]
        source: ScoreError,
    },
}
