//! Rank the bids on a tender by composite score.

use procura_core::{BidScorer, ScoreWeights};

use crate::{BidRecord, RankError, RankedBid};

/// Score every bid and order them best first.
///
/// Bids are sorted by descending composite score. Equal scores keep their
/// submission order, so the earlier bid wins a tie. Ranks start at 1.
///
/// # Errors
/// Returns [`RankError::Score`] for the first bid whose sub-scores cannot be
/// scored; no partial ranking is produced.
///
/// # Examples
/// ```
/// use procura_core::{ScoreInputs, ScoreWeights};
/// use procura_scorer::{BidRecord, WeightedBidScorer, rank_bids};
///
/// let bids = vec![
///     BidRecord::new("acme", ScoreInputs::new(60.0, 60.0, 60.0, 60.0)),
///     BidRecord::new("shamba", ScoreInputs::new(90.0, 80.0, 70.0, 85.0)),
/// ];
/// let ranked = rank_bids(&WeightedBidScorer, bids, &ScoreWeights::default())
///     .expect("finite sub-scores");
/// assert_eq!(ranked[0].bid, "shamba");
/// assert_eq!(ranked[1].rank, 2);
/// ```
pub fn rank_bids<S, K, I>(
    scorer: &S,
    bids: I,
    weights: &ScoreWeights,
) -> Result<Vec<RankedBid<K>>, RankError>
where
    S: BidScorer + ?Sized,
    I: IntoIterator<Item = BidRecord<K>>,
{
    let mut scored = bids
        .into_iter()
        .enumerate()
        .map(|(position, record)| {
            scorer
                .score(&record.inputs, weights)
                .map(|score| (record.bid, score))
                .map_err(|source| RankError::Score { position, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Stable sort keeps submission order among equal scores.
    scored.sort_by(|(_, lhs), (_, rhs)| rhs.total_cmp(lhs));
    log::debug!("ranked {} bids", scored.len());

    Ok(scored
        .into_iter()
        .zip(1..)
        .map(|((bid, score), rank)| RankedBid { bid, score, rank })
        .collect())
}
