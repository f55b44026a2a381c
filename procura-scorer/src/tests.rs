//! Unit coverage for composite scoring and ranking.
#![forbid(unsafe_code)]

use procura_core::{BidScorer, ScoreError, ScoreInputs, ScoreWeights};
use rstest::rstest;

use crate::{BidRecord, RankError, WeightedBidScorer, rank_bids, round_to_cents, score};

const TOLERANCE: f64 = 1e-9;

#[expect(
    clippy::float_arithmetic,
    reason = "test compares floating-point scores"
)]
fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

#[rstest]
#[case(ScoreInputs::new(100.0, 100.0, 100.0, 100.0), 100.0)]
#[case(ScoreInputs::new(80.0, 60.0, 90.0, 70.0), 76.0)]
#[case(ScoreInputs::new(0.0, 0.0, 0.0, 0.0), 0.0)]
#[case(ScoreInputs::new(55.5, 72.25, 88.0, 64.75), 67.2)]
fn default_weights_produce_weighted_sum(#[case] inputs: ScoreInputs, #[case] expected: f64) {
    let total = score(&inputs, &ScoreWeights::default()).expect("finite inputs");
    assert_close(total, expected);
}

#[rstest]
fn weights_are_applied_without_normalisation() {
    let weights = ScoreWeights::new(1.0, 1.0, 1.0, 1.0);
    let inputs = ScoreInputs::new(10.0, 20.0, 30.0, 40.0);
    let total = WeightedBidScorer.score(&inputs, &weights).expect("finite");
    assert_close(total, 100.0);
}

#[rstest]
fn out_of_scale_inputs_are_not_clamped() {
    let inputs = ScoreInputs::new(150.0, -10.0, 0.0, 0.0);
    let total = score(&inputs, &ScoreWeights::default()).expect("finite inputs");
    assert_close(total, 58.0);
}

// Half-way sums below are exactly representable in binary, so they pin the
// tie rule rather than representation error.
#[rstest]
#[case(0.125, 0.13)]
#[case(-0.125, -0.13)]
#[case(100.125, 100.13)]
#[case(2.375, 2.38)]
#[case(0.124, 0.12)]
#[case(76.0, 76.0)]
fn rounding_is_half_away_from_zero(#[case] raw: f64, #[case] expected: f64) {
    assert_close(round_to_cents(raw), expected);
}

#[rstest]
fn half_way_weighted_sum_rounds_up() {
    let inputs = ScoreInputs::new(0.25, 0.0, 0.0, 0.0);
    let weights = ScoreWeights::new(0.5, 0.0, 0.0, 0.0);
    let total = score(&inputs, &weights).expect("finite inputs");
    assert_close(total, 0.13);
}

// Decimal half-way sums carry binary representation error in either
// direction; each must still round away from zero.
#[rstest]
#[case(2.01, 0.5, 1.01)]
#[case(10.05, 0.1, 1.01)]
#[case(1.115, 1.0, 1.12)]
#[case(-2.01, 0.5, -1.01)]
#[case(0.29, 0.5, 0.15)]
fn decimal_half_way_sums_round_away_from_zero(
    #[case] price: f64,
    #[case] weight: f64,
    #[case] expected: f64,
) {
    let inputs = ScoreInputs::new(price, 0.0, 0.0, 0.0);
    let weights = ScoreWeights::new(weight, 0.0, 0.0, 0.0);
    let total = score(&inputs, &weights).expect("finite inputs");
    assert_close(total, expected);
}

#[rstest]
fn near_half_way_sums_are_not_snapped() {
    assert_close(round_to_cents(1.004_9), 1.0);
    assert_close(round_to_cents(1.005_1), 1.01);
}

#[rstest]
fn huge_finite_sum_is_returned_unscaled() {
    let inputs = ScoreInputs::new(1e307, 0.0, 0.0, 0.0);
    let weights = ScoreWeights::new(1.0, 0.0, 0.0, 0.0);
    assert_eq!(score(&inputs, &weights), Ok(1e307));
}

#[rstest]
fn small_negative_sum_rounds_to_positive_zero() {
    let inputs = ScoreInputs::new(-0.001, 0.0, 0.0, 0.0);
    let total = score(&inputs, &ScoreWeights::default()).expect("finite inputs");
    assert!(
        total == 0.0 && total.is_sign_positive(),
        "expected +0.0, got {total:?}"
    );
}

#[rstest]
#[case(ScoreInputs::new(f64::NAN, 0.0, 0.0, 0.0), ScoreWeights::default(), "price")]
#[case(ScoreInputs::new(0.0, 0.0, 0.0, f64::INFINITY), ScoreWeights::default(), "delivery")]
#[case(
    ScoreInputs::new(1.0, 1.0, 1.0, 1.0),
    ScoreWeights::new(0.4, f64::NEG_INFINITY, 0.2, 0.2),
    "weights.compliance"
)]
fn non_finite_input_is_rejected(
    #[case] inputs: ScoreInputs,
    #[case] weights: ScoreWeights,
    #[case] field: &'static str,
) {
    assert_eq!(
        score(&inputs, &weights),
        Err(ScoreError::NonFinite { field })
    );
}

#[rstest]
fn overflowing_sum_is_rejected() {
    let inputs = ScoreInputs::new(f64::MAX, f64::MAX, 0.0, 0.0);
    let weights = ScoreWeights::new(1.0, 1.0, 0.0, 0.0);
    assert_eq!(score(&inputs, &weights), Err(ScoreError::NonFiniteTotal));
}

#[rstest]
fn ranking_orders_best_first_and_keeps_ties_stable() {
    let bids = vec![
        BidRecord::new(1, ScoreInputs::new(50.0, 50.0, 50.0, 50.0)),
        BidRecord::new(2, ScoreInputs::new(90.0, 90.0, 90.0, 90.0)),
        BidRecord::new(3, ScoreInputs::new(50.0, 50.0, 50.0, 50.0)),
    ];
    let ranked = rank_bids(&WeightedBidScorer, bids, &ScoreWeights::default()).expect("rank");
    let order: Vec<(u32, usize)> = ranked.iter().map(|bid| (bid.bid, bid.rank)).collect();
    assert_eq!(order, vec![(2, 1), (1, 2), (3, 3)]);
}

#[rstest]
fn ranking_treats_rounded_zero_scores_as_ties() {
    let bids = vec![
        BidRecord::new("slightly-negative", ScoreInputs::new(-0.001, 0.0, 0.0, 0.0)),
        BidRecord::new("zero", ScoreInputs::new(0.0, 0.0, 0.0, 0.0)),
    ];
    let ranked = rank_bids(&WeightedBidScorer, bids, &ScoreWeights::default()).expect("rank");
    let order: Vec<&str> = ranked.iter().map(|bid| bid.bid).collect();
    assert_eq!(order, vec!["slightly-negative", "zero"]);
}

#[rstest]
fn ranking_empty_input_is_empty() {
    let ranked = rank_bids(
        &WeightedBidScorer,
        Vec::<BidRecord<u32>>::new(),
        &ScoreWeights::default(),
    )
    .expect("rank");
    assert!(ranked.is_empty());
}

#[rstest]
fn ranking_reports_position_of_invalid_bid() {
    let bids = vec![
        BidRecord::new("ok", ScoreInputs::new(1.0, 1.0, 1.0, 1.0)),
        BidRecord::new("bad", ScoreInputs::new(1.0, f64::NAN, 1.0, 1.0)),
    ];
    let err = rank_bids(&WeightedBidScorer, bids, &ScoreWeights::default())
        .expect_err("NaN sub-score");
    assert_eq!(
        err,
        RankError::Score {
            position: 1,
            source: ScoreError::NonFinite {
                field: "compliance"
            },
        }
    );
}
