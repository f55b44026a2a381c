//! `score` and `rank` command implementations.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use procura_core::{BidScorer, ScoreInputs, ScoreWeights};
use procura_scorer::{BidRecord, RankedBid, WeightedBidScorer, rank_bids};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::input::{load_json, require_existing};
use crate::{
    ARG_INPUT, ARG_WEIGHT_COMPLIANCE, ARG_WEIGHT_DELIVERY, ARG_WEIGHT_PRICE, ARG_WEIGHT_QUALITY,
    CliError, ENV_RANK_INPUT, ENV_SCORE_INPUT, write_json,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Compute the composite score of a single bid. The input file \
                 holds the four sub-scores as a JSON object with `price`, \
                 `compliance`, `quality`, and `delivery` fields.",
    about = "Score one bid"
)]
#[ortho_config(prefix = "PROCURA")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing the bid's sub-scores.
    #[arg(long = ARG_INPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Weight applied to the price sub-score.
    #[arg(long = ARG_WEIGHT_PRICE, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_price: Option<f64>,
    /// Weight applied to the compliance sub-score.
    #[arg(long = ARG_WEIGHT_COMPLIANCE, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_compliance: Option<f64>,
    /// Weight applied to the quality sub-score.
    #[arg(long = ARG_WEIGHT_QUALITY, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_quality: Option<f64>,
    /// Weight applied to the delivery sub-score.
    #[arg(long = ARG_WEIGHT_DELIVERY, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_delivery: Option<f64>,
}

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score and rank every bid on a tender. The input file holds \
                 a JSON array of `{ \"bid\": ..., \"inputs\": {...} }` records; \
                 `bid` is echoed back untouched.",
    about = "Rank bids by composite score"
)]
#[ortho_config(prefix = "PROCURA")]
pub(crate) struct RankArgs {
    /// Path to a JSON file containing the bid records.
    #[arg(long = ARG_INPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Weight applied to the price sub-score.
    #[arg(long = ARG_WEIGHT_PRICE, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_price: Option<f64>,
    /// Weight applied to the compliance sub-score.
    #[arg(long = ARG_WEIGHT_COMPLIANCE, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_compliance: Option<f64>,
    /// Weight applied to the quality sub-score.
    #[arg(long = ARG_WEIGHT_QUALITY, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_quality: Option<f64>,
    /// Weight applied to the delivery sub-score.
    #[arg(long = ARG_WEIGHT_DELIVERY, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_delivery: Option<f64>,
}

/// Fill unset weight overrides from [`ScoreWeights::default`].
pub(crate) fn resolve_weights(
    price: Option<f64>,
    compliance: Option<f64>,
    quality: Option<f64>,
    delivery: Option<f64>,
) -> ScoreWeights {
    let defaults = ScoreWeights::default();
    ScoreWeights::new(
        price.unwrap_or(defaults.price),
        compliance.unwrap_or(defaults.compliance),
        quality.unwrap_or(defaults.quality),
        delivery.unwrap_or(defaults.delivery),
    )
}

/// Resolved configuration shared by `score` and `rank`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EvaluationConfig {
    /// Path to the JSON input file.
    pub(crate) input: Utf8PathBuf,
    /// Weights after defaults have been applied.
    pub(crate) weights: ScoreWeights,
}

impl EvaluationConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.input, ARG_INPUT)
    }

    fn require_input(
        input: Option<Utf8PathBuf>,
        env: &'static str,
    ) -> Result<Utf8PathBuf, CliError> {
        input.ok_or(CliError::MissingArgument {
            field: ARG_INPUT,
            env,
        })
    }
}

impl TryFrom<ScoreArgs> for EvaluationConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            input: Self::require_input(args.input, ENV_SCORE_INPUT)?,
            weights: resolve_weights(
                args.weight_price,
                args.weight_compliance,
                args.weight_quality,
                args.weight_delivery,
            ),
        })
    }
}

impl TryFrom<RankArgs> for EvaluationConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            input: Self::require_input(args.input, ENV_RANK_INPUT)?,
            weights: resolve_weights(
                args.weight_price,
                args.weight_compliance,
                args.weight_quality,
                args.weight_delivery,
            ),
        })
    }
}

/// Report written by the `score` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ScoreReport {
    pub(crate) inputs: ScoreInputs,
    pub(crate) weights: ScoreWeights,
    pub(crate) score: f64,
}

pub(super) fn run_score(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = EvaluationConfig::try_from(merged)?;
    let report = execute_score(&config)?;
    write_json(writer, &report)
}

pub(super) fn run_rank(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = EvaluationConfig::try_from(merged)?;
    let ranked = execute_rank(&config)?;
    write_json(writer, &ranked)
}

pub(crate) fn execute_score(config: &EvaluationConfig) -> Result<ScoreReport, CliError> {
    config.validate_sources()?;
    warn_if_unnormalised(&config.weights);
    let inputs: ScoreInputs = load_json(&config.input)?;
    let score = WeightedBidScorer.score(&inputs, &config.weights)?;
    Ok(ScoreReport {
        inputs,
        weights: config.weights,
        score,
    })
}

pub(crate) fn execute_rank(config: &EvaluationConfig) -> Result<Vec<RankedBid<Value>>, CliError> {
    config.validate_sources()?;
    warn_if_unnormalised(&config.weights);
    let bids: Vec<BidRecord<Value>> = load_json(&config.input)?;
    log::info!("ranking {} bids from {}", bids.len(), config.input);
    Ok(rank_bids(&WeightedBidScorer, bids, &config.weights)?)
}

fn warn_if_unnormalised(weights: &ScoreWeights) {
    if !weights.is_normalised() {
        log::warn!(
            "scoring weights sum to {} rather than 1; scores will not share the 0..=100 scale",
            weights.total()
        );
    }
}

#[cfg(test)]
pub(crate) fn score_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<EvaluationConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    EvaluationConfig::try_from(merged)
}
