//! Command-line interface for Procura's offline evaluation tooling.
//!
//! Each subcommand reads a JSON export from the portal, runs one engine
//! routine over it, and prints a JSON report to stdout.
#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod evaluate;
mod input;
mod route;

pub use error::CliError;

use evaluate::{RankArgs, ScoreArgs};
use route::RouteArgs;

pub(crate) const ARG_INPUT: &str = "input";
pub(crate) const ARG_WEIGHT_PRICE: &str = "weight-price";
pub(crate) const ARG_WEIGHT_COMPLIANCE: &str = "weight-compliance";
pub(crate) const ARG_WEIGHT_QUALITY: &str = "weight-quality";
pub(crate) const ARG_WEIGHT_DELIVERY: &str = "weight-delivery";
pub(crate) const ENV_SCORE_INPUT: &str = "PROCURA_CMDS_SCORE_INPUT";
pub(crate) const ENV_RANK_INPUT: &str = "PROCURA_CMDS_RANK_INPUT";
pub(crate) const ENV_ROUTE_INPUT: &str = "PROCURA_CMDS_ROUTE_INPUT";

/// Run the Procura CLI with the current process arguments, writing to stdout.
pub fn run() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_with(std::env::args_os(), &mut stdout)
}

/// Run the Procura CLI with explicit arguments and output sink.
pub fn run_with<I, T>(args: I, writer: &mut dyn Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    match cli.command {
        Command::Score(args) => evaluate::run_score(args, writer),
        Command::Rank(args) => evaluate::run_rank(args, writer),
        Command::Route(args) => route::run_route(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "procura",
    about = "Offline bid evaluation and pickup routing for the Procura portal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the composite score of one bid.
    Score(ScoreArgs),
    /// Rank every bid on a tender by composite score.
    Rank(RankArgs),
    /// Order pickup stops into a nearest-neighbour route.
    Route(RouteArgs),
}

/// Serialise `report` as pretty JSON followed by a newline.
pub(crate) fn write_json<R>(writer: &mut dyn Write, report: &R) -> Result<(), CliError>
where
    R: serde::Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
