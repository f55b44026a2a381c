//! `route` command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use procura_core::{RouteOptimizer, Waypoint};
use procura_router::NearestNeighbourOptimizer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::input::{load_json, require_existing};
use crate::{ARG_INPUT, CliError, ENV_ROUTE_INPUT, write_json};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order pickup stops into a greedy nearest-neighbour route. \
                 The input file holds a JSON array of waypoints, each with a \
                 `location` of `{ \"x\": longitude, \"y\": latitude }` and an \
                 arbitrary `payload`. The first waypoint is the depot.",
    about = "Plan a pickup route"
)]
#[ortho_config(prefix = "PROCURA")]
pub(crate) struct RouteArgs {
    /// Path to a JSON file containing the waypoints.
    #[arg(long = ARG_INPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteConfig {
    /// Path to the JSON waypoint file.
    pub(crate) input: Utf8PathBuf,
}

impl RouteConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.input, ARG_INPUT)
    }
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_INPUT,
            env: ENV_ROUTE_INPUT,
        })?;
        Ok(Self { input })
    }
}

/// Report written by the `route` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RouteReport {
    pub(crate) stops: Vec<Waypoint<Value>>,
    pub(crate) total_distance_km: f64,
}

pub(super) fn run_route(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = RouteConfig::try_from(merged)?;
    let report = execute_route(&config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_route(config: &RouteConfig) -> Result<RouteReport, CliError> {
    config.validate_sources()?;
    let waypoints: Vec<Waypoint<Value>> = load_json(&config.input)?;
    let route = NearestNeighbourOptimizer.optimize(waypoints)?;
    let total_distance_km = route.total_distance_km();
    Ok(RouteReport {
        stops: route.into_stops(),
        total_distance_km,
    })
}
