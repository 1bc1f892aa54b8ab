//! Command-line interface for computing driving routes.
//!
//! `fuelroute route --to lat,lng` asks an OSRM server for the route from the
//! default map centre (or `--from`) and prints a JSON report containing the
//! latitude-first geometry, the turn-by-turn steps and the 0.5 km proximity
//! buffer around the origin.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod route;

pub use error::CliError;
use route::{RouteArgs, run_route};

const ARG_FROM: &str = "from";
const ARG_TO: &str = "to";
const ARG_OSRM_URL: &str = "osrm-url";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ENV_TO: &str = "FUELROUTE_CMDS_ROUTE_TO";

/// Run the fuelroute CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// routing service fails, or the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Route(args) => run_route(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fuelroute",
    about = "Driving routes and proximity buffers for the fuel-station finder",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a driving route and print it as JSON.
    Route(RouteArgs),
}

#[cfg(test)]
mod tests;
