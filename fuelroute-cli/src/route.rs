//! Route command implementation for the fuelroute CLI.

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use fuelroute_core::{
    BufferRegion, Coordinate, LocationPicker, RouteCalculator, RouteProvider, RouteState,
};
use fuelroute_data::routing::{HttpRouteProvider, HttpRouteProviderConfig};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ARG_FROM, ARG_OSRM_URL, ARG_TIMEOUT_SECS, ARG_TO, CliError, ENV_TO};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "route",
    long_about = "Compute a driving route between two points by querying an \
                 OSRM instance. Options can come from CLI flags, configuration \
                 files, or environment variables. The origin defaults to the \
                 map's default centre.",
    about = "Compute a driving route"
)]
#[ortho_config(prefix = "FUELROUTE")]
pub(crate) struct RouteArgs {
    /// Route start as "lat,lng".
    #[arg(long = ARG_FROM, value_name = "lat,lng", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) from: Option<String>,
    /// Route end as "lat,lng".
    #[arg(long = ARG_TO, value_name = "lat,lng", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) to: Option<String>,
    /// Base URL for the OSRM server (e.g. "http://localhost:5000").
    #[arg(long = ARG_OSRM_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_url: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    pub(crate) origin: Coordinate,
    pub(crate) destination: Coordinate,
    pub(crate) osrm_url: String,
    pub(crate) timeout: Duration,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let raw_destination = args.to.as_deref().ok_or(CliError::MissingArgument {
            field: ARG_TO,
            env: ENV_TO,
        })?;
        let destination = parse_coordinate(ARG_TO, raw_destination)?;
        let origin = match args.from.as_deref() {
            Some(raw) => parse_coordinate(ARG_FROM, raw)?,
            None => LocationPicker::new().center(),
        };

        let defaults = HttpRouteProviderConfig::default();
        let osrm_url = args.osrm_url.unwrap_or(defaults.base_url);
        let timeout = args
            .timeout_secs
            .map_or(defaults.timeout, Duration::from_secs);

        Ok(Self {
            origin,
            destination,
            osrm_url,
            timeout,
        })
    }
}

fn parse_coordinate(field: &'static str, raw: &str) -> Result<Coordinate, CliError> {
    raw.parse()
        .map_err(|source| CliError::InvalidCoordinate { field, source })
}

/// JSON document written by the `route` command.
#[derive(Debug, Serialize)]
pub(crate) struct RouteReport {
    pub(crate) origin: Coordinate,
    pub(crate) destination: Coordinate,
    pub(crate) duration_secs: f64,
    pub(crate) distance_m: f64,
    /// `[lat, lng]` pairs in travel order.
    pub(crate) geometry: Vec<[f64; 2]>,
    pub(crate) steps: Vec<Value>,
    /// GeoJSON feature for the buffer around the origin.
    pub(crate) buffer: Option<Value>,
}

impl RouteReport {
    fn from_state(config: &RouteConfig, state: &RouteState) -> Self {
        Self {
            origin: state.origin.unwrap_or(config.origin),
            destination: state.destination.unwrap_or(config.destination),
            duration_secs: state.route.duration_secs,
            distance_m: state.route.distance_m,
            geometry: state.route.lat_lng_pairs(),
            steps: state.route.steps.clone(),
            buffer: state.buffer.as_ref().map(BufferRegion::to_geojson),
        }
    }
}

/// Builds a route provider for the current route invocation.
pub(crate) trait RouteProviderBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn RouteProvider>, CliError>;
}

pub(crate) struct DefaultRouteProviderBuilder;

impl RouteProviderBuilder for DefaultRouteProviderBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn RouteProvider>, CliError> {
        let provider_config =
            HttpRouteProviderConfig::new(config.osrm_url.clone()).with_timeout(config.timeout);
        let provider = HttpRouteProvider::with_config(provider_config).map_err(|source| {
            CliError::BuildRouteProvider {
                base_url: config.osrm_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(provider))
    }
}

pub(crate) fn run_route(args: RouteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_route_with(args, &DefaultRouteProviderBuilder, &mut stdout)
}

pub(crate) fn run_route_with(
    args: RouteArgs,
    builder: &dyn RouteProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_route(&config, builder)?;
    write_report(writer, &report)
}

pub(crate) fn execute_route(
    config: &RouteConfig,
    builder: &dyn RouteProviderBuilder,
) -> Result<RouteReport, CliError> {
    let calculator = RouteCalculator::new(builder.build(config)?);
    calculator.set_origin(config.origin);
    calculator.set_destination(config.destination);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let outcome = runtime.block_on(calculator.try_compute_route())?;
    info!("route computation finished: {outcome:?}");

    Ok(RouteReport::from_state(config, &calculator.snapshot()))
}

fn write_report(writer: &mut dyn Write, report: &RouteReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}
