//! Error types emitted by the fuelroute CLI.
//!
//! Keep this error type reasonably small, as CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use fuelroute_core::{CoordinateParseError, RouteError};
use fuelroute_data::routing::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the fuelroute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing flag, without dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A coordinate option could not be parsed.
    #[error("invalid --{field} coordinate: {source}")]
    InvalidCoordinate {
        /// Flag carrying the malformed value.
        field: &'static str,
        /// Why the value was rejected.
        #[source]
        source: CoordinateParseError,
    },
    /// Constructing the route provider failed.
    #[error("failed to build route provider for {base_url:?}: {source}")]
    BuildRouteProvider {
        /// OSRM base URL the provider was configured with.
        base_url: String,
        /// Underlying construction failure.
        #[source]
        source: ProviderBuildError,
    },
    /// The async runtime could not be started.
    #[error("failed to start the async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The routing service did not produce a route.
    #[error(transparent)]
    Route(#[from] RouteError),
    /// Serialising the route report failed.
    #[error("failed to serialise route report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the route report failed.
    #[error("failed to write route report: {0}")]
    WriteReport(#[source] std::io::Error),
}
