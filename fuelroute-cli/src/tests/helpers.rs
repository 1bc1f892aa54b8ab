//! Test helpers for driving the route command without a network.

use super::*;
use crate::route::{RouteConfig, RouteProviderBuilder, run_route_with};
use fuelroute_core::RouteProvider;
use fuelroute_core::test_support::StubRouteProvider;

/// Hands out clones of a stub provider in place of the HTTP provider.
pub(super) struct StubProviderBuilder {
    pub(super) provider: StubRouteProvider,
}

impl RouteProviderBuilder for StubProviderBuilder {
    fn build(&self, _config: &RouteConfig) -> Result<Box<dyn RouteProvider>, CliError> {
        Ok(Box::new(self.provider.clone()))
    }
}

/// Parse `argv` and run the route command against `builder`, writing the
/// report into `stdout`.
pub(super) fn run_with_stub(
    argv: &[String],
    builder: &StubProviderBuilder,
    stdout: &mut Vec<u8>,
) -> Result<(), CliError> {
    let cli = Cli::try_parse_from(argv).map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Route(args) => run_route_with(args, builder, stdout),
    }
}
