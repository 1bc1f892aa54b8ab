//! Facade crate for the fuel-station finder's routing layer.
//!
//! This crate re-exports the core route types and exposes the OSRM-backed
//! provider behind the `http` feature.

#![forbid(unsafe_code)]

pub use fuelroute_core::{
    BUFFER_RADIUS_KM, BufferRegion, ComputeOutcome, Coordinate, CoordinateError,
    CoordinateParseError, DEFAULT_CENTER, LocationPicker, RouteCalculator, RouteError,
    RouteProvider, RouteRequest, RouteResult, RouteState, Step, buffer_region,
};

#[cfg(feature = "http")]
pub use fuelroute_data::routing::{HttpRouteProvider, HttpRouteProviderConfig, ProviderBuildError};

#[cfg(feature = "test-support")]
pub use fuelroute_core::test_support;
