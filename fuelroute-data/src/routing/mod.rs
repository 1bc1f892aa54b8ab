//! HTTP-based route providers for routing services.
//!
//! This module provides [`HttpRouteProvider`], an implementation of
//! [`fuelroute_core::RouteProvider`] that fetches driving routes from an OSRM
//! routing service.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use fuelroute_core::{Coordinate, RouteCalculator};
//! use fuelroute_data::routing::{HttpRouteProvider, HttpRouteProviderConfig};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpRouteProviderConfig::new("http://localhost:5000")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0");
//! let calculator = RouteCalculator::new(HttpRouteProvider::with_config(config)?);
//!
//! calculator.set_origin(Coordinate::new(-17.964055, -67.114579)?);
//! calculator.set_destination(Coordinate::new(-18.0, -67.2)?);
//! calculator.compute_route().await;
//!
//! let distance = calculator.distance_m();
//! # let _ = distance;
//! # Ok(())
//! # }
//! ```

mod osrm;
mod provider;

pub use provider::{
    DEFAULT_PROFILE, DEFAULT_USER_AGENT, HttpRouteProvider, HttpRouteProviderConfig,
    ProviderBuildError,
};
