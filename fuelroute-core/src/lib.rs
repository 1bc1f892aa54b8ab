//! Core route state for the fuel-station finder.
//!
//! The crate models a driving route between two user-chosen points, the
//! routing-service seam used to compute it, and the 0.5 km proximity buffer
//! drawn around the starting point. Positions are stored latitude first;
//! conversion to and from the longitude-first wire order happens in
//! [`Coordinate`].
//!
//! Nothing here performs I/O. HTTP-backed providers live in `fuelroute-data`.
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod buffer;
pub mod calculator;
pub mod coordinate;
pub mod location_picker;
pub mod route;
pub mod routing;

/// Deterministic providers for tests.
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use buffer::{BUFFER_RADIUS_KM, BUFFER_SEGMENTS, BufferRegion, buffer_region};
pub use calculator::{ComputeOutcome, RouteCalculator, RouteState};
pub use coordinate::{Coordinate, CoordinateError, CoordinateParseError, EARTH_RADIUS_M};
pub use location_picker::{DEFAULT_CENTER, DEFAULT_ZOOM, LocationPicker, MAX_ZOOM};
pub use route::{RouteRequest, RouteResult, Step};
pub use routing::{RouteError, RouteProvider};

#[cfg(test)]
mod tests;
