//! Route requests and results.
//!
//! A [`RouteResult`] is always replaced as a whole; nothing in the workspace
//! patches individual fields of a stored route.

use serde::Serialize;

use crate::Coordinate;

/// One turn-by-turn instruction, kept exactly as the routing service sent it.
pub type Step = serde_json::Value;

/// The two endpoints of a route computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteRequest {
    /// Where the route starts.
    pub origin: Coordinate,
    /// Where the route ends.
    pub destination: Coordinate,
}

impl RouteRequest {
    /// Pair an origin with a destination.
    #[must_use]
    pub const fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

/// A driving route between two points.
///
/// # Examples
/// ```
/// use fuelroute_core::{Coordinate, RouteResult};
///
/// let start = Coordinate::new(-17.9, -67.1).unwrap();
/// let end = Coordinate::new(-18.0, -67.2).unwrap();
/// let route = RouteResult::new(vec![start, end], Vec::new(), 420.0, 12_500.0);
///
/// assert_eq!(route.geometry.len(), 2);
/// assert!(!route.is_empty());
/// assert!(RouteResult::empty().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RouteResult {
    /// Path positions in travel order, latitude first.
    pub geometry: Vec<Coordinate>,
    /// Instructions for the first leg.
    pub steps: Vec<Step>,
    /// Travel time in seconds.
    pub duration_secs: f64,
    /// Travel distance in metres.
    pub distance_m: f64,
}

impl RouteResult {
    /// Construct a route from its parts.
    #[must_use]
    pub const fn new(
        geometry: Vec<Coordinate>,
        steps: Vec<Step>,
        duration_secs: f64,
        distance_m: f64,
    ) -> Self {
        Self {
            geometry,
            steps,
            duration_secs,
            distance_m,
        }
    }

    /// A route with no geometry, no steps and zero metrics.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), 0.0, 0.0)
    }

    /// Whether no geometry has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
    }

    /// Geometry as `[lat, lng]` pairs.
    #[must_use]
    pub fn lat_lng_pairs(&self) -> Vec<[f64; 2]> {
        self.geometry.iter().map(Coordinate::to_lat_lng).collect()
    }
}
