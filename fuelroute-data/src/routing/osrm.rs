//! OSRM API response types for the Route service.
//!
//! Only the fields needed to build a [`fuelroute_core::RouteResult`] are
//! modelled. Steps are kept as raw JSON because callers display them without
//! interpreting their structure.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;
use serde_json::Value;

/// OSRM Route API response.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"NoRoute"` - No route found between the points
    /// - `"NoSegment"` - A coordinate could not be snapped to the network
    /// - `"InvalidQuery"` - Invalid query parameters
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Candidate routes, best first. Absent on error responses.
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

impl RouteResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }
}

/// One route in a [`RouteResponse`].
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Full-overview geometry requested with `geometries=geojson`.
    pub geometry: OsrmGeometry,
    /// One leg per pair of consecutive waypoints.
    #[serde(default)]
    pub legs: Vec<OsrmLeg>,
    /// Travel time in seconds.
    pub duration: f64,
    /// Travel distance in metres.
    pub distance: f64,
}

/// GeoJSON `LineString` geometry.
#[derive(Debug, Deserialize)]
pub struct OsrmGeometry {
    /// Positions as `[lng, lat]` pairs.
    pub coordinates: Vec<[f64; 2]>,
}

/// Route leg between two waypoints.
#[derive(Debug, Deserialize)]
pub struct OsrmLeg {
    /// Turn-by-turn steps, present when requested with `steps=true`.
    #[serde(default)]
    pub steps: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialise_success_response() {
        let json = r#"{
            "code": "Ok",
            "waypoints": [],
            "routes": [{
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[-67.1, -17.9], [-67.2, -18.0]]
                },
                "legs": [{
                    "steps": [{ "name": "Avenida Tacna", "maneuver": { "type": "depart" } }],
                    "summary": "",
                    "duration": 900.0,
                    "distance": 15000.0
                }],
                "duration": 900.0,
                "distance": 15000.0,
                "weight": 900.0
            }]
        }"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(response.is_ok());
        assert!(response.message.is_none());
        let route = response.routes.first().expect("one route");
        assert_eq!(route.geometry.coordinates, vec![[-67.1, -17.9], [-67.2, -18.0]]);
        assert_eq!(route.legs.len(), 1);
        assert_eq!(route.legs[0].steps[0]["name"], "Avenida Tacna");
        assert_eq!(route.duration, 900.0);
        assert_eq!(route.distance, 15_000.0);
    }

    #[test]
    fn deserialise_error_response() {
        let json = r#"{
            "code": "NoRoute",
            "message": "Impossible route between points"
        }"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(!response.is_ok());
        assert_eq!(
            response.message.as_deref(),
            Some("Impossible route between points")
        );
        assert!(response.routes.is_empty());
    }

    #[test]
    fn deserialise_leg_without_steps() {
        let json = r#"{
            "code": "Ok",
            "routes": [{
                "geometry": { "coordinates": [] },
                "legs": [{}],
                "duration": 0.0,
                "distance": 0.0
            }]
        }"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(response.routes[0].legs[0].steps.is_empty());
    }

    #[test]
    fn reject_geometry_with_short_positions() {
        let json = r#"{
            "code": "Ok",
            "routes": [{
                "geometry": { "coordinates": [[-67.1]] },
                "legs": [],
                "duration": 0.0,
                "distance": 0.0
            }]
        }"#;

        assert!(serde_json::from_str::<RouteResponse>(json).is_err());
    }
}
