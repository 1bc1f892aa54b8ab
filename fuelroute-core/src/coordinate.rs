//! Geographic coordinates in `(latitude, longitude)` order.
//!
//! The rest of the workspace stores positions latitude first. Routing services
//! and GeoJSON speak longitude first, so the conversions in this module are the
//! only place where the two orders meet.

use std::str::FromStr;

use geo::{Distance, Haversine, Point};
use serde::Serialize;
use thiserror::Error;

/// Mean Earth radius in metres used for great-circle distances.
pub const EARTH_RADIUS_M: f64 = Haversine.radius();

/// A validated position in degrees.
///
/// # Examples
///
/// ```
/// use fuelroute_core::Coordinate;
///
/// # fn main() -> Result<(), fuelroute_core::CoordinateError> {
/// let station = Coordinate::new(-17.964055, -67.114579)?;
/// assert_eq!(station.to_lng_lat(), [-67.114579, -17.964055]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// Errors returned by [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude was outside `[-90, 90]` or not finite.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude was outside `[-180, 180]` or not finite.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

impl Coordinate {
    /// Validates and constructs a [`Coordinate`].
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either component is out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Constructs a coordinate without range checks.
    ///
    /// Only used for compile-time constants that are known to be valid.
    pub(crate) const fn from_degrees_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds a coordinate from a `[lng, lat]` pair as sent by routing
    /// services and GeoJSON.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either component is out of range.
    pub fn from_lng_lat([longitude, latitude]: [f64; 2]) -> Result<Self, CoordinateError> {
        Self::new(latitude, longitude)
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The `[lng, lat]` pair used on the wire.
    #[must_use]
    pub const fn to_lng_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// The `[lat, lng]` pair used for storage and display.
    #[must_use]
    pub const fn to_lat_lng(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }

    /// A `geo` point with `x = lng` and `y = lat`.
    #[must_use]
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Great-circle distance to `other` in metres.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        Haversine.distance(self.to_point(), other.to_point())
    }
}

/// Errors returned when parsing a `"lat,lng"` string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateParseError {
    /// The input was not two comma-separated values.
    #[error("expected \"lat,lng\", got {0:?}")]
    Format(String),
    /// One of the components was not a number.
    #[error("invalid number {value:?}: {source}")]
    Number {
        /// The offending component.
        value: String,
        /// Underlying float parse error.
        #[source]
        source: std::num::ParseFloatError,
    },
    /// The components parsed but were out of range.
    #[error(transparent)]
    Range(#[from] CoordinateError),
}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let Some((lat, lng)) = input.split_once(',') else {
            return Err(CoordinateParseError::Format(input.to_owned()));
        };
        if lng.contains(',') {
            return Err(CoordinateParseError::Format(input.to_owned()));
        }
        let latitude = parse_component(lat)?;
        let longitude = parse_component(lng)?;
        Ok(Self::new(latitude, longitude)?)
    }
}

fn parse_component(raw: &str) -> Result<f64, CoordinateParseError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|source| CoordinateParseError::Number {
            value: trimmed.to_owned(),
            source,
        })
}
