//! Proximity buffer around a single point.
//!
//! The buffer is a geodesic circle approximated by a polygon. Vertices are
//! placed with `geo`'s haversine destination, so the region keeps its radius
//! in metres regardless of latitude. Rings near the antimeridian keep
//! continuous longitudes around the centre, and a circle that encloses a pole
//! becomes a cap bounded by the pole's parallel.

use geo::{Coord, Destination, Distance, Haversine, LineString, Point, Polygon};
use serde_json::{Value, json};

use crate::Coordinate;

/// Radius of the proximity buffer in kilometres.
pub const BUFFER_RADIUS_KM: f64 = 0.5;

/// Number of polygon edges used to approximate the circle.
pub const BUFFER_SEGMENTS: u32 = 64;

const BUFFER_RADIUS_M: f64 = 500.0;

/// Polygon covering every point within [`BUFFER_RADIUS_KM`] of a centre.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferRegion {
    center: Coordinate,
    radius_km: f64,
    polygon: Polygon<f64>,
}

impl BufferRegion {
    /// The point the buffer is built around.
    #[must_use]
    pub const fn center(&self) -> Coordinate {
        self.center
    }

    /// Radius in kilometres.
    #[must_use]
    pub const fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Polygon in geographic coordinates (`x = lng`, `y = lat`).
    ///
    /// Longitudes may leave `[-180, 180]` by up to the buffer's width when the
    /// centre sits next to the antimeridian.
    #[must_use]
    pub const fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    /// Whether `coordinate` lies within the buffer radius of the centre.
    #[must_use]
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.center.distance_to(coordinate) <= BUFFER_RADIUS_M
    }

    /// The region as a GeoJSON `Feature` with `[lng, lat]` positions.
    #[must_use]
    pub fn to_geojson(&self) -> Value {
        let ring: Vec<[f64; 2]> = self
            .polygon
            .exterior()
            .coords()
            .map(|coord| [coord.x, coord.y])
            .collect();
        json!({
            "type": "Feature",
            "properties": {
                "radius_km": self.radius_km,
            },
            "geometry": {
                "type": "Polygon",
                "coordinates": [ring],
            },
        })
    }
}

/// Build the proximity buffer around `origin`.
///
/// # Examples
/// ```
/// use fuelroute_core::{BUFFER_RADIUS_KM, Coordinate, buffer_region};
///
/// let origin = Coordinate::new(-17.964055, -67.114579).unwrap();
/// let region = buffer_region(origin);
///
/// assert!(region.contains(&origin));
/// assert_eq!(region.radius_km(), BUFFER_RADIUS_KM);
/// ```
#[must_use]
pub fn buffer_region(origin: Coordinate) -> BufferRegion {
    let center = origin.to_point();
    let vertices = circle_vertices(center);
    let ring = match enclosed_pole(center) {
        Some(pole_lat) => polar_cap(vertices, pole_lat),
        None => unwrapped_ring(center.x(), vertices),
    };

    BufferRegion {
        center: origin,
        radius_km: BUFFER_RADIUS_KM,
        polygon: Polygon::new(LineString::from(ring), Vec::new()),
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "bearings divide the full turn into equal slices"
)]
fn bearing_for(segment: u32) -> f64 {
    360.0 * f64::from(segment) / f64::from(BUFFER_SEGMENTS)
}

/// One vertex per segment, clockwise from north.
///
/// Bearings are meaningless at a pole itself, so there the vertices are spread
/// evenly over longitude on the circle's parallel.
#[expect(clippy::float_arithmetic, reason = "longitudes offset from the bearing")]
fn circle_vertices(center: Point<f64>) -> Vec<Coord<f64>> {
    if center.y().abs() < 90.0 {
        return (0..BUFFER_SEGMENTS)
            .map(|segment| {
                Haversine
                    .destination(center, bearing_for(segment), BUFFER_RADIUS_M)
                    .into()
            })
            .collect();
    }
    let parallel = Haversine.destination(center, 180.0, BUFFER_RADIUS_M).y();
    (0..BUFFER_SEGMENTS)
        .map(|segment| Coord {
            x: bearing_for(segment) - 180.0,
            y: parallel,
        })
        .collect()
}

/// Latitude of the pole inside the circle, if any.
fn enclosed_pole(center: Point<f64>) -> Option<f64> {
    let pole_lat = 90.0_f64.copysign(center.y());
    let pole = Point::new(center.x(), pole_lat);
    (Haversine.distance(center, pole) <= BUFFER_RADIUS_M).then_some(pole_lat)
}

/// Closes the ring after shifting each vertex by whole turns so that it lies
/// within half a turn of the centre's longitude.
#[expect(clippy::float_arithmetic, reason = "shift longitudes by whole turns")]
fn unwrapped_ring(center_lng: f64, mut vertices: Vec<Coord<f64>>) -> Vec<Coord<f64>> {
    for vertex in &mut vertices {
        let offset = vertex.x - center_lng;
        if offset > 180.0 {
            vertex.x -= 360.0;
        } else if offset < -180.0 {
            vertex.x += 360.0;
        }
    }
    if let Some(first) = vertices.first().copied() {
        vertices.push(first);
    }
    vertices
}

/// Ring running west to east along the circle, then back along the pole's
/// parallel. The circle meets the antimeridian at a latitude interpolated
/// between its last and first vertices.
#[expect(
    clippy::float_arithmetic,
    reason = "interpolate where the circle meets the antimeridian"
)]
fn polar_cap(mut vertices: Vec<Coord<f64>>, pole_lat: f64) -> Vec<Coord<f64>> {
    vertices.sort_by(|a, b| a.x.total_cmp(&b.x));
    let (Some(first), Some(last)) = (vertices.first().copied(), vertices.last().copied()) else {
        return vertices;
    };
    let span = first.x + 360.0 - last.x;
    let seam_lat = if span > 0.0 {
        last.y + (180.0 - last.x) / span * (first.y - last.y)
    } else {
        last.y
    };

    let mut ring = Vec::with_capacity(vertices.len().saturating_add(5));
    ring.push(Coord {
        x: -180.0,
        y: seam_lat,
    });
    ring.extend(vertices);
    ring.extend([
        Coord {
            x: 180.0,
            y: seam_lat,
        },
        Coord {
            x: 180.0,
            y: pole_lat,
        },
        Coord {
            x: -180.0,
            y: pole_lat,
        },
        Coord {
            x: -180.0,
            y: seam_lat,
        },
    ]);
    ring
}
