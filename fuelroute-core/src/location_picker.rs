//! Map centre and zoom used when choosing a point by dropping a marker.

use crate::Coordinate;

/// Centre shown before any marker has been dropped.
pub const DEFAULT_CENTER: Coordinate = Coordinate::from_degrees_unchecked(-17.964055, -67.114579);

/// Zoom level shown before the user zooms.
pub const DEFAULT_ZOOM: u8 = 15;

/// Deepest zoom level supported by the tile layer.
pub const MAX_ZOOM: u8 = 19;

/// Marker-driven map view state.
///
/// # Examples
///
/// ```
/// use fuelroute_core::{Coordinate, DEFAULT_CENTER, LocationPicker, MAX_ZOOM};
///
/// let mut picker = LocationPicker::new();
/// assert_eq!(picker.center(), DEFAULT_CENTER);
///
/// let dropped = Coordinate::new(-17.97, -67.11).unwrap();
/// picker.pin(dropped);
/// assert_eq!(picker.center(), dropped);
///
/// picker.set_zoom(25);
/// assert_eq!(picker.zoom(), MAX_ZOOM);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationPicker {
    center: Coordinate,
    zoom: u8,
}

impl Default for LocationPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationPicker {
    /// Start at [`DEFAULT_CENTER`] and [`DEFAULT_ZOOM`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_center(DEFAULT_CENTER)
    }

    /// Start at `center` with the default zoom.
    #[must_use]
    pub const fn with_center(center: Coordinate) -> Self {
        Self {
            center,
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Current map centre.
    #[must_use]
    pub const fn center(&self) -> Coordinate {
        self.center
    }

    /// Current zoom level.
    #[must_use]
    pub const fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Re-centre the map on a dropped marker.
    pub const fn pin(&mut self, marker: Coordinate) {
        self.center = marker;
    }

    /// Change the zoom level, clamped to [`MAX_ZOOM`].
    pub fn set_zoom(&mut self, zoom: u8) {
        self.zoom = zoom.min(MAX_ZOOM);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_center_is_valid() {
        let checked = Coordinate::new(DEFAULT_CENTER.latitude(), DEFAULT_CENTER.longitude())
            .expect("default centre in range");
        assert_eq!(checked, DEFAULT_CENTER);
        assert_eq!(LocationPicker::default(), LocationPicker::new());
    }

    #[rstest]
    fn pin_moves_center_only() {
        let mut picker = LocationPicker::new();
        picker.set_zoom(12);
        let marker = Coordinate::new(-16.5, -68.15).expect("valid marker");

        picker.pin(marker);

        assert_eq!(picker.center(), marker);
        assert_eq!(picker.zoom(), 12);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(15, 15)]
    #[case(19, 19)]
    #[case(20, 19)]
    #[case(u8::MAX, 19)]
    fn zoom_is_clamped(#[case] requested: u8, #[case] expected: u8) {
        let mut picker = LocationPicker::new();
        picker.set_zoom(requested);
        assert_eq!(picker.zoom(), expected);
    }

    #[rstest]
    fn with_center_keeps_default_zoom() {
        let center = Coordinate::new(0.0, 0.0).expect("valid");
        let picker = LocationPicker::with_center(center);
        assert_eq!(picker.center(), center);
        assert_eq!(picker.zoom(), DEFAULT_ZOOM);
    }
}
