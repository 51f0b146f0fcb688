use crate::core::{constants::MARKER_ICON_SIZE, geo::LatLng};
use serde::{Deserialize, Serialize};

/// A marker to place over the map, described in geographic terms plus the
/// pixel size of its drawn icon. The anchor is the point the pin tip
/// touches; the icon's pixel box hangs above it (bottom-center anchoring).
///
/// Markers are supplied as an ordered list, re-provided wholesale on every
/// update. The order matters only when z-indexes tie: without an explicit
/// `z_index`, a marker stacks at its position in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec<T> {
    /// Geographic point the icon is anchored to
    pub anchor: LatLng,
    /// Drawn icon width in pixels
    pub width_px: f64,
    /// Drawn icon height in pixels
    pub height_px: f64,
    /// Explicit stacking order; `None` falls back to the list index
    pub z_index: Option<i32>,
    /// Opaque application value handed back on a tap
    pub payload: T,
}

impl<T> MarkerSpec<T> {
    /// Creates a marker with the default icon size
    pub fn new(anchor: LatLng, payload: T) -> Self {
        let (width_px, height_px) = MARKER_ICON_SIZE;
        Self {
            anchor,
            width_px,
            height_px,
            z_index: None,
            payload,
        }
    }

    pub fn with_size(mut self, width_px: f64, height_px: f64) -> Self {
        self.width_px = width_px;
        self.height_px = height_px;
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    /// Placement options as JSON, payload excluded
    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "anchor": {
                "lat": self.anchor.lat,
                "lng": self.anchor.lng
            },
            "size": [self.width_px, self.height_px],
            "zIndex": self.z_index
        })
    }
}
