//! Engine-wide magic numbers derived from common web-map conventions.
//! Keeping them in a single place makes it easier to tweak them.

/// Latitude limit of the Web Mercator projection. The projection diverges
/// at the poles; anchors beyond this are clamped by `LatLng::clamp_lat`.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// Mean equatorial Earth radius in meters (WGS84), used for haversine
/// distances.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Marker icon default size in pixels (regular PNG pin).
pub const MARKER_ICON_SIZE: (f64, f64) = (25.0, 41.0);

/// How far a press may travel (in pixels, per axis) and still count as a
/// tap rather than a pan.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 2.0;
