use crate::{
    core::geo::{LatLng, LatLngBounds, Point},
    OverlayError, Result,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Describes the visible map viewport at one instant: its pixel dimensions
/// and the geographic box it shows, given as the south-west corner plus the
/// longitude span (east edge minus west edge).
///
/// One value is produced per viewport-change event (map ready, region change
/// complete) and supersedes the previous one atomically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    /// Viewport width in pixels
    pub width_px: f64,
    /// Viewport height in pixels
    pub height_px: f64,
    /// Geographic coordinate of the viewport's south-west corner
    pub south_west: LatLng,
    /// Longitude span of the viewport in degrees, always positive
    pub lng_delta: f64,
}

impl ViewportBounds {
    /// Creates a validated viewport description. Fails with
    /// `InvalidViewport` for non-positive dimensions or longitude span, and
    /// with `InvalidCoordinates` for an out-of-range south-west corner.
    pub fn new(width_px: f64, height_px: f64, south_west: LatLng, lng_delta: f64) -> Result<Self> {
        let bounds = Self {
            width_px,
            height_px,
            south_west,
            lng_delta,
        };

        if !bounds.is_valid() {
            return Err(OverlayError::InvalidViewport(format!(
                "{}x{} px, lng span {}",
                width_px, height_px, lng_delta
            ))
            .into());
        }
        if !south_west.is_valid() {
            return Err(OverlayError::InvalidCoordinates(format!(
                "south-west corner {}, {}",
                south_west.lat, south_west.lng
            ))
            .into());
        }

        Ok(bounds)
    }

    /// Checks the projection preconditions: positive pixel dimensions and a
    /// positive longitude span
    pub fn is_valid(&self) -> bool {
        self.width_px > 0.0 && self.height_px > 0.0 && self.lng_delta > 0.0
    }

    /// Pixels per degree of longitude
    fn scale(&self) -> f64 {
        self.width_px / self.lng_delta
    }

    /// Projects a geographic point to pixel coordinates within this
    /// viewport, relative to the top-left origin with y increasing
    /// downward. Matches the Mercator math of the underlying map renderer
    /// so that overlay pixels track the rendered map exactly.
    ///
    /// Latitudes of exactly ±90° are undefined under Mercator and yield a
    /// non-finite coordinate; clamp with [`LatLng::clamp_lat`] before
    /// calling. The projection does not correct such input itself.
    pub fn project(&self, point: &LatLng) -> Result<Point> {
        if !self.is_valid() {
            return Err(OverlayError::InvalidViewport(format!(
                "{}x{} px, lng span {}",
                self.width_px, self.height_px, self.lng_delta
            ))
            .into());
        }

        let x = (point.lng - self.south_west.lng) * self.scale();

        let world_map_width = self.scale() * 360.0 / (2.0 * PI);
        let y_offset = mercator_y(world_map_width, self.south_west.lat.to_radians());
        let y = self.height_px - (mercator_y(world_map_width, point.lat.to_radians()) - y_offset);

        Ok(Point::new(x, y))
    }

    /// The geographic region this viewport shows, derived by unprojecting
    /// the pixel corners. The north edge follows from the pixel height and
    /// the Mercator scale implied by the longitude span.
    pub fn region(&self) -> LatLngBounds {
        let world_map_width = self.scale() * 360.0 / (2.0 * PI);
        let y_south = mercator_y(world_map_width, self.south_west.lat.to_radians());
        let north_lat = inverse_mercator_y(world_map_width, y_south + self.height_px);

        LatLngBounds::new(
            self.south_west,
            LatLng::new(north_lat, self.south_west.lng + self.lng_delta),
        )
    }
}

/// Vertical Mercator coordinate for a latitude in radians, on a world map
/// `world_map_width` pixels wide. Grows northward.
fn mercator_y(world_map_width: f64, lat_rad: f64) -> f64 {
    (world_map_width / 2.0) * ((1.0 + lat_rad.sin()) / (1.0 - lat_rad.sin())).ln()
}

fn inverse_mercator_y(world_map_width: f64, y: f64) -> f64 {
    let t = (2.0 * y / world_map_width).exp();
    ((t - 1.0) / (t + 1.0)).asin().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> ViewportBounds {
        ViewportBounds::new(300.0, 300.0, LatLng::new(0.0, 0.0), 10.0).unwrap()
    }

    #[test]
    fn test_south_west_corner_projects_to_bottom_left() {
        let bounds = viewport();
        let pixel = bounds.project(&bounds.south_west).unwrap();

        assert!(pixel.x.abs() < 1e-9);
        assert!((pixel.y - bounds.height_px).abs() < 1e-9);
    }

    #[test]
    fn test_x_increases_with_longitude() {
        let bounds = viewport();
        let mut last_x = f64::NEG_INFINITY;
        for lng in [0.0, 1.0, 2.5, 5.0, 9.9] {
            let pixel = bounds.project(&LatLng::new(3.0, lng)).unwrap();
            assert!(pixel.x > last_x);
            last_x = pixel.x;
        }
    }

    #[test]
    fn test_y_decreases_with_latitude() {
        let bounds = viewport();
        let mut last_y = f64::INFINITY;
        for lat in [-60.0, -10.0, 0.0, 10.0, 45.0, 80.0] {
            let pixel = bounds.project(&LatLng::new(lat, 5.0)).unwrap();
            assert!(pixel.y < last_y);
            last_y = pixel.y;
        }
    }

    #[test]
    fn test_invalid_viewport_rejected() {
        assert!(ViewportBounds::new(0.0, 300.0, LatLng::default(), 10.0).is_err());
        assert!(ViewportBounds::new(300.0, -1.0, LatLng::default(), 10.0).is_err());
        assert!(ViewportBounds::new(300.0, 300.0, LatLng::default(), 0.0).is_err());
        assert!(ViewportBounds::new(300.0, 300.0, LatLng::new(95.0, 0.0), 10.0).is_err());
    }

    #[test]
    fn test_pole_is_non_finite() {
        let bounds = viewport();
        let pixel = bounds.project(&LatLng::new(90.0, 5.0)).unwrap();
        assert!(!pixel.y.is_finite());

        let clamped = LatLng::new(LatLng::clamp_lat(90.0), 5.0);
        assert!(bounds.project(&clamped).unwrap().y.is_finite());
    }

    #[test]
    fn test_region_round_trip() {
        let bounds = viewport();
        let region = bounds.region();

        assert_eq!(region.south_west, bounds.south_west);
        assert_eq!(region.north_east.lng, 10.0);

        // Projecting the derived north edge must land on the top pixel row.
        let top = bounds
            .project(&LatLng::new(region.north_east.lat, 0.0))
            .unwrap();
        assert!(top.y.abs() < 1e-6);
    }
}
