pub mod bounds;
pub mod constants;
pub mod geo;
pub mod viewport;

// Re-export the essential types
pub use bounds::PixelRect;
pub use geo::{LatLng, LatLngBounds, Point};
pub use viewport::ViewportBounds;
