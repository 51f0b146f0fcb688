//! # Pinlayer
//!
//! A marker-overlay engine for map widgets.
//!
//! Pinlayer keeps custom-drawn markers pixel-aligned with an underlying
//! map as it pans and zooms, and resolves taps against them. It does not
//! render anything itself: the host widget draws the markers at the pixel
//! boxes this crate computes, and feeds press/release events back in.

pub mod core;
pub mod input;
pub mod overlay;
pub mod prelude;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::PixelRect,
    geo::{LatLng, LatLngBounds, Point},
    viewport::ViewportBounds,
};

pub use crate::overlay::{
    layer::MarkerOverlay,
    marker::MarkerSpec,
    position::{compute_positions, PositionedMarker},
    provider::{BoundsProvider, FixedBoundsProvider},
};

pub use crate::input::{
    events::{EventManager, OverlayEvent, TapEvent},
    hit::{Hit, HitConfig},
    tracker::TapTracker,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Measurement error: {0}")]
    Measurement(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = OverlayError;
