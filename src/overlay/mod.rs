pub mod layer;
pub mod marker;
pub mod position;
pub mod provider;

// Re-export the essential types
pub use layer::{MarkerOverlay, TouchCallback};
pub use marker::MarkerSpec;
pub use position::{compute_positions, PositionedMarker};
pub use provider::{BoundsProvider, FixedBoundsProvider};
