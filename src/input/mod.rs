pub mod events;
pub mod hit;
pub mod tracker;

// Re-export the essential types
pub use events::{EventCallback, EventManager, OverlayEvent, TapEvent};
pub use hit::{resolve, Hit, HitConfig};
pub use tracker::TapTracker;
