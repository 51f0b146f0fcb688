//! Prelude module for common pinlayer types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use pinlayer::prelude::*;`

pub use crate::core::{
    bounds::PixelRect,
    geo::{LatLng, LatLngBounds, Point},
    viewport::ViewportBounds,
};

pub use crate::overlay::{
    layer::{MarkerOverlay, TouchCallback},
    marker::MarkerSpec,
    position::{compute_positions, PositionedMarker},
    provider::{BoundsProvider, FixedBoundsProvider},
};

pub use crate::input::{
    events::{EventManager, OverlayEvent, TapEvent},
    hit::{Hit, HitConfig},
    tracker::TapTracker,
};

pub use crate::{OverlayError, Result};

pub use std::collections::VecDeque;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
