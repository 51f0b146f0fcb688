use crate::core::{geo::Point, viewport::ViewportBounds};
use crate::prelude::{HashMap, VecDeque};
use serde::{Deserialize, Serialize};

/// One complete press-release cycle in viewport pixel coordinates.
/// Transient: it exists only long enough to be resolved against the
/// current marker positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TapEvent {
    /// Where the press went down
    pub press_down: Point,
    /// Where the press was released
    pub press_up: Point,
}

impl TapEvent {
    pub fn new(press_down: Point, press_up: Point) -> Self {
        Self {
            press_down,
            press_up,
        }
    }

    /// How far the press travelled between down and up
    pub fn drag_delta(&self) -> Point {
        self.press_up.subtract(&self.press_down)
    }
}

/// Events emitted by the overlay. Ready and RegionChanged are forwarded
/// pass-through from the map widget, always after the overlay's internal
/// recompute has run, so listeners observe positions consistent with the
/// bounds they carry.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    /// The map finished initial layout and was measured
    Ready { bounds: ViewportBounds },
    /// A pan/zoom completed and the viewport was re-measured
    RegionChanged { bounds: ViewportBounds },
    /// A tap resolved to the marker at this input-list index
    Tapped { index: usize },
}

impl OverlayEvent {
    /// The listener-registry key for this event
    pub fn event_type(&self) -> &'static str {
        match self {
            OverlayEvent::Ready { .. } => "ready",
            OverlayEvent::RegionChanged { .. } => "regionchanged",
            OverlayEvent::Tapped { .. } => "tapped",
        }
    }
}

/// Event listener callback type
pub type EventCallback = Box<dyn Fn(&OverlayEvent) + Send + Sync>;

/// Event management system for the overlay
#[derive(Default)]
pub struct EventManager {
    /// Event listeners by event type
    listeners: HashMap<String, Vec<EventCallback>>,
    /// Event queue for processing
    event_queue: VecDeque<OverlayEvent>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event listener
    pub fn on<F>(&mut self, event_type: &str, callback: F)
    where
        F: Fn(&OverlayEvent) + Send + Sync + 'static,
    {
        self.listeners
            .entry(event_type.to_string())
            .or_default()
            .push(Box::new(callback));
    }

    /// Emit an event to the queue
    pub fn emit(&mut self, event: OverlayEvent) {
        self.event_queue.push_back(event);
    }

    /// Process all queued events, invoking listeners in registration order
    pub fn process_events(&mut self) -> Vec<OverlayEvent> {
        let events: Vec<_> = self.event_queue.drain(..).collect();

        for event in &events {
            if let Some(callbacks) = self.listeners.get(event.event_type()) {
                for callback in callbacks {
                    callback(event);
                }
            }
        }

        events
    }

    /// Clear all events from the queue
    pub fn clear_events(&mut self) {
        self.event_queue.clear();
    }

    /// Get number of pending events
    pub fn pending_events(&self) -> usize {
        self.event_queue.len()
    }
}
