use crate::{core::geo::Point, input::events::TapEvent};

/// Tracks a single press interaction. Idle until a press goes down, then
/// holds the down position until the matching release produces a
/// [`TapEvent`] and the tracker returns to idle. Resolution is synchronous;
/// there is no intermediate state between release and result.
#[derive(Debug, Default)]
pub struct TapTracker {
    press_down: Option<Point>,
}

impl TapTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where the press went down. A second press-down before a
    /// release supersedes the first.
    pub fn press_in(&mut self, position: Point) {
        self.press_down = Some(position);
    }

    /// Completes the cycle. Returns the tap if a press was active, or
    /// `None` for a stray release.
    pub fn press_release(&mut self, position: Point) -> Option<TapEvent> {
        let press_down = self.press_down.take()?;
        Some(TapEvent::new(press_down, position))
    }

    pub fn is_pressed(&self) -> bool {
        self.press_down.is_some()
    }

    /// Abandons any in-flight press
    pub fn reset(&mut self) {
        self.press_down = None;
    }
}
