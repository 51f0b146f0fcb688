use crate::{
    core::constants::DEFAULT_DRAG_THRESHOLD, input::events::TapEvent,
    overlay::position::PositionedMarker,
};

/// Configuration for tap resolution
#[derive(Debug, Clone, PartialEq)]
pub struct HitConfig {
    /// Maximum per-axis travel (pixels) between press-down and release for
    /// the interaction to count as a tap instead of a pan
    pub drag_threshold_px: f64,
}

impl Default for HitConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

/// A resolved tap: which marker won, and with what stacking value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// Index of the winning marker in the original input list
    pub index: usize,
    /// The winning marker's effective z-index
    pub z_index: i32,
}

/// Resolves a tap against positioned markers.
///
/// A release that travelled more than the drag threshold on either axis is
/// a pan, not a tap, and never hits. Otherwise markers are scanned from
/// last to first (later entries draw on top by default); a marker whose box
/// contains the release point replaces the best candidate so far when its
/// z-index is greater *or equal*. Scanning in reverse with `>=` means the
/// highest z-index wins, and among equal z-indexes the earliest entry in
/// the input list wins. That tie-break is deliberate, observable behavior.
///
/// `None` is the normal result when nothing was hit.
pub fn resolve(
    tap: &TapEvent,
    positions: &[PositionedMarker],
    config: &HitConfig,
) -> Option<Hit> {
    let delta = tap.drag_delta();
    if delta.x.abs() > config.drag_threshold_px || delta.y.abs() > config.drag_threshold_px {
        log::trace!(
            "press travelled ({:.1}, {:.1}) px, classified as pan",
            delta.x,
            delta.y
        );
        return None;
    }

    let mut found: Option<Hit> = None;
    for position in positions.iter().rev() {
        if position.rect.contains(&tap.press_up)
            && found.map_or(true, |best| position.z_index >= best.z_index)
        {
            found = Some(Hit {
                index: position.index,
                z_index: position.z_index,
            });
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{bounds::PixelRect, geo::Point};

    fn marker(index: usize, z_index: i32, rect: PixelRect) -> PositionedMarker {
        PositionedMarker {
            rect,
            z_index,
            index,
        }
    }

    fn tap_at(x: f64, y: f64) -> TapEvent {
        TapEvent::new(Point::new(x, y), Point::new(x, y))
    }

    #[test]
    fn test_drag_is_rejected() {
        let covering = vec![marker(0, 0, PixelRect::from_coords(0.0, 0.0, 100.0, 100.0))];
        let dragged = TapEvent::new(Point::new(10.0, 10.0), Point::new(15.0, 10.0));

        assert_eq!(resolve(&dragged, &covering, &HitConfig::default()), None);
    }

    #[test]
    fn test_travel_at_threshold_still_taps() {
        let covering = vec![marker(0, 0, PixelRect::from_coords(0.0, 0.0, 100.0, 100.0))];
        let tap = TapEvent::new(Point::new(10.0, 10.0), Point::new(12.0, 8.0));

        assert!(resolve(&tap, &covering, &HitConfig::default()).is_some());
    }

    #[test]
    fn test_edge_touch_counts_as_hit() {
        let positions = vec![marker(0, 0, PixelRect::from_coords(10.0, 10.0, 20.0, 20.0))];

        let hit = resolve(&tap_at(20.0, 20.0), &positions, &HitConfig::default());
        assert_eq!(hit.map(|h| h.index), Some(0));
    }

    #[test]
    fn test_later_index_wins_with_default_z() {
        // Default z-index is the input index, so the later marker stacks on top.
        let overlapping = vec![
            marker(0, 0, PixelRect::from_coords(0.0, 0.0, 50.0, 50.0)),
            marker(1, 1, PixelRect::from_coords(0.0, 0.0, 50.0, 50.0)),
        ];

        let hit = resolve(&tap_at(25.0, 25.0), &overlapping, &HitConfig::default());
        assert_eq!(hit.map(|h| h.index), Some(1));
    }

    #[test]
    fn test_equal_z_breaks_to_earliest_index() {
        let overlapping = vec![
            marker(0, 5, PixelRect::from_coords(0.0, 0.0, 50.0, 50.0)),
            marker(1, 5, PixelRect::from_coords(0.0, 0.0, 50.0, 50.0)),
        ];

        let hit = resolve(&tap_at(25.0, 25.0), &overlapping, &HitConfig::default());
        assert_eq!(hit.map(|h| h.index), Some(0));
    }

    #[test]
    fn test_higher_z_beats_later_index() {
        let overlapping = vec![
            marker(0, 10, PixelRect::from_coords(0.0, 0.0, 50.0, 50.0)),
            marker(1, 1, PixelRect::from_coords(0.0, 0.0, 50.0, 50.0)),
        ];

        let hit = resolve(&tap_at(25.0, 25.0), &overlapping, &HitConfig::default());
        assert_eq!(hit.map(|h| h.index), Some(0));
    }

    #[test]
    fn test_no_candidates_is_none() {
        assert_eq!(resolve(&tap_at(5.0, 5.0), &[], &HitConfig::default()), None);

        let elsewhere = vec![marker(0, 0, PixelRect::from_coords(50.0, 50.0, 60.0, 60.0))];
        assert_eq!(
            resolve(&tap_at(5.0, 5.0), &elsewhere, &HitConfig::default()),
            None
        );
    }
}
