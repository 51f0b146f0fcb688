use crate::{
    core::{bounds::PixelRect, viewport::ViewportBounds},
    overlay::marker::MarkerSpec,
    Result,
};
use serde::{Deserialize, Serialize};

/// Pixel-space placement derived for one marker under one viewport. Not
/// independently owned state: the list is recomputed fresh whenever the
/// viewport or the marker list changes, and mirrors the input list 1:1 in
/// length and order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionedMarker {
    /// The marker's pixel box within the viewport
    pub rect: PixelRect,
    /// Effective stacking order: the explicit z-index, or the list index
    pub z_index: i32,
    /// Position in the input marker list
    pub index: usize,
}

/// Projects every marker anchor through the viewport and derives its pixel
/// box. Pure: identical inputs yield identical output, so repeating a
/// recompute is always safe.
pub fn compute_positions<T>(
    bounds: &ViewportBounds,
    markers: &[MarkerSpec<T>],
) -> Result<Vec<PositionedMarker>> {
    markers
        .iter()
        .enumerate()
        .map(|(index, marker)| {
            let anchor = bounds.project(&marker.anchor)?;
            Ok(PositionedMarker {
                rect: PixelRect::anchored(anchor, marker.width_px, marker.height_px),
                z_index: marker.z_index.unwrap_or(index as i32),
                index,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    fn viewport() -> ViewportBounds {
        ViewportBounds::new(300.0, 300.0, LatLng::new(0.0, 0.0), 10.0).unwrap()
    }

    #[test]
    fn test_anchor_box_derivation() {
        let markers = vec![MarkerSpec::new(LatLng::new(0.0, 0.0), ()).with_size(20.0, 20.0)];
        let positions = compute_positions(&viewport(), &markers).unwrap();

        // The anchor projects to pixel (0, 300); the box hangs above it.
        let rect = positions[0].rect;
        assert!((rect.left() - -10.0).abs() < 1e-9);
        assert!((rect.right() - 10.0).abs() < 1e-9);
        assert!((rect.top() - 280.0).abs() < 1e-9);
        assert!((rect.bottom() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_order_and_length_mirror_input() {
        let markers: Vec<_> = (0..5)
            .map(|i| MarkerSpec::new(LatLng::new(1.0 + i as f64, 2.0), i))
            .collect();
        let positions = compute_positions(&viewport(), &markers).unwrap();

        assert_eq!(positions.len(), markers.len());
        for (i, position) in positions.iter().enumerate() {
            assert_eq!(position.index, i);
            assert_eq!(position.z_index, i as i32);
        }
    }

    #[test]
    fn test_explicit_z_index_wins_over_index() {
        let markers = vec![
            MarkerSpec::new(LatLng::new(1.0, 1.0), ()).with_z_index(9),
            MarkerSpec::new(LatLng::new(2.0, 2.0), ()),
        ];
        let positions = compute_positions(&viewport(), &markers).unwrap();

        assert_eq!(positions[0].z_index, 9);
        assert_eq!(positions[1].z_index, 1);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let markers: Vec<_> = (0..3)
            .map(|i| MarkerSpec::new(LatLng::new(3.0 * i as f64, 2.5), i).with_size(16.0, 24.0))
            .collect();
        let bounds = viewport();

        let first = compute_positions(&bounds, &markers).unwrap();
        let second = compute_positions(&bounds, &markers).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let markers: Vec<MarkerSpec<()>> = Vec::new();
        assert!(compute_positions(&viewport(), &markers).unwrap().is_empty());
    }
}
