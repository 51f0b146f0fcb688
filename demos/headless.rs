use pinlayer::{
    FixedBoundsProvider, LatLng, MarkerOverlay, MarkerSpec, Point, ViewportBounds,
};
use std::sync::Arc;

/// Example of driving the overlay without any UI: measure, place markers,
/// and resolve a few taps.
fn main() -> pinlayer::Result<()> {
    #[cfg(feature = "debug")]
    env_logger::init();

    println!("📍 Pinlayer Headless Example");
    println!("============================");

    // A 300x300 px viewport looking at the 10°x~10° box north-east of (0, 0)
    let bounds = ViewportBounds::new(300.0, 300.0, LatLng::new(0.0, 0.0), 10.0)?;
    let provider = Arc::new(FixedBoundsProvider::new(bounds));

    let mut overlay = MarkerOverlay::with_provider(provider.clone());
    overlay.on_touch(|city: &&str, index| {
        println!("   👆 tapped {} (marker #{})", city, index);
    });

    overlay.set_markers(vec![
        MarkerSpec::new(LatLng::new(0.0, 0.0), "Null Island").with_size(20.0, 20.0),
        MarkerSpec::new(LatLng::new(5.0, 5.0), "Mid-box"),
        MarkerSpec::new(LatLng::new(9.0, 9.0), "North-east").with_z_index(10),
    ]);

    // The map widget reports ready; measure and place the markers.
    overlay.refresh_blocking()?;
    println!("✅ Viewport measured: {}x{} px", bounds.width_px, bounds.height_px);

    for position in overlay.positions() {
        println!(
            "   marker #{} at [{:.1}..{:.1}] x [{:.1}..{:.1}] (z {})",
            position.index,
            position.rect.left(),
            position.rect.right(),
            position.rect.top(),
            position.rect.bottom(),
            position.z_index,
        );
    }
    println!(
        "   placement json: {}",
        serde_json::to_string(overlay.positions())?
    );

    if let Some(extent) = overlay.markers_bounds() {
        let center = extent.center();
        println!(
            "   anchors span ({:.1}, {:.1}) .. ({:.1}, {:.1}), center ({:.1}, {:.1})",
            extent.south_west.lat,
            extent.south_west.lng,
            extent.north_east.lat,
            extent.north_east.lng,
            center.lat,
            center.lng,
        );
    }

    println!("\n🎯 Simulating interactions:");

    // A clean tap on the corner marker.
    overlay.press_in(Point::new(0.0, 295.0));
    if overlay.press_release(Point::new(0.0, 295.0)).is_none() {
        println!("   (no marker under tap)");
    }

    // A pan gesture across the same marker: rejected.
    overlay.press_in(Point::new(0.0, 295.0));
    if overlay.press_release(Point::new(40.0, 295.0)).is_none() {
        println!("   (pan across the corner marker: no activation)");
    }

    // A tap over open water.
    overlay.press_in(Point::new(150.0, 40.0));
    if overlay.press_release(Point::new(150.0, 40.0)).is_none() {
        println!("   (tap over empty map: no activation)");
    }

    // The user zooms in; the host re-measures and positions follow.
    let zoomed = ViewportBounds::new(300.0, 300.0, LatLng::new(0.0, 0.0), 5.0)?;
    provider.set(zoomed);
    overlay.refresh_blocking()?;
    println!("\n🔎 After zoom (lng span 5°):");
    for position in overlay.positions() {
        println!(
            "   marker #{} anchor now at x {:.1}, y {:.1}",
            position.index,
            position.rect.min.x + position.rect.width() / 2.0,
            position.rect.bottom(),
        );
    }

    Ok(())
}
