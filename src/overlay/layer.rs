use crate::{
    core::{
        geo::{LatLngBounds, Point},
        viewport::ViewportBounds,
    },
    input::{
        events::{EventManager, OverlayEvent},
        hit::{self, HitConfig},
        tracker::TapTracker,
    },
    overlay::{
        marker::MarkerSpec,
        position::{compute_positions, PositionedMarker},
        provider::{BoundsProvider, DetachedProvider},
    },
    Result,
};
use std::sync::Arc;

/// Callback invoked when a tap resolves to a marker
pub type TouchCallback<T> = Box<dyn Fn(&T, usize) + Send + Sync>;

/// The marker-overlay component. Holds the marker list, a single cache
/// slot for the latest viewport measurement, and the pixel positions
/// derived from the two; drives tap resolution against those positions.
///
/// Everything is synchronous and single-threaded, reacting to host UI
/// events. Only the measurement round trip may be asynchronous; while one
/// is in flight the previous positions remain valid and are used for any
/// tap that arrives first. A superseded measurement simply overwrites the
/// cached bounds when it lands (last write wins) — hosts that can trigger
/// overlapping measurements should debounce at the event source.
pub struct MarkerOverlay<T> {
    markers: Vec<MarkerSpec<T>>,
    bounds: Option<ViewportBounds>,
    positions: Vec<PositionedMarker>,
    tracker: TapTracker,
    hit_config: HitConfig,
    events: EventManager,
    on_touch: Option<TouchCallback<T>>,
    external_provider: Option<Arc<dyn BoundsProvider>>,
    fallback_provider: Arc<dyn BoundsProvider>,
}

impl<T> MarkerOverlay<T> {
    /// Creates an overlay that owns its (inert) measurement fallback; until
    /// a provider is attached or bounds are pushed, every tap resolves to
    /// no marker.
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            bounds: None,
            positions: Vec::new(),
            tracker: TapTracker::new(),
            hit_config: HitConfig::default(),
            events: EventManager::new(),
            on_touch: None,
            external_provider: None,
            fallback_provider: Arc::new(DetachedProvider),
        }
    }

    /// Creates an overlay measured through an externally owned provider
    pub fn with_provider(provider: Arc<dyn BoundsProvider>) -> Self {
        let mut overlay = Self::new();
        overlay.external_provider = Some(provider);
        overlay
    }

    /// Attaches or replaces the external measurement provider
    pub fn set_provider(&mut self, provider: Arc<dyn BoundsProvider>) {
        self.external_provider = Some(provider);
    }

    /// The active provider: the external one if attached, otherwise the
    /// internally owned fallback
    fn provider(&self) -> Arc<dyn BoundsProvider> {
        self.external_provider
            .clone()
            .unwrap_or_else(|| self.fallback_provider.clone())
    }

    /// Replaces the marker list wholesale and recomputes positions under
    /// the cached viewport, if one has been measured
    pub fn set_markers(&mut self, markers: Vec<MarkerSpec<T>>) {
        self.markers = markers;
        match self.bounds {
            Some(bounds) => self.recompute(bounds),
            None => self.positions.clear(),
        }
    }

    pub fn markers(&self) -> &[MarkerSpec<T>] {
        &self.markers
    }

    /// The current derived positions; empty until a viewport measurement
    /// has been applied
    pub fn positions(&self) -> &[PositionedMarker] {
        &self.positions
    }

    /// The cached viewport measurement, if any
    pub fn viewport(&self) -> Option<&ViewportBounds> {
        self.bounds.as_ref()
    }

    pub fn hit_config(&self) -> &HitConfig {
        &self.hit_config
    }

    pub fn set_hit_config(&mut self, config: HitConfig) {
        self.hit_config = config;
    }

    /// Sets the callback invoked when a tap lands on a marker. Policy: the
    /// callback fires only on a hit; a miss or a pan does not invoke it.
    pub fn on_touch<F>(&mut self, callback: F)
    where
        F: Fn(&T, usize) + Send + Sync + 'static,
    {
        self.on_touch = Some(Box::new(callback));
    }

    /// Registers a listener for forwarded overlay events
    /// ("ready", "regionchanged", "tapped")
    pub fn on<F>(&mut self, event_type: &str, callback: F)
    where
        F: Fn(&OverlayEvent) + Send + Sync + 'static,
    {
        self.events.on(event_type, callback);
    }

    /// Drains queued events through their listeners
    pub fn process_events(&mut self) -> Vec<OverlayEvent> {
        self.events.process_events()
    }

    /// Host callback for the map's initial layout. Applies the measurement,
    /// then forwards `Ready` so listeners observe recomputed positions.
    pub fn map_ready(&mut self, bounds: ViewportBounds) {
        self.apply_bounds(bounds);
        self.events.emit(OverlayEvent::Ready { bounds });
    }

    /// Host callback for a completed pan/zoom. Applies the measurement,
    /// then forwards `RegionChanged`.
    pub fn region_changed(&mut self, bounds: ViewportBounds) {
        self.apply_bounds(bounds);
        self.events.emit(OverlayEvent::RegionChanged { bounds });
    }

    /// Queries the active provider and applies the measurement. On failure
    /// the last-known-good bounds and positions are retained and the error
    /// is propagated after logging; a never-measured overlay just keeps
    /// resolving every tap to no marker.
    pub async fn refresh(&mut self) -> Result<()> {
        let provider = self.provider();
        match provider.measure().await {
            Ok(bounds) => {
                self.apply_bounds(bounds);
                Ok(())
            }
            Err(err) => {
                log::warn!("viewport measurement failed, keeping previous positions: {err}");
                Err(err)
            }
        }
    }

    /// Blocking convenience for hosts with a synchronous event loop
    pub fn refresh_blocking(&mut self) -> Result<()> {
        futures::executor::block_on(self.refresh())
    }

    fn apply_bounds(&mut self, bounds: ViewportBounds) {
        self.recompute(bounds);
    }

    fn recompute(&mut self, bounds: ViewportBounds) {
        match compute_positions(&bounds, &self.markers) {
            Ok(positions) => {
                self.positions = positions;
                self.bounds = Some(bounds);
            }
            Err(err) => {
                // Keep the last-known-good bounds and positions.
                log::warn!("skipping recompute under invalid viewport: {err}");
            }
        }
    }

    /// Host callback for press-down; records where the interaction started
    pub fn press_in(&mut self, position: Point) {
        self.tracker.press_in(position);
    }

    /// Host callback for press-release. Resolves the completed tap against
    /// the cached positions. On a hit, emits `Tapped`, invokes the touch
    /// callback with the marker's payload and original index, and returns
    /// them. On a miss or a pan, returns `None` and the touch callback is
    /// not invoked.
    pub fn press_release(&mut self, position: Point) -> Option<(&T, usize)> {
        let tap = self.tracker.press_release(position)?;
        let hit = hit::resolve(&tap, &self.positions, &self.hit_config)?;

        self.events.emit(OverlayEvent::Tapped { index: hit.index });

        let marker = &self.markers[hit.index];
        if let Some(callback) = &self.on_touch {
            callback(&marker.payload, hit.index);
        }
        Some((&marker.payload, hit.index))
    }

    /// Geographic extent of all marker anchors, for hosts that want to fit
    /// the map view to the marker set
    pub fn markers_bounds(&self) -> Option<LatLngBounds> {
        let mut markers = self.markers.iter();
        let first = markers.next()?;
        let mut bounds = LatLngBounds::new(first.anchor, first.anchor);
        for marker in markers {
            bounds.extend(&marker.anchor);
        }
        Some(bounds)
    }
}

impl<T> Default for MarkerOverlay<T> {
    fn default() -> Self {
        Self::new()
    }
}
