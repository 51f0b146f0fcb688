use crate::{core::viewport::ViewportBounds, OverlayError, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// The viewport-measurement boundary. After any map-ready or
/// region-change-complete event the host resolves a fresh description of
/// the viewport: its pixel dimensions plus the geographic south-west corner
/// and longitude span. How that is obtained (native measurement call, map
/// widget boundary query) is the host's business; the round trip may be
/// asynchronous, during which previously computed positions stay in use.
#[async_trait]
pub trait BoundsProvider: Send + Sync {
    async fn measure(&self) -> Result<ViewportBounds>;
}

/// Provider backed by a stored bounds value, for hosts whose measurement is
/// synchronous (and for tests). `set` models a completed re-measurement;
/// the last write wins.
pub struct FixedBoundsProvider {
    bounds: Mutex<ViewportBounds>,
}

impl FixedBoundsProvider {
    pub fn new(bounds: ViewportBounds) -> Self {
        Self {
            bounds: Mutex::new(bounds),
        }
    }

    pub fn set(&self, bounds: ViewportBounds) {
        *self.bounds.lock().unwrap_or_else(|e| e.into_inner()) = bounds;
    }
}

#[async_trait]
impl BoundsProvider for FixedBoundsProvider {
    async fn measure(&self) -> Result<ViewportBounds> {
        Ok(*self.bounds.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

/// The overlay's internally owned fallback when no external provider is
/// attached. It never resolves a measurement, so positions stay empty and
/// every tap resolves to no marker.
pub(crate) struct DetachedProvider;

#[async_trait]
impl BoundsProvider for DetachedProvider {
    async fn measure(&self) -> Result<ViewportBounds> {
        Err(OverlayError::Measurement("no map widget attached".to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use futures::executor::block_on;

    #[test]
    fn test_fixed_provider_returns_latest_write() {
        let first = ViewportBounds::new(300.0, 300.0, LatLng::default(), 10.0).unwrap();
        let second = ViewportBounds::new(600.0, 400.0, LatLng::new(10.0, 20.0), 5.0).unwrap();

        let provider = FixedBoundsProvider::new(first);
        assert_eq!(block_on(provider.measure()).unwrap(), first);

        provider.set(second);
        assert_eq!(block_on(provider.measure()).unwrap(), second);
    }

    #[test]
    fn test_detached_provider_never_measures() {
        assert!(block_on(DetachedProvider.measure()).is_err());
    }
}
