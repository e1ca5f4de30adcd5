//! Lock-free publication of the geometry snapshot.
//!
//! The control thread replaces the whole snapshot with `store`; the tap
//! callback reads it with `load`. A reader holds either the previous or the
//! next `Arc`, never a list under construction.

use std::sync::Arc;

use arc_swap::{ArcSwap, Guard};

use super::{recompute, GeometrySnapshot};
use crate::model::{AllowedDisplaySet, OverrideModifier, ScreenLayout};

/// Holder of the currently published [`GeometrySnapshot`].
pub struct GeometryCache {
    current: ArcSwap<GeometrySnapshot>,
}

impl GeometryCache {
    /// Create a cache publishing an empty snapshot.
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(GeometrySnapshot::default()),
        }
    }

    /// Recompute blocked regions and publish them with the resolved override flag.
    pub fn refresh(
        &self,
        allowed: &AllowedDisplaySet,
        layout: &ScreenLayout,
        modifier: OverrideModifier,
    ) -> Arc<GeometrySnapshot> {
        let snapshot = Arc::new(GeometrySnapshot::new(
            recompute(allowed, layout),
            modifier.flag(),
        ));
        self.current.store(Arc::clone(&snapshot));
        tracing::debug!(
            regions = snapshot.regions.len(),
            bypass = ?modifier,
            "published geometry snapshot"
        );
        snapshot
    }

    /// Replace the published snapshot.
    pub fn publish(&self, snapshot: GeometrySnapshot) {
        self.current.store(Arc::new(snapshot));
    }

    /// Current snapshot. Wait-free; safe to call from the tap callback.
    pub fn load(&self) -> Guard<Arc<GeometrySnapshot>> {
        self.current.load()
    }

    /// Owned handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<GeometrySnapshot> {
        self.current.load_full()
    }
}

impl Default for GeometryCache {
    fn default() -> Self {
        Self::new()
    }
}
