//! Blocked-region geometry.
//!
//! Converts the display layout (bottom-left origin, Y up) into the regions
//! the event tap must guard (top-left origin of the primary display, Y down):
//!
//! ```text
//! bottom_edge_y = primary_height - frame.min_y
//! ```

pub mod cache;

pub use cache::GeometryCache;

use crate::model::{AllowedDisplaySet, ModifierFlags, ScreenLayout};

/// Bottom strip of a display on which the Dock must not be revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockedRegion {
    pub left_edge: f64,
    pub right_edge: f64,
    /// Bottom edge in event coordinates.
    pub bottom_edge_y: f64,
}

/// Immutable view consumed by the tap callback.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometrySnapshot {
    pub regions: Vec<BlockedRegion>,
    /// Flag that bypasses clamping, `None` if bypass is off.
    pub override_flag: Option<ModifierFlags>,
}

impl GeometrySnapshot {
    pub fn new(regions: Vec<BlockedRegion>, override_flag: Option<ModifierFlags>) -> Self {
        Self {
            regions,
            override_flag,
        }
    }
}

/// One region per connected display that is not allowed.
pub fn recompute(allowed: &AllowedDisplaySet, layout: &ScreenLayout) -> Vec<BlockedRegion> {
    layout
        .displays
        .iter()
        .filter(|d| !allowed.contains(&d.id))
        .map(|d| BlockedRegion {
            left_edge: d.frame.min_x(),
            right_edge: d.frame.max_x(),
            bottom_edge_y: layout.primary_height - d.frame.min_y(),
        })
        .collect()
}
