//! Engine state (pure Rust, no FFI).
//!
//! This module defines the persisted engine record that is serialized
//! to/from NSUserDefaults.

use super::display::{AllowedDisplaySet, DisplayId};
use super::modifier::OverrideModifier;

/// Complete engine state, the only data that survives a restart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineState {
    /// Is clamping active?
    pub is_enabled: bool,
    /// Displays on which the Dock may appear.
    pub allowed_displays: AllowedDisplaySet,
    /// Modifier that bypasses clamping while held.
    pub override_modifier: OverrideModifier,
}

impl EngineState {
    /// Allowed display ids as persisted integers, in ascending order.
    pub fn allowed_codes(&self) -> Vec<i64> {
        self.allowed_displays
            .iter()
            .map(|id| i64::from(id.0))
            .collect()
    }

    /// Decode persisted integers, skipping values that are not valid ids.
    pub fn allowed_from_codes(codes: &[i64]) -> AllowedDisplaySet {
        codes
            .iter()
            .filter_map(|&c| u32::try_from(c).ok())
            .map(DisplayId)
            .collect()
    }

    /// Drop allowed ids that are not in `connected`. Returns how many were dropped.
    pub fn retain_connected(&mut self, connected: &AllowedDisplaySet) -> usize {
        let before = self.allowed_displays.len();
        self.allowed_displays.retain(|id| connected.contains(id));
        before - self.allowed_displays.len()
    }
}
