//! Configuration constants and default values.
//!
//! This module contains the tuned clamping constants, NSUserDefaults keys
//! and the defaults used when a key has never been written.

// === Clamp Tuning ===

/// Height of the trigger band above a blocked display's bottom edge, in pixels.
///
/// Together with [`TRIGGER_BAND_BELOW`] this sits just outside the zone in
/// which macOS starts revealing the Dock.
pub const TRIGGER_BAND_ABOVE: f64 = 5.0;

/// Depth of the trigger band below a blocked display's bottom edge, in pixels.
pub const TRIGGER_BAND_BELOW: f64 = 2.0;

/// Distance above the bottom edge the cursor is moved to, in pixels.
pub const NUDGE_DISTANCE: f64 = 7.0;

// === Dock Detection ===

/// Minimum gap between a screen's frame and its visible frame (bottom side)
/// for the screen to be considered the current Dock host.
pub const DOCK_GAP_THRESHOLD: f64 = 10.0;

// === Keep-alive ===

/// Interval of the timer that re-enables the event tap, in seconds.
pub const KEEPALIVE_INTERVAL_SECS: f64 = 60.0;

// === NSUserDefaults Keys ===

/// Key for the list of allowed display identifiers.
pub const PREF_ALLOWED_DISPLAYS: &str = "allowedDisplays";

/// Key for the enabled flag.
pub const PREF_ENABLED: &str = "isEnabled";

/// Key for the override modifier code.
pub const PREF_OVERRIDE_MODIFIER: &str = "overrideModifier";

// === Defaults ===

/// Override modifier code used when none has been stored (Option/Alt).
pub const DEFAULT_OVERRIDE_CODE: i64 = 1;
