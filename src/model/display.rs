//! Display identifiers and layout geometry.
//!
//! Frames are expressed in window-layout space: origin at the bottom-left
//! corner of the primary display, Y increasing upward.

use std::collections::BTreeSet;

use super::constants::DOCK_GAP_THRESHOLD;

/// Identifier of a connected display (a `CGDirectDisplayID` on macOS).
///
/// Only stable within one display-configuration epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayId(pub u32);

/// The set of displays on which the Dock may appear.
pub type AllowedDisplaySet = BTreeSet<DisplayId>;

/// A point in event-coordinate space (origin top-left of primary, Y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }
}

/// One connected display as reported by the layout collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayInfo {
    pub id: DisplayId,
    /// Full frame.
    pub frame: Rect,
    /// Frame minus menu bar and Dock.
    pub visible_frame: Rect,
}

impl DisplayInfo {
    /// True if the visible frame leaves a bottom gap large enough for a Dock.
    pub fn hosts_bottom_dock(&self) -> bool {
        self.visible_frame.min_y() - self.frame.min_y() > DOCK_GAP_THRESHOLD
    }
}

/// Snapshot of the current display configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenLayout {
    pub displays: Vec<DisplayInfo>,
    /// Height of the primary display, anchoring event coordinates.
    pub primary_height: f64,
}

impl ScreenLayout {
    /// Identifiers of every connected display.
    pub fn ids(&self) -> AllowedDisplaySet {
        self.displays.iter().map(|d| d.id).collect()
    }

    /// First display that appears to host a bottom Dock.
    pub fn dock_host(&self) -> Option<DisplayId> {
        self.displays
            .iter()
            .find(|d| d.hosts_bottom_dock())
            .map(|d| d.id)
    }
}
