//! Per-event clamp decision.
//!
//! Pure function of the pointer position, the held modifiers and the
//! published snapshot. The caller is responsible for skipping this entirely
//! while the engine is disabled.

use crate::geometry::GeometrySnapshot;
use crate::model::{ModifierFlags, Point, NUDGE_DISTANCE, TRIGGER_BAND_ABOVE, TRIGGER_BAND_BELOW};

/// What to do with one pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Deliver the event unchanged.
    PassThrough,
    /// Deliver the event with the cursor moved to this position.
    Reposition(Point),
}

/// Decide whether the event at `position` must be pulled out of a Dock
/// trigger band.
pub fn decide(position: Point, flags: ModifierFlags, snapshot: &GeometrySnapshot) -> Action {
    if let Some(bypass) = snapshot.override_flag {
        if flags.contains(bypass) {
            return Action::PassThrough;
        }
    }

    for r in &snapshot.regions {
        if position.x < r.left_edge || position.x >= r.right_edge {
            continue;
        }
        if position.y >= r.bottom_edge_y - TRIGGER_BAND_ABOVE
            && position.y <= r.bottom_edge_y + TRIGGER_BAND_BELOW
        {
            return Action::Reposition(Point::new(position.x, r.bottom_edge_y - NUDGE_DISTANCE));
        }
    }

    Action::PassThrough
}
