//! Cocoa helpers for reading screen properties.

use objc2_core_foundation::CGRect;

use super::bridge::{id, msg_send, nil, nsstring};
use crate::model::{DisplayId, Rect};

/// CGDirectDisplayID of an NSScreen, or `None` when the screen does not
/// report one.
///
/// # Safety
/// `screen` must be a valid NSScreen pointer.
pub unsafe fn display_id_for_screen(screen: id) -> Option<DisplayId> {
    let desc: id = msg_send![screen, deviceDescription];
    if desc == nil {
        return None;
    }
    let key = nsstring("NSScreenNumber");
    let num: id = msg_send![desc, objectForKey: &*key];
    if num == nil {
        None
    } else {
        let v: u32 = msg_send![num, unsignedIntValue];
        Some(DisplayId(v))
    }
}

/// Full frame of an NSScreen in global Cocoa coordinates.
///
/// # Safety
/// `screen` must be a valid NSScreen pointer.
pub unsafe fn screen_frame(screen: id) -> Rect {
    let frame: CGRect = msg_send![screen, frame];
    rect_from_cg(frame)
}

/// Frame of an NSScreen minus the menu bar and the Dock.
///
/// # Safety
/// `screen` must be a valid NSScreen pointer.
pub unsafe fn screen_visible_frame(screen: id) -> Rect {
    let frame: CGRect = msg_send![screen, visibleFrame];
    rect_from_cg(frame)
}

fn rect_from_cg(r: CGRect) -> Rect {
    Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height)
}
