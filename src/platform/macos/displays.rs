//! Display layout from NSScreen.

use core_graphics::display::CGDisplay;

use super::ffi::bridge::{autoreleasepool, get_class, id, msg_send, nil};
use super::ffi::{display_id_for_screen, screen_frame, screen_visible_frame};
use crate::engine::DisplayLayout;
use crate::model::{DisplayInfo, ScreenLayout};

/// Reads the current configuration from `+[NSScreen screens]`.
///
/// Must be queried from the main thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenLayoutProvider;

impl DisplayLayout for ScreenLayoutProvider {
    fn current(&self) -> ScreenLayout {
        autoreleasepool(|_| unsafe {
            let screens: id = msg_send![get_class("NSScreen"), screens];
            let count: usize = if screens == nil {
                0
            } else {
                msg_send![screens, count]
            };

            let mut displays = Vec::with_capacity(count);
            for i in 0..count {
                let screen: id = msg_send![screens, objectAtIndex: i];
                let Some(display_id) = display_id_for_screen(screen) else {
                    tracing::debug!(index = i, "screen without a display number, skipped");
                    continue;
                };
                displays.push(DisplayInfo {
                    id: display_id,
                    frame: screen_frame(screen),
                    visible_frame: screen_visible_frame(screen),
                });
            }

            // The main display anchors both coordinate systems.
            let primary_height = CGDisplay::main().bounds().size.height;

            ScreenLayout {
                displays,
                primary_height,
            }
        })
    }
}
