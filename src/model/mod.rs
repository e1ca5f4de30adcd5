//! Application domain model.
//!
//! This module contains pure data types (no FFI dependencies): the engine
//! state record, display geometry, the override modifier and the tuned
//! constants.
//!
//! Platform-specific persistence is in `platform::macos::storage`.

pub mod app_state;
pub mod constants;
pub mod display;
pub mod modifier;

pub use app_state::EngineState;
pub use constants::*;
pub use display::{AllowedDisplaySet, DisplayId, DisplayInfo, Point, Rect, ScreenLayout};
pub use modifier::{ModifierFlags, OverrideModifier};
