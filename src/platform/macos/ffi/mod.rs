//! FFI bindings for macOS frameworks.
//!
//! This module encapsulates the `extern "C"` declarations the engine needs
//! from ApplicationServices, CoreGraphics, CoreFoundation and Cocoa.

pub mod accessibility;
pub mod bridge;
pub mod cocoa_utils;
pub mod coregraphics;

pub use accessibility::*;
pub use cocoa_utils::*;
pub use coregraphics::*;
