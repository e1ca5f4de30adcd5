//! Platform-specific implementations.
//!
//! Only macOS has a Dock to confine. Its submodule provides:
//! - FFI bindings (Accessibility, CoreGraphics, Cocoa helpers)
//! - the Quartz event tap backend
//! - the NSScreen display layout
//! - NSUserDefaults storage
//! - system observers that feed the event bus

pub mod macos;
