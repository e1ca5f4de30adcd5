//! FFI bindings for ApplicationServices (Accessibility).
//!
//! An active event tap that rewrites cursor positions needs the process to
//! be trusted for Accessibility. [`AccessibilityPermission`] is the engine's
//! view of that TCC entry.

use std::ffi::c_void;

use super::coregraphics::{
    kCFBooleanTrue, kCFTypeDictionaryKeyCallBacks, kCFTypeDictionaryValueCallBacks,
    CFDictionaryCreate, CFRelease,
};
use crate::engine::PermissionProbe;

// === FFI Declarations ===

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    pub fn AXIsProcessTrusted() -> bool;

    pub fn AXIsProcessTrustedWithOptions(options: *const c_void) -> bool;

    pub static kAXTrustedCheckOptionPrompt: *const c_void;
}

/// Ask for Accessibility trust, showing the system prompt if the process is
/// not trusted yet. Returns whether it is trusted right now.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn accessibility_prompt() -> bool {
    let keys = [kAXTrustedCheckOptionPrompt];
    let values = [kCFBooleanTrue];

    let dict = CFDictionaryCreate(
        std::ptr::null(),
        keys.as_ptr(),
        values.as_ptr(),
        1,
        kCFTypeDictionaryKeyCallBacks,
        kCFTypeDictionaryValueCallBacks,
    );

    let trusted = AXIsProcessTrustedWithOptions(dict);

    if !dict.is_null() {
        CFRelease(dict);
    }
    trusted
}

/// Accessibility trust as seen by the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessibilityPermission;

impl PermissionProbe for AccessibilityPermission {
    fn is_granted(&self) -> bool {
        unsafe { AXIsProcessTrusted() }
    }

    fn request(&self) -> bool {
        let trusted = unsafe { accessibility_prompt() };
        if !trusted {
            tracing::info!("requested Accessibility access");
        }
        trusted
    }
}
