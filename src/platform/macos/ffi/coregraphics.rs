//! FFI bindings for CoreGraphics and CoreFoundation.
//!
//! The `core-graphics` crate owns the tap itself; these are the calls it
//! does not expose on a raw mach port.

use std::ffi::c_void;

// === FFI Declarations - CoreGraphics ===

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    pub fn CGEventTapEnable(tap: *mut c_void, enable: bool);

    pub fn CGEventTapIsEnabled(tap: *mut c_void) -> bool;
}

// === FFI Declarations - CoreFoundation ===

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    pub fn CFRelease(obj: *const c_void);

    pub fn CFMachPortInvalidate(port: *mut c_void);

    pub fn CFDictionaryCreate(
        allocator: *const c_void,
        keys: *const *const c_void,
        values: *const *const c_void,
        numValues: isize,
        keyCallBacks: *const c_void,
        valueCallBacks: *const c_void,
    ) -> *const c_void;

    pub static kCFBooleanTrue: *const c_void;
    pub static kCFTypeDictionaryKeyCallBacks: *const c_void;
    pub static kCFTypeDictionaryValueCallBacks: *const c_void;
}
