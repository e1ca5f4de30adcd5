//! Thin aliases over `objc2` for message-send heavy code.
//!
//! The platform layer talks to AppKit and Foundation mostly through
//! `msg_send!` on untyped objects; these aliases keep that code short.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

pub use objc2::rc::{autoreleasepool, Retained};
pub use objc2::runtime::{AnyClass, AnyObject, Bool};
pub use objc2::{msg_send, ClassType};

pub use objc2_app_kit::NSApplication;
pub use objc2_foundation::NSString;

pub use block2::RcBlock;

/// Untyped Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES` (a `BOOL`, not a Rust `bool`).
pub const YES: Bool = Bool::YES;

/// The shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Get a class by name, panicking if not found.
///
/// Only used for Foundation and AppKit classes, which are always
/// registered once AppKit is linked.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = std::ffi::CString::new(name).unwrap_or_default();
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}
