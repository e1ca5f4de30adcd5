//! macOS backends for the engine's collaborator traits.
//!
//! | trait             | backend                   |
//! |-------------------|---------------------------|
//! | `EventTap`        | [`CoreGraphicsTap`]       |
//! | `DisplayLayout`   | [`ScreenLayoutProvider`]  |
//! | `SettingsStore`   | [`UserDefaultsStore`]     |
//! | `PermissionProbe` | [`AccessibilityPermission`] |

pub mod displays;
pub mod ffi;
pub mod input;
pub mod storage;
pub mod tap;

pub use displays::ScreenLayoutProvider;
pub use ffi::accessibility::AccessibilityPermission;
pub use ffi::bridge;
pub use storage::UserDefaultsStore;
pub use tap::CoreGraphicsTap;
