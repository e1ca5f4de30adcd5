//! Public engine surface.
//!
//! [`EngineController`] owns the engine state and orchestrates geometry,
//! interception and persistence. Display enumeration and permission checks
//! are injected through the traits below so the controller stays free of
//! platform code.

pub mod controller;

pub use controller::EngineController;

use crate::model::ScreenLayout;

/// Source of the current display configuration.
pub trait DisplayLayout {
    fn current(&self) -> ScreenLayout;
}

/// Input-monitoring capability check.
pub trait PermissionProbe {
    /// Whether the capability is granted right now. Never prompts.
    fn is_granted(&self) -> bool;

    /// Whether the capability is granted, asking the OS to prompt the user
    /// if it is not.
    fn request(&self) -> bool;
}
