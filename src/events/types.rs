//! Application events for inter-module communication.
//!
//! These events are requests published by UI collaborators and system
//! observers and applied to the engine by the dispatcher.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

use crate::model::{DisplayId, OverrideModifier};

/// Application-level events for decoupled communication between modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === User Requests ===
    /// Start clamping
    Enable,

    /// Stop clamping
    Disable,

    /// Flip between enabled and disabled
    ToggleEnabled,

    /// Choose a different bypass modifier
    SetOverrideModifier(OverrideModifier),

    /// Allow or disallow the Dock on one display
    ToggleDisplay(DisplayId),

    // === System Events ===
    /// Displays were connected, disconnected or rearranged
    DisplayConfigurationChanged,

    /// The machine woke from sleep
    SystemWoke,

    /// Periodic tick asking to re-enable the tap
    KeepAlive,

    /// The application is terminating
    Shutdown,
}

impl AppEvent {
    /// Returns true if this event may change the persisted engine record.
    pub fn mutates_state(&self) -> bool {
        matches!(
            self,
            AppEvent::Enable
                | AppEvent::Disable
                | AppEvent::ToggleEnabled
                | AppEvent::SetOverrideModifier(_)
                | AppEvent::ToggleDisplay(_)
                | AppEvent::DisplayConfigurationChanged
        )
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::Enable => "Enable clamping",
            AppEvent::Disable => "Disable clamping",
            AppEvent::ToggleEnabled => "Toggle clamping",
            AppEvent::SetOverrideModifier(_) => "Change override modifier",
            AppEvent::ToggleDisplay(_) => "Toggle allowed display",
            AppEvent::DisplayConfigurationChanged => "Display configuration changed",
            AppEvent::SystemWoke => "System woke from sleep",
            AppEvent::KeepAlive => "Keep-alive tick",
            AppEvent::Shutdown => "Application terminating",
        }
    }
}
