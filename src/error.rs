//! Error types for the clamping engine.
//!
//! None of these are fatal: the engine always falls back to "disabled,
//! pass everything through". Tap suspension and stale display ids are
//! recovered silently and never surface as errors.

use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The OS refused to create the event tap (Accessibility not granted).
    #[error("event tap refused - grant access in System Settings > Privacy & Security > Accessibility")]
    PermissionDenied,

    /// The operation would leave no display able to host the Dock.
    #[error("at least one display must stay allowed while the engine is enabled")]
    ValidationRejected,

    /// The tap was created but could not be attached to the run loop.
    #[error("failed to attach the event tap to the main run loop")]
    RunLoopUnavailable,

    /// A setting could not be written.
    #[error("failed to persist setting `{key}`: {reason}")]
    Storage { key: String, reason: String },
}
