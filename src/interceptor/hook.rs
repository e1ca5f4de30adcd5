//! Hook lifecycle on top of an [`EventTap`] backend.

use std::sync::{Arc, Weak};

use super::context::TapContext;
use crate::error::EngineError;

/// OS-level pointer tap.
///
/// The backend owns the live registration (the hook handle) and must route
/// every delivered event through [`TapContext::handle`] on the context it was
/// given, acting on the returned verdict.
pub trait EventTap {
    /// Create, attach and enable the tap.
    ///
    /// Returns [`EngineError::PermissionDenied`] if the OS refuses it.
    fn install(&mut self, context: Weak<TapContext>) -> Result<(), EngineError>;

    /// Disable, detach and release the tap. Must be idempotent.
    fn remove(&mut self);

    /// Turn an installed tap back on. No-op when nothing is installed.
    fn reenable(&mut self);

    fn is_installed(&self) -> bool;
}

/// Lifecycle state of the hook as seen from the control thread.
///
/// Suspension is transient and resolved inside the callback, so it never
/// shows up here; see [`TapContext::suspension_count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookState {
    Uninstalled,
    Installed,
}

/// Owns the tap backend and the context its callback reads.
pub struct EventInterceptor<T: EventTap> {
    tap: T,
    context: Arc<TapContext>,
    state: HookState,
}

impl<T: EventTap> EventInterceptor<T> {
    pub fn new(tap: T) -> Self {
        Self {
            tap,
            context: Arc::new(TapContext::new()),
            state: HookState::Uninstalled,
        }
    }

    pub fn state(&self) -> HookState {
        self.state
    }

    pub fn is_installed(&self) -> bool {
        self.state == HookState::Installed
    }

    /// Shared context, for publishing geometry and for diagnostics.
    pub fn context(&self) -> &Arc<TapContext> {
        &self.context
    }

    pub fn tap(&self) -> &T {
        &self.tap
    }

    /// Install the tap and start clamping. No-op if already installed.
    pub fn install(&mut self) -> Result<(), EngineError> {
        if self.state == HookState::Installed {
            return Ok(());
        }
        self.tap.install(Arc::downgrade(&self.context))?;
        self.context.set_enabled(true);
        self.state = HookState::Installed;
        tracing::debug!("event tap installed");
        Ok(())
    }

    /// Stop clamping and release the tap. Safe to call repeatedly.
    ///
    /// The context is disabled before the tap goes away, so a callback that
    /// is still in flight after this returns passes its event through.
    pub fn remove(&mut self) {
        self.context.set_enabled(false);
        if self.state == HookState::Uninstalled && !self.tap.is_installed() {
            return;
        }
        self.tap.remove();
        self.state = HookState::Uninstalled;
        tracing::debug!("event tap removed");
    }

    /// Re-enable an installed tap (after wake or on keep-alive).
    pub fn rearm(&mut self) {
        if self.state == HookState::Installed {
            self.tap.reenable();
        }
    }
}

impl<T: EventTap> Drop for EventInterceptor<T> {
    fn drop(&mut self) {
        self.remove();
    }
}
