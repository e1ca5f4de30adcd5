//! Engine state machine.
//!
//! All mutations happen on the control thread through the methods below and
//! are written through to the settings store immediately. Geometry is
//! republished whenever anything it depends on changes.

use std::sync::Arc;

use super::{DisplayLayout, PermissionProbe};
use crate::error::EngineError;
use crate::geometry::GeometrySnapshot;
use crate::interceptor::{EventInterceptor, EventTap};
use crate::model::{AllowedDisplaySet, DisplayId, EngineState, OverrideModifier, ScreenLayout};
use crate::storage::{self, SettingsStore};

/// Owner of [`EngineState`] and of the event interceptor.
pub struct EngineController<S, L, T, P>
where
    S: SettingsStore,
    L: DisplayLayout,
    T: EventTap,
    P: PermissionProbe,
{
    state: EngineState,
    settings: S,
    layout: L,
    permission: P,
    interceptor: EventInterceptor<T>,
}

impl<S, L, T, P> EngineController<S, L, T, P>
where
    S: SettingsStore,
    L: DisplayLayout,
    T: EventTap,
    P: PermissionProbe,
{
    /// Create a disabled engine with default state. Call
    /// [`restore_state`](Self::restore_state) to load the stored record.
    pub fn new(settings: S, layout: L, tap: T, permission: P) -> Self {
        Self {
            state: EngineState::default(),
            settings,
            layout,
            permission,
            interceptor: EventInterceptor::new(tap),
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled
    }

    pub fn allowed_displays(&self) -> &AllowedDisplaySet {
        &self.state.allowed_displays
    }

    pub fn override_modifier(&self) -> OverrideModifier {
        self.state.override_modifier
    }

    pub fn interceptor(&self) -> &EventInterceptor<T> {
        &self.interceptor
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Geometry currently seen by the tap callback.
    pub fn snapshot(&self) -> Arc<GeometrySnapshot> {
        self.interceptor.context().geometry().snapshot()
    }

    /// Whether input monitoring is granted, without prompting.
    pub fn permission_granted(&self) -> bool {
        self.permission.is_granted()
    }

    /// Start clamping. Returns `false` if the engine could not be enabled;
    /// when the tap was refused the user is prompted for permission.
    pub fn enable(&mut self) -> bool {
        match self.try_enable() {
            Ok(()) => true,
            Err(EngineError::PermissionDenied) => {
                tracing::warn!("event tap refused, asking for Accessibility permission");
                self.permission.request();
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not enable clamping");
                false
            }
        }
    }

    /// [`enable`](Self::enable) with the failure reason and without the
    /// permission prompt.
    pub fn try_enable(&mut self) -> Result<(), EngineError> {
        if self.state.is_enabled {
            return Ok(());
        }

        let layout = self.layout.current();
        let dropped = self.state.retain_connected(&layout.ids());
        if dropped > 0 {
            tracing::debug!(dropped, "ignoring allowed displays that are not connected");
        }
        let mut seeded = None;
        if self.state.allowed_displays.is_empty() {
            if let Some(host) = layout.dock_host() {
                tracing::info!(display = host.0, "no display selected, allowing the current Dock host");
                self.state.allowed_displays.insert(host);
                seeded = Some(host);
            }
        }
        if self.state.allowed_displays.is_empty() {
            return Err(EngineError::ValidationRejected);
        }

        self.publish_geometry(&layout);
        if let Err(e) = self.interceptor.install() {
            if let Some(host) = seeded {
                self.state.allowed_displays.remove(&host);
            }
            return Err(e);
        }
        self.state.is_enabled = true;
        tracing::info!(allowed = ?self.state.allowed_displays, "clamping enabled");
        self.persist_logged();
        Ok(())
    }

    /// Stop clamping. No-op if already disabled.
    pub fn disable(&mut self) {
        if !self.state.is_enabled {
            return;
        }
        self.state.is_enabled = false;
        self.interceptor.remove();
        tracing::info!("clamping disabled");
        self.persist_logged();
    }

    /// Replace the allowed set. Rejected if it would be empty while enabled.
    pub fn set_allowed_displays(&mut self, displays: AllowedDisplaySet) -> Result<(), EngineError> {
        if displays.is_empty() && self.state.is_enabled {
            tracing::warn!("refusing to clear the allowed displays while enabled");
            return Err(EngineError::ValidationRejected);
        }
        self.state.allowed_displays = displays;
        self.persist_logged();
        if self.state.is_enabled {
            self.refresh_geometry();
        }
        Ok(())
    }

    /// Add `id` to the allowed set, or remove it if present.
    pub fn toggle_allowed_display(&mut self, id: DisplayId) -> Result<(), EngineError> {
        let mut next = self.state.allowed_displays.clone();
        if !next.remove(&id) {
            next.insert(id);
        }
        self.set_allowed_displays(next)
    }

    /// Change the bypass modifier and republish the resolved flag.
    pub fn set_override_modifier(&mut self, modifier: OverrideModifier) {
        self.state.override_modifier = modifier;
        self.persist_logged();
        self.refresh_geometry();
    }

    /// React to displays being connected, disconnected or rearranged.
    ///
    /// Allowed ids that are no longer connected are dropped. If that leaves
    /// an enabled engine with nothing allowed, the display now hosting the
    /// Dock is allowed instead; failing that the engine disables itself.
    pub fn on_display_configuration_changed(&mut self) {
        let layout = self.layout.current();
        let dropped = self.state.retain_connected(&layout.ids());
        if dropped > 0 {
            tracing::debug!(dropped, "forgot displays that are no longer connected");
        }

        self.follow_dock_if_nothing_allowed(&layout);
        self.persist_logged();
        if self.state.is_enabled {
            self.publish_geometry(&layout);
        }
    }

    /// Load the stored record and resume clamping if it says enabled.
    ///
    /// If resuming fails (typically missing permission) the stored record is
    /// left as it was, so the next launch tries again.
    pub fn restore_state(&mut self) {
        let stored = storage::load_state(&self.settings);
        let layout = self.layout.current();

        self.state.allowed_displays = stored.allowed_displays;
        self.state.override_modifier = stored.override_modifier;
        let dropped = self.state.retain_connected(&layout.ids());
        tracing::info!(
            enabled = stored.is_enabled,
            allowed = ?self.state.allowed_displays,
            modifier = ?self.state.override_modifier,
            dropped,
            "restored engine state"
        );

        if stored.is_enabled {
            if self.state.is_enabled {
                self.follow_dock_if_nothing_allowed(&layout);
                self.persist_logged();
                if self.state.is_enabled {
                    self.publish_geometry(&layout);
                }
            } else if let Err(e) = self.try_enable() {
                tracing::warn!(error = %e, "could not resume clamping");
            }
        } else if self.state.is_enabled {
            self.state.is_enabled = false;
            self.interceptor.remove();
        }
    }

    /// Write the current record to the settings store.
    pub fn persist_state(&mut self) -> Result<(), EngineError> {
        storage::save_state(&mut self.settings, &self.state)
    }

    /// Display that currently shows a bottom Dock, if any.
    pub fn current_dock_host_display(&self) -> Option<DisplayId> {
        self.layout.current().dock_host()
    }

    /// Turn the tap back on after the system may have dropped it.
    pub fn rearm(&mut self) {
        if self.state.is_enabled {
            self.interceptor.rearm();
        }
    }

    /// Release the tap before the process exits. The stored record is not
    /// touched, so an enabled engine resumes on the next launch.
    pub fn shutdown(&mut self) {
        self.interceptor.remove();
        self.state.is_enabled = false;
    }

    /// Keep an enabled engine from running with nothing allowed: allow the
    /// display now hosting the Dock, or disable if there is none.
    fn follow_dock_if_nothing_allowed(&mut self, layout: &ScreenLayout) {
        if !self.state.is_enabled || !self.state.allowed_displays.is_empty() {
            return;
        }
        match layout.dock_host() {
            Some(host) => {
                tracing::info!(display = host.0, "allowed displays gone, following the Dock");
                self.state.allowed_displays.insert(host);
            }
            None => {
                tracing::warn!("no allowed display is connected, disabling clamping");
                self.state.is_enabled = false;
                self.interceptor.remove();
            }
        }
    }

    fn refresh_geometry(&self) {
        let layout = self.layout.current();
        self.publish_geometry(&layout);
    }

    fn publish_geometry(&self, layout: &ScreenLayout) {
        self.interceptor.context().geometry().refresh(
            &self.state.allowed_displays,
            layout,
            self.state.override_modifier,
        );
    }

    fn persist_logged(&mut self) {
        if let Err(e) = self.persist_state() {
            tracing::warn!(error = %e, "failed to persist engine state");
        }
    }
}
