//! Event dispatcher for applying application events to the engine.
//!
//! ```text
//! drain_events() → coalesce() → dispatch_pending() → dispatch_event() → EngineController
//! ```
//!
//! Runs on the main thread only; the engine is not shared with the tap
//! callback beyond its published snapshot.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::engine::{DisplayLayout, EngineController, PermissionProbe};
use crate::error::EngineError;
use crate::events::{coalesce, drain_events, AppEvent};
use crate::interceptor::EventTap;
use crate::storage::SettingsStore;

/// Guard against re-entrant dispatch.
///
/// An AppKit call made while handling one event can spin the run loop and
/// fire another observer, which would try to dispatch again.
static DISPATCH_GUARD: AtomicBool = AtomicBool::new(false);

/// Holds [`DISPATCH_GUARD`] and releases it on drop, unwinding included.
struct DispatchGuard;

impl DispatchGuard {
    fn acquire() -> Option<Self> {
        DISPATCH_GUARD
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| DispatchGuard)
    }
}

impl Drop for DispatchGuard {
    fn drop(&mut self) {
        DISPATCH_GUARD.store(false, Ordering::SeqCst);
    }
}

/// Apply one event. Only validation failures are returned; everything else
/// is handled (and logged) by the engine itself.
pub fn dispatch_event<S, L, T, P>(
    controller: &mut EngineController<S, L, T, P>,
    event: &AppEvent,
) -> Result<(), EngineError>
where
    S: SettingsStore,
    L: DisplayLayout,
    T: EventTap,
    P: PermissionProbe,
{
    tracing::trace!(
        event = event.description(),
        mutates = event.mutates_state(),
        "dispatching"
    );
    match event {
        AppEvent::Enable => {
            controller.enable();
        }
        AppEvent::Disable => controller.disable(),
        AppEvent::ToggleEnabled => {
            if controller.is_enabled() {
                controller.disable();
            } else {
                controller.enable();
            }
        }
        AppEvent::SetOverrideModifier(modifier) => controller.set_override_modifier(*modifier),
        AppEvent::ToggleDisplay(id) => controller.toggle_allowed_display(*id)?,
        AppEvent::DisplayConfigurationChanged => controller.on_display_configuration_changed(),
        AppEvent::SystemWoke | AppEvent::KeepAlive => controller.rearm(),
        AppEvent::Shutdown => controller.shutdown(),
    }
    Ok(())
}

/// Apply events in order, logging rejected ones. Returns how many were
/// applied successfully.
pub fn dispatch_all<S, L, T, P, I>(controller: &mut EngineController<S, L, T, P>, events: I) -> usize
where
    S: SettingsStore,
    L: DisplayLayout,
    T: EventTap,
    P: PermissionProbe,
    I: IntoIterator<Item = AppEvent>,
{
    let mut applied = 0;
    for event in events {
        match dispatch_event(controller, &event) {
            Ok(()) => applied += 1,
            Err(e) => tracing::warn!(event = event.description(), error = %e, "event rejected"),
        }
    }
    applied
}

/// Drain the global bus and apply everything pending, with bursts of
/// identical system notifications collapsed.
///
/// Returns `None` if another dispatch is already running on this process.
pub fn dispatch_pending<S, L, T, P>(controller: &mut EngineController<S, L, T, P>) -> Option<usize>
where
    S: SettingsStore,
    L: DisplayLayout,
    T: EventTap,
    P: PermissionProbe,
{
    let _guard = DispatchGuard::acquire()?;
    Some(dispatch_all(controller, coalesce(drain_events())))
}
