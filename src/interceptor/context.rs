//! State shared between the control thread and the tap callback.
//!
//! The interceptor owns the context through an `Arc`; the OS callback only
//! ever holds a `Weak`, so it can outlive neither the interceptor nor the
//! engine.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::geometry::GeometryCache;
use crate::model::{ModifierFlags, Point};
use crate::policy::{decide, Action};

/// Why the OS switched the tap off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspendReason {
    /// The callback took too long.
    Timeout,
    /// Secure input or a similar user-input heuristic.
    UserInput,
}

/// One event as seen by the tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapEvent {
    /// Mouse moved or dragged with any button.
    Motion { position: Point, flags: ModifierFlags },
    /// The OS disabled the tap.
    Suspended(SuspendReason),
    /// Anything else delivered to the tap.
    Other,
}

/// What the backend must do with the event it is holding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapVerdict {
    PassThrough,
    Reposition(Point),
    /// Turn the tap back on, then pass the event through.
    Reenable,
}

/// Enabled flag plus the published geometry.
#[derive(Default)]
pub struct TapContext {
    enabled: AtomicBool,
    geometry: GeometryCache,
    suspensions: AtomicU64,
}

impl TapContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn geometry(&self) -> &GeometryCache {
        &self.geometry
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub(crate) fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    /// How many times the OS suspended the tap since the context was created.
    pub fn suspension_count(&self) -> u64 {
        self.suspensions.load(Ordering::Relaxed)
    }

    /// Callback body. Runs on the OS input path: no locks, no I/O.
    pub fn handle(&self, event: TapEvent) -> TapVerdict {
        match event {
            TapEvent::Suspended(reason) => {
                let n = self.suspensions.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::debug!(?reason, count = n, "event tap suspended by the OS, re-enabling");
                TapVerdict::Reenable
            }
            TapEvent::Other => TapVerdict::PassThrough,
            TapEvent::Motion { position, flags } => {
                if !self.is_enabled() {
                    return TapVerdict::PassThrough;
                }
                match decide(position, flags, &self.geometry.load()) {
                    Action::PassThrough => TapVerdict::PassThrough,
                    Action::Reposition(p) => TapVerdict::Reposition(p),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{BlockedRegion, GeometrySnapshot};

    fn armed_context() -> TapContext {
        let ctx = TapContext::new();
        ctx.geometry().publish(GeometrySnapshot::new(
            vec![BlockedRegion {
                left_edge: 0.0,
                right_edge: 1920.0,
                bottom_edge_y: 1080.0,
            }],
            Some(ModifierFlags::ALTERNATE),
        ));
        ctx.set_enabled(true);
        ctx
    }

    fn motion(x: f64, y: f64, flags: ModifierFlags) -> TapEvent {
        TapEvent::Motion {
            position: Point::new(x, y),
            flags,
        }
    }

    #[test]
    fn disabled_context_passes_everything() {
        let ctx = armed_context();
        ctx.set_enabled(false);
        assert_eq!(
            ctx.handle(motion(500.0, 1078.0, ModifierFlags::NONE)),
            TapVerdict::PassThrough
        );
    }

    #[test]
    fn motion_in_band_is_repositioned() {
        let ctx = armed_context();
        assert_eq!(
            ctx.handle(motion(500.0, 1078.0, ModifierFlags::NONE)),
            TapVerdict::Reposition(Point::new(500.0, 1073.0))
        );
    }

    #[test]
    fn held_override_passes() {
        let ctx = armed_context();
        assert_eq!(
            ctx.handle(motion(500.0, 1078.0, ModifierFlags::ALTERNATE)),
            TapVerdict::PassThrough
        );
    }

    #[test]
    fn suspension_asks_for_reenable_and_is_counted() {
        let ctx = armed_context();
        assert_eq!(
            ctx.handle(TapEvent::Suspended(SuspendReason::Timeout)),
            TapVerdict::Reenable
        );
        assert_eq!(
            ctx.handle(TapEvent::Suspended(SuspendReason::UserInput)),
            TapVerdict::Reenable
        );
        assert_eq!(ctx.suspension_count(), 2);
    }

    #[test]
    fn suspension_reenables_even_while_disabled() {
        let ctx = TapContext::new();
        assert_eq!(
            ctx.handle(TapEvent::Suspended(SuspendReason::Timeout)),
            TapVerdict::Reenable
        );
    }

    #[test]
    fn other_events_pass() {
        let ctx = armed_context();
        assert_eq!(ctx.handle(TapEvent::Other), TapVerdict::PassThrough);
    }
}
