//! Quartz event tap backend.
//!
//! An active session tap placed at the head of the queue, listening for
//! pointer motion and drags. The callback runs on the main run loop and only
//! reads the [`TapContext`] it was handed; it never touches the engine.

use std::ffi::c_void;
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::{Arc, Weak};

use core_foundation::base::TCFType;
use core_foundation::runloop::{kCFRunLoopCommonModes, CFRunLoop, CFRunLoopSource};
use core_graphics::event::{
    CGEvent, CGEventTap, CGEventTapLocation, CGEventTapOptions, CGEventTapPlacement, CGEventType,
};
use core_graphics::geometry::CGPoint;

use super::ffi::{CFMachPortInvalidate, CGEventTapEnable, CGEventTapIsEnabled};
use crate::error::EngineError;
use crate::interceptor::{EventTap, SuspendReason, TapContext, TapEvent, TapVerdict};
use crate::model::{ModifierFlags, Point};

/// Raw mach port of the live tap, shared with its callback so that a tap
/// the OS switched off can be switched back on from inside the callback.
struct TapPort(AtomicPtr<c_void>);

impl TapPort {
    fn set_enabled(&self, enabled: bool) {
        let port = self.0.load(Ordering::Acquire);
        if !port.is_null() {
            // SAFETY: non-null only while the owning `LiveTap` is alive.
            unsafe { CGEventTapEnable(port, enabled) }
        }
    }

    fn is_enabled(&self) -> bool {
        let port = self.0.load(Ordering::Acquire);
        !port.is_null() && unsafe { CGEventTapIsEnabled(port) }
    }

    fn take(&self) -> *mut c_void {
        self.0.swap(ptr::null_mut(), Ordering::AcqRel)
    }
}

struct LiveTap {
    tap: CGEventTap<'static>,
    source: CFRunLoopSource,
    port: Arc<TapPort>,
}

/// [`EventTap`] backed by `CGEventTapCreate` on the main run loop.
#[derive(Default)]
pub struct CoreGraphicsTap {
    live: Option<LiveTap>,
}

impl CoreGraphicsTap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventTap for CoreGraphicsTap {
    fn install(&mut self, context: Weak<TapContext>) -> Result<(), EngineError> {
        if self.live.is_some() {
            return Ok(());
        }

        let port = Arc::new(TapPort(AtomicPtr::new(ptr::null_mut())));
        let callback_port = Arc::clone(&port);
        let tap = CGEventTap::new(
            CGEventTapLocation::Session,
            CGEventTapPlacement::HeadInsertEventTap,
            CGEventTapOptions::Default,
            vec![
                CGEventType::MouseMoved,
                CGEventType::LeftMouseDragged,
                CGEventType::RightMouseDragged,
                CGEventType::OtherMouseDragged,
            ],
            move |_proxy, event_type, event: &CGEvent| {
                on_event(&context, &callback_port, event_type, event);
                // None forwards the (possibly edited) original event.
                None
            },
        )
        .map_err(|()| EngineError::PermissionDenied)?;

        let source = match tap.mach_port.create_runloop_source(0) {
            Ok(source) => source,
            Err(()) => {
                unsafe { CFMachPortInvalidate(tap.mach_port.as_concrete_TypeRef() as *mut c_void) };
                return Err(EngineError::RunLoopUnavailable);
            }
        };

        port.0.store(
            tap.mach_port.as_concrete_TypeRef() as *mut c_void,
            Ordering::Release,
        );
        CFRunLoop::get_main().add_source(&source, unsafe { kCFRunLoopCommonModes });
        tap.enable();
        tracing::info!("pointer tap attached to main run loop");

        self.live = Some(LiveTap { tap, source, port });
        Ok(())
    }

    fn remove(&mut self) {
        let Some(live) = self.live.take() else {
            return;
        };
        live.port.set_enabled(false);
        CFRunLoop::get_main().remove_source(&live.source, unsafe { kCFRunLoopCommonModes });
        let raw = live.port.take();
        if !raw.is_null() {
            unsafe { CFMachPortInvalidate(raw) };
        }
        drop(live.tap);
        tracing::info!("pointer tap removed");
    }

    fn reenable(&mut self) {
        if let Some(live) = &self.live {
            if !live.port.is_enabled() {
                tracing::info!("pointer tap found disabled, switching it back on");
                live.port.set_enabled(true);
            }
        }
    }

    fn is_installed(&self) -> bool {
        self.live.is_some()
    }
}

impl Drop for CoreGraphicsTap {
    fn drop(&mut self) {
        self.remove();
    }
}

fn on_event(context: &Weak<TapContext>, port: &TapPort, event_type: CGEventType, event: &CGEvent) {
    let tap_event = match event_type {
        CGEventType::TapDisabledByTimeout => TapEvent::Suspended(SuspendReason::Timeout),
        CGEventType::TapDisabledByUserInput => TapEvent::Suspended(SuspendReason::UserInput),
        CGEventType::MouseMoved
        | CGEventType::LeftMouseDragged
        | CGEventType::RightMouseDragged
        | CGEventType::OtherMouseDragged => {
            let location = event.location();
            TapEvent::Motion {
                position: Point::new(location.x, location.y),
                flags: ModifierFlags::from_bits(event.get_flags().bits()),
            }
        }
        _ => TapEvent::Other,
    };

    let Some(context) = context.upgrade() else {
        return;
    };
    match context.handle(tap_event) {
        TapVerdict::PassThrough => {}
        TapVerdict::Reposition(target) => event.set_location(CGPoint::new(target.x, target.y)),
        TapVerdict::Reenable => port.set_enabled(true),
    }
}
