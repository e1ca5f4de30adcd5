//! macOS entry point.
//!
//! Builds the engine on the main thread, restores the persisted session,
//! wires system observers to the event bus and hands control to AppKit.

use std::cell::RefCell;
use std::rc::Rc;

use dockpin::handlers::dispatch_pending;
use dockpin::platform::macos::bridge::{autoreleasepool, msg_send, NSApp};
use dockpin::platform::macos::input::{
    install_screen_observer, install_termination_observer, install_wake_observers,
    start_keepalive, Pump,
};
use dockpin::platform::macos::{
    AccessibilityPermission, CoreGraphicsTap, ScreenLayoutProvider, UserDefaultsStore,
};
use dockpin::{EngineController, PermissionProbe};

type MacEngine = EngineController<
    UserDefaultsStore,
    ScreenLayoutProvider,
    CoreGraphicsTap,
    AccessibilityPermission,
>;

/// Main entry point for macOS.
pub fn run() {
    autoreleasepool(|_| unsafe {
        let app = NSApp();
        // NSApplicationActivationPolicyAccessory = 1
        let _: bool = msg_send![app, setActivationPolicy: 1i64];

        let permission = AccessibilityPermission;
        if !permission.request() {
            tracing::warn!("Accessibility access not granted yet; the Dock stays unconfined");
        }

        let engine: Rc<RefCell<MacEngine>> = Rc::new(RefCell::new(EngineController::new(
            UserDefaultsStore,
            ScreenLayoutProvider,
            CoreGraphicsTap::new(),
            permission,
        )));
        engine.borrow_mut().restore_state();
        tracing::info!(
            enabled = engine.borrow().is_enabled(),
            displays = engine.borrow().allowed_displays().len(),
            "engine ready"
        );

        let pump: Pump = {
            let engine = Rc::clone(&engine);
            Rc::new(move || pump_events(&engine))
        };
        install_screen_observer(Rc::clone(&pump));
        install_wake_observers(Rc::clone(&pump));
        install_termination_observer(Rc::clone(&pump));
        let _timer = start_keepalive(pump);

        let _: () = msg_send![app, run];
    });
}

/// Apply everything on the bus, unless the engine is already borrowed
/// further up the stack; the events then wait for the next pump.
fn pump_events(engine: &RefCell<MacEngine>) {
    match engine.try_borrow_mut() {
        Ok(mut engine) => {
            if let Some(applied) = dispatch_pending(&mut engine) {
                tracing::trace!(applied, "pumped events");
            }
        }
        Err(_) => tracing::debug!("engine busy, events left queued"),
    }
}
