//! System observers feeding the event bus.
//!
//! Every observer publishes an [`AppEvent`] and then runs the [`Pump`] it was
//! given, which drains the bus into the engine. Observers are registered
//! with a nil queue, so blocks run synchronously on the posting thread
//! (the main thread for all the notifications used here).

use std::rc::Rc;

use crate::events::{publish, AppEvent};
use crate::model::KEEPALIVE_INTERVAL_SECS;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring, RcBlock, YES};

/// Drains pending events into the engine after an observer fired.
pub type Pump = Rc<dyn Fn()>;

unsafe fn observe(center: id, name: &str, event: AppEvent, pump: Pump) {
    let name = nsstring(name);
    let block = RcBlock::new(move |_note: id| {
        publish(event.clone());
        pump();
    });
    let _: id = msg_send![
        center,
        addObserverForName: &*name,
        object: nil,
        queue: nil,
        usingBlock: &*block
    ];
}

unsafe fn default_center() -> id {
    msg_send![get_class("NSNotificationCenter"), defaultCenter]
}

unsafe fn workspace_center() -> id {
    let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    msg_send![ws, notificationCenter]
}

/// Publish `DisplayConfigurationChanged` whenever displays are added,
/// removed, rearranged or resized, or the Dock changes size.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn install_screen_observer(pump: Pump) {
    observe(
        default_center(),
        "NSApplicationDidChangeScreenParametersNotification",
        AppEvent::DisplayConfigurationChanged,
        pump,
    );
}

/// Publish `SystemWoke` after sleep and when the login session becomes
/// active again. Taps are frequently switched off across both.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn install_wake_observers(pump: Pump) {
    let nc = workspace_center();
    observe(
        nc,
        "NSWorkspaceDidWakeNotification",
        AppEvent::SystemWoke,
        Rc::clone(&pump),
    );
    observe(
        nc,
        "NSWorkspaceSessionDidBecomeActiveNotification",
        AppEvent::SystemWoke,
        pump,
    );
}

/// Publish `Shutdown` when the application is about to terminate.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn install_termination_observer(pump: Pump) {
    observe(
        default_center(),
        "NSApplicationWillTerminateNotification",
        AppEvent::Shutdown,
        pump,
    );
}

/// Start a repeating NSTimer that publishes `KeepAlive`. Returns the timer,
/// which the main run loop retains.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn start_keepalive(pump: Pump) -> id {
    let block = RcBlock::new(move |_timer: id| {
        publish(AppEvent::KeepAlive);
        pump();
    });
    msg_send![
        get_class("NSTimer"),
        scheduledTimerWithTimeInterval: KEEPALIVE_INTERVAL_SECS,
        repeats: YES,
        block: &*block
    ]
}
