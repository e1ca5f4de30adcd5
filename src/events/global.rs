//! Global access to the application event bus.
//!
//! Observers installed through the Objective-C runtime have no place to
//! keep a publisher, so they publish through these functions. The bus is
//! created on first use.
//!
//! - `Sender` is stored in `OnceLock` - it's `Send + Sync`, perfect for static
//! - `Receiver` is stored in `Mutex` - only drained from the main thread

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use super::bus::EventPublisher;
use super::types::AppEvent;

struct GlobalBus {
    sender: Sender<AppEvent>,
    receiver: Mutex<Receiver<AppEvent>>,
}

static BUS: OnceLock<GlobalBus> = OnceLock::new();

fn bus() -> &'static GlobalBus {
    BUS.get_or_init(|| {
        let (sender, receiver) = mpsc::channel();
        GlobalBus {
            sender,
            receiver: Mutex::new(receiver),
        }
    })
}

/// Get a publisher handle for the global event bus.
pub fn publisher() -> EventPublisher {
    EventPublisher::from_sender(bus().sender.clone())
}

/// Publish an event to the global event bus.
pub fn publish(event: AppEvent) {
    // The receiver lives in a static, so sending cannot fail.
    let _ = bus().sender.send(event);
}

/// Drain all pending events from the global event bus.
pub fn drain_events() -> Vec<AppEvent> {
    let receiver = bus()
        .receiver
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    receiver.try_iter().collect()
}
