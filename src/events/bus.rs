//! Channel-backed event queue.
//!
//! Publishers live on any thread; the AppKit main thread is the single
//! consumer and drains the queue after each observer callback.

use std::sync::mpsc::{self, Receiver, Sender};

use super::types::AppEvent;

/// Queue of pending [`AppEvent`]s.
///
/// ```
/// use dockpin::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// bus.publisher().publish(AppEvent::ToggleEnabled);
/// assert_eq!(bus.drain(), vec![AppEvent::ToggleEnabled]);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    pub fn publisher(&self) -> EventPublisher {
        EventPublisher::from_sender(self.sender.clone())
    }

    /// Everything queued so far, oldest first. Never blocks.
    pub fn drain(&self) -> Vec<AppEvent> {
        self.receiver.try_iter().collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a bus; clone it freely.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    pub fn from_sender(sender: Sender<AppEvent>) -> Self {
        Self { sender }
    }

    /// Queue `event`. Returns `false` if the consumer is gone, in which case
    /// the event is dropped.
    pub fn publish(&self, event: AppEvent) -> bool {
        self.sender.send(event).is_ok()
    }
}

/// Collapse runs of identical system notifications.
///
/// Screen-parameter changes arrive in bursts while a display is attached,
/// and a wake is often followed by a keep-alive tick. Handling one of each
/// in a row is enough; user requests are never merged.
pub fn coalesce(events: Vec<AppEvent>) -> Vec<AppEvent> {
    let mut out: Vec<AppEvent> = Vec::with_capacity(events.len());
    for event in events {
        let repeat = out.last() == Some(&event)
            && matches!(
                event,
                AppEvent::DisplayConfigurationChanged | AppEvent::SystemWoke | AppEvent::KeepAlive
            );
        if !repeat {
            out.push(event);
        }
    }
    out
}
