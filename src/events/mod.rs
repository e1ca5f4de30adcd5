//! Event system for decoupled inter-module communication.
//!
//! UI collaborators and system observers publish [`AppEvent`]s; the
//! dispatcher drains them on the main thread and applies them to the
//! engine.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Menu / UI  │     │   Screen    │     │ Wake/Timer  │
//! │             │     │  observer   │     │  observers  │
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()         │ publish()
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! │                   (mpsc channel)                    │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ drain()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │              Dispatcher → EngineController          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types
//! - [`global`]: Static access functions

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{coalesce, EventBus, EventPublisher};
pub use global::{drain_events, publish, publisher};
pub use types::AppEvent;
