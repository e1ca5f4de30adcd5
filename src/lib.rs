#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Keeps the Dock on the displays you choose.
//!
//! Everything outside `platform` is pure Rust so it can be tested on any
//! host; the macOS backends plug into the traits defined here.

pub mod engine;
pub mod error;
pub mod events;
pub mod geometry;
pub mod handlers;
pub mod interceptor;
pub mod model;
pub mod policy;
pub mod storage;

#[cfg(target_os = "macos")]
pub mod platform;

pub use engine::{DisplayLayout, EngineController, PermissionProbe};
pub use error::EngineError;
pub use events::{AppEvent, EventBus, EventPublisher};
pub use geometry::{BlockedRegion, GeometryCache, GeometrySnapshot};
pub use interceptor::{EventInterceptor, EventTap, TapContext, TapEvent, TapVerdict};
pub use model::{DisplayId, EngineState, ModifierFlags, OverrideModifier, Point};
pub use policy::{decide, Action};
pub use storage::{MemoryStore, SettingsStore};
