//! Event handlers.
//!
//! - dispatcher.rs: applies `AppEvent`s to the engine controller

pub mod dispatcher;

pub use dispatcher::{dispatch_all, dispatch_event, dispatch_pending};
