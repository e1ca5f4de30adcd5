//! Input handling module.
//!
//! - observers.rs: system notifications (screen changes, wake, termination)
//!   and the keep-alive timer, all republished as `AppEvent`s

pub mod observers;

pub use observers::{
    install_screen_observer, install_termination_observer, install_wake_observers,
    start_keepalive, Pump,
};
