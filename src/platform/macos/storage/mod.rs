//! Storage for macOS using NSUserDefaults.
//!
//! Persists the engine's three settings to the app's preferences domain.

pub mod preferences;

pub use preferences::UserDefaultsStore;
