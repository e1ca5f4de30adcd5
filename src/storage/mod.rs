//! Persistence of the engine record.
//!
//! The engine only needs get/set for three scalar-ish values; the backing
//! store (NSUserDefaults on macOS, memory in tests) implements
//! [`SettingsStore`].

pub mod memory;

pub use memory::MemoryStore;

use crate::error::EngineError;
use crate::model::constants::*;
use crate::model::{EngineState, OverrideModifier};

/// Key-value settings facility.
///
/// Getters return `None` for keys that were never written.
pub trait SettingsStore {
    fn get_int_list(&self, key: &str) -> Option<Vec<i64>>;
    fn set_int_list(&mut self, key: &str, values: &[i64]) -> Result<(), EngineError>;

    fn get_bool(&self, key: &str) -> Option<bool>;
    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), EngineError>;

    fn get_int(&self, key: &str) -> Option<i64>;
    fn set_int(&mut self, key: &str, value: i64) -> Result<(), EngineError>;
}

/// Load the engine record, applying defaults for absent keys.
pub fn load_state<S: SettingsStore + ?Sized>(store: &S) -> EngineState {
    let allowed_displays = store
        .get_int_list(PREF_ALLOWED_DISPLAYS)
        .map(|codes| EngineState::allowed_from_codes(&codes))
        .unwrap_or_default();
    let is_enabled = store.get_bool(PREF_ENABLED).unwrap_or(false);
    let override_modifier = store
        .get_int(PREF_OVERRIDE_MODIFIER)
        .map(OverrideModifier::from_code_or_default)
        .unwrap_or_default();

    EngineState {
        is_enabled,
        allowed_displays,
        override_modifier,
    }
}

/// Save the complete engine record.
pub fn save_state<S: SettingsStore + ?Sized>(
    store: &mut S,
    state: &EngineState,
) -> Result<(), EngineError> {
    store.set_int_list(PREF_ALLOWED_DISPLAYS, &state.allowed_codes())?;
    store.set_bool(PREF_ENABLED, state.is_enabled)?;
    store.set_int(PREF_OVERRIDE_MODIFIER, state.override_modifier.code())?;
    Ok(())
}
