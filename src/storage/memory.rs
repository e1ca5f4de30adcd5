//! In-memory settings store.

use std::collections::HashMap;

use super::SettingsStore;
use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq)]
enum Value {
    IntList(Vec<i64>),
    Bool(bool),
    Int(i64),
}

/// `SettingsStore` backed by a `HashMap`. Clone it to hand the same
/// contents to a fresh engine.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn put(&mut self, key: &str, value: Value) -> Result<(), EngineError> {
        if self.read_only {
            return Err(EngineError::Storage {
                key: key.to_string(),
                reason: "store is read-only".to_string(),
            });
        }
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

impl SettingsStore for MemoryStore {
    fn get_int_list(&self, key: &str) -> Option<Vec<i64>> {
        match self.values.get(key) {
            Some(Value::IntList(v)) => Some(v.clone()),
            _ => None,
        }
    }

    fn set_int_list(&mut self, key: &str, values: &[i64]) -> Result<(), EngineError> {
        self.put(key, Value::IntList(values.to_vec()))
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), EngineError> {
        self.put(key, Value::Bool(value))
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        match self.values.get(key) {
            Some(Value::Int(i)) => Some(*i),
            _ => None,
        }
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), EngineError> {
        self.put(key, Value::Int(value))
    }
}
