use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::errors::{Result, TrackerError};

use super::{Slot, StorageBackend};

/// Keeps slots in a process-local map. Used by tests and by embedders that
/// do not want files on disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<&'static str, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStore {
    fn load(&self, slot: Slot) -> Result<Option<Value>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| TrackerError::Storage("memory store lock poisoned".into()))?;
        Ok(slots.get(slot.as_str()).cloned())
    }

    fn save(&self, slot: Slot, value: &Value) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| TrackerError::Storage("memory store lock poisoned".into()))?;
        slots.insert(slot.as_str(), value.clone());
        Ok(())
    }
}
