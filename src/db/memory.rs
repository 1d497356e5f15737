//! In-process slots. Nothing survives the process; used by tests and dry runs.

use super::slots::{Slot, SlotStore};
use crate::errors::{AppError, AppResult};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct MemorySlots {
    data: HashMap<&'static str, String>,
    fail_writes: bool,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot with raw content (possibly garbage).
    pub fn with_raw(mut self, slot: Slot, payload: impl Into<String>) -> Self {
        self.data.insert(slot.key(), payload.into());
        self
    }

    /// Make every subsequent write fail, as a full disk would.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn raw(&self, slot: Slot) -> Option<&str> {
        self.data.get(slot.key()).map(String::as_str)
    }
}

impl SlotStore for MemorySlots {
    fn read(&self, slot: Slot) -> AppResult<Option<String>> {
        Ok(self.data.get(slot.key()).cloned())
    }

    fn write(&mut self, slot: Slot, payload: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Other("storage quota exceeded".into()));
        }
        self.data.insert(slot.key(), payload.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
