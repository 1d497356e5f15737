use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

/// The two durable slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Staff,
    Logs,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Staff, Slot::Logs];

    /// Storage key, shared by every backend.
    pub fn key(&self) -> &'static str {
        match self {
            Slot::Staff => "staff_data",
            Slot::Logs => "logs_data",
        }
    }
}

/// Backend-agnostic key/value access. Writes always overwrite the slot.
pub trait SlotStore {
    fn read(&self, slot: Slot) -> AppResult<Option<String>>;
    fn write(&mut self, slot: Slot, payload: &str) -> AppResult<()>;
    /// Human-readable location, for messages.
    fn describe(&self) -> String;
}

/// Which backend to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    File,
    Sqlite,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::File => "file",
            StorageKind::Sqlite => "sqlite",
        }
    }
}
