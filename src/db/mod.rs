//! Durable storage: two named slots holding the serialized roster and log.

pub mod adapter;
pub mod file;
pub mod memory;
pub mod migrate;
pub mod slots;
pub mod sqlite;

pub use adapter::{Loaded, PersistenceAdapter};
pub use slots::{Slot, SlotStore, StorageKind};
