//! Persistence adapter: full-collection snapshots in, full collections out.

use super::slots::{Slot, SlotStore};
use crate::core::attendance::Ledger;
use crate::core::logbook::LogBook;
use crate::core::roster::Roster;
use crate::errors::{AppError, AppResult};
use crate::models::{LogEntry, StaffRecord};
use tracing::{debug, warn};

pub struct PersistenceAdapter {
    backend: Box<dyn SlotStore>,
}

/// Result of rehydration. Problems with a slot never fail the load; they
/// are reported here and the slot falls back to its initial content.
#[derive(Debug)]
pub struct Loaded {
    pub ledger: Ledger,
    /// The roster came from the built-in seed set.
    pub seeded: bool,
    pub warnings: Vec<AppError>,
}

pub fn encode_roster(staff: &[StaffRecord]) -> AppResult<String> {
    Ok(serde_json::to_string(staff)?)
}

pub fn decode_roster(raw: &str) -> AppResult<Vec<StaffRecord>> {
    Ok(serde_json::from_str(raw)?)
}

pub fn encode_logs(logs: &[LogEntry]) -> AppResult<String> {
    Ok(serde_json::to_string(logs)?)
}

pub fn decode_logs(raw: &str) -> AppResult<Vec<LogEntry>> {
    Ok(serde_json::from_str(raw)?)
}

impl PersistenceAdapter {
    pub fn new(backend: impl SlotStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    pub fn describe(&self) -> String {
        self.backend.describe()
    }

    /// Raw slot content, as stored.
    pub fn read_raw(&self, slot: Slot) -> AppResult<Option<String>> {
        self.backend.read(slot)
    }

    pub fn load(&self) -> Loaded {
        let mut warnings = Vec::new();

        let staff = self.load_slot(Slot::Staff, decode_roster, &mut warnings);
        let seeded = staff.is_none();
        let roster = staff.map(Roster::new).unwrap_or_else(Roster::seeded);

        let logs = self
            .load_slot(Slot::Logs, decode_logs, &mut warnings)
            .map(LogBook::new)
            .unwrap_or_default();

        debug!(
            staff = roster.len(),
            logs = logs.len(),
            seeded,
            "state rehydrated"
        );

        Loaded {
            ledger: Ledger::new(roster, logs),
            seeded,
            warnings,
        }
    }

    fn load_slot<T>(
        &self,
        slot: Slot,
        decode: fn(&str) -> AppResult<T>,
        warnings: &mut Vec<AppError>,
    ) -> Option<T> {
        let raw = match self.backend.read(slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(slot = slot.key(), error = %e, "slot unreadable, using initial content");
                warnings.push(e);
                return None;
            }
        };

        match decode(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(slot = slot.key(), error = %e, "slot unparseable, using initial content");
                warnings.push(e);
                None
            }
        }
    }

    pub fn save_roster(&mut self, roster: &Roster) -> AppResult<()> {
        let payload = encode_roster(roster.list())?;
        self.write(Slot::Staff, &payload)
    }

    pub fn save_logs(&mut self, logs: &LogBook) -> AppResult<()> {
        let payload = encode_logs(logs.list())?;
        self.write(Slot::Logs, &payload)
    }

    pub fn save_all(&mut self, ledger: &Ledger) -> Vec<AppError> {
        [self.save_roster(&ledger.roster), self.save_logs(&ledger.logs)]
            .into_iter()
            .filter_map(Result::err)
            .collect()
    }

    fn write(&mut self, slot: Slot, payload: &str) -> AppResult<()> {
        self.backend.write(slot, payload).map_err(|e| {
            warn!(slot = slot.key(), error = %e, "write failed");
            AppError::PersistenceWrite {
                slot: slot.key().to_string(),
                reason: e.to_string(),
            }
        })
    }
}
