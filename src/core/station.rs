//! The time-clock station: in-memory state, its durable mirror and the
//! transient last-event notice.
//!
//! Every mutation updates the ledger first and then writes the affected
//! slot(s). A failed write is handed back as a warning in `Persisted`; the
//! in-memory state stays authoritative for the rest of the session.

use crate::core::admin::AdminSession;
use crate::core::attendance::{Evidence, Ledger};
use crate::core::logbook::{ClearRequest, LogBook};
use crate::core::roster::Roster;
use crate::core::summary::{self, LastEventNotice, NOTICE_WINDOW_SECS, Snapshot};
use crate::core::time::TimeSource;
use crate::db::PersistenceAdapter;
use crate::errors::{AppError, AppResult};
use crate::models::{EmploymentStatus, EventType, LogEntry, StaffRecord};
use chrono::{Duration, Local, NaiveDate};
use tracing::info;

/// Outcome of a committed mutation.
#[derive(Debug)]
#[must_use]
pub struct Persisted<T> {
    pub value: T,
    /// Non-fatal storage problems (`AppError::PersistenceWrite`).
    pub warnings: Vec<AppError>,
}

impl<T> Persisted<T> {
    fn new(value: T, warnings: Vec<AppError>) -> Self {
        Self { value, warnings }
    }

    pub fn is_durable(&self) -> bool {
        self.warnings.is_empty()
    }
}

pub struct Station {
    ledger: Ledger,
    storage: PersistenceAdapter,
    time: Box<dyn TimeSource>,
    notice: Option<LastEventNotice>,
    notice_window: Duration,
}

impl Station {
    /// Rehydrate from storage. Load problems are returned as warnings.
    pub fn open(
        storage: PersistenceAdapter,
        time: impl TimeSource + 'static,
    ) -> (Self, Vec<AppError>) {
        let loaded = storage.load();
        let station = Self {
            ledger: loaded.ledger,
            storage,
            time: Box::new(time),
            notice: None,
            notice_window: Duration::seconds(i64::from(NOTICE_WINDOW_SECS)),
        };
        (station, loaded.warnings)
    }

    pub fn with_notice_window(mut self, window: Duration) -> Self {
        self.notice_window = window;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn roster(&self) -> &Roster {
        &self.ledger.roster
    }

    pub fn logs(&self) -> &LogBook {
        &self.ledger.logs
    }

    pub fn storage(&self) -> &PersistenceAdapter {
        &self.storage
    }

    /// Current local calendar day according to the station clock.
    pub fn today(&self) -> NaiveDate {
        self.time.now().with_timezone(&Local).date_naive()
    }

    // ---------------------------
    // Clock station
    // ---------------------------

    pub fn clock_action(
        &mut self,
        staff_id: &str,
        kind: EventType,
        evidence: Evidence,
    ) -> AppResult<Persisted<LogEntry>> {
        let entry = self
            .ledger
            .clock_action(self.time.as_ref(), staff_id, kind, evidence)?;

        info!(staff = %entry.staff_id, kind = entry.kind.et_as_str(), "clock action");

        self.notice = Some(LastEventNotice::new(
            entry.clone(),
            entry.timestamp,
            self.notice_window,
        ));

        let warnings = self.storage.save_all(&self.ledger);
        Ok(Persisted::new(entry, warnings))
    }

    /// The last clock event while its notice window is open.
    pub fn last_event(&mut self) -> Option<&LogEntry> {
        let now = self.time.now();
        if self.notice.as_ref().is_some_and(|n| !n.is_visible(now)) {
            self.notice = None;
        }
        self.notice.as_ref().map(LastEventNotice::entry)
    }

    pub fn snapshot(&self, days: u32) -> Snapshot {
        summary::snapshot(&self.ledger, self.today(), days)
    }

    // ---------------------------
    // Administration
    // ---------------------------

    pub fn add_staff(
        &mut self,
        _admin: &AdminSession,
        name: &str,
        position: &str,
    ) -> AppResult<Persisted<StaffRecord>> {
        let record = self.ledger.roster.add(name, position)?;
        info!(staff = %record.id, "staff added");
        Ok(Persisted::new(record, self.save_roster()))
    }

    /// Returns whether the status changed; nothing is written when it did not.
    pub fn set_employment_status(
        &mut self,
        _admin: &AdminSession,
        id: &str,
        status: EmploymentStatus,
    ) -> AppResult<Persisted<bool>> {
        let changed = self.ledger.roster.set_employment_status(id, status)?;
        let warnings = if changed { self.save_roster() } else { Vec::new() };
        Ok(Persisted::new(changed, warnings))
    }

    pub fn toggle_employment_status(
        &mut self,
        _admin: &AdminSession,
        id: &str,
    ) -> AppResult<Persisted<EmploymentStatus>> {
        let status = self.ledger.roster.toggle_employment_status(id)?;
        Ok(Persisted::new(status, self.save_roster()))
    }

    /// Log rows of the removed member are kept.
    pub fn remove_staff(
        &mut self,
        _admin: &AdminSession,
        id: &str,
    ) -> AppResult<Persisted<StaffRecord>> {
        let removed = self.ledger.roster.remove(id)?;
        info!(staff = %removed.id, "staff removed");
        Ok(Persisted::new(removed, self.save_roster()))
    }

    pub fn request_clear(&self, _admin: &AdminSession) -> ClearRequest {
        self.ledger.logs.request_clear()
    }

    pub fn commit_clear(
        &mut self,
        _admin: &AdminSession,
        request: ClearRequest,
    ) -> Persisted<usize> {
        let removed = self.ledger.logs.commit_clear(request);
        self.notice = None;
        info!(removed, "log cleared");

        let warnings = self
            .storage
            .save_logs(&self.ledger.logs)
            .err()
            .into_iter()
            .collect();
        Persisted::new(removed, warnings)
    }

    /// Rewrite cached presence from history.
    pub fn repair_presence(&mut self, _admin: &AdminSession) -> Persisted<usize> {
        let fixed = self.ledger.repair_presence();
        let warnings = if fixed > 0 { self.save_roster() } else { Vec::new() };
        Persisted::new(fixed, warnings)
    }

    fn save_roster(&mut self) -> Vec<AppError> {
        self.storage
            .save_roster(&self.ledger.roster)
            .err()
            .into_iter()
            .collect()
    }
}
