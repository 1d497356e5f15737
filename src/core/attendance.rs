//! Attendance reducer.
//!
//! `Ledger` owns both stores so that a clock action (append the log entry,
//! then overwrite the presence) is a single `&mut self` transition.

use crate::core::logbook::LogBook;
use crate::core::roster::Roster;
use crate::core::time::TimeSource;
use crate::errors::{AppError, AppResult};
use crate::models::{EventType, GeoPoint, LogEntry, Presence};
use uuid::Uuid;

/// Optional proof attached to a clock action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evidence {
    pub photo: Option<String>,
    pub geo: Option<GeoPoint>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    pub roster: Roster,
    pub logs: LogBook,
}

/// Staff member whose cached presence disagrees with the log history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceMismatch {
    pub staff_id: String,
    pub staff_name: String,
    pub cached: Presence,
    pub from_history: Presence,
}

impl Ledger {
    pub fn new(roster: Roster, logs: LogBook) -> Self {
        Self { roster, logs }
    }

    /// Record an in/out event for `staff_id`.
    ///
    /// Repeating the current presence (In then In) is accepted: presence is
    /// simply overwritten with `kind`.
    pub fn clock_action(
        &mut self,
        time: &dyn TimeSource,
        staff_id: &str,
        kind: EventType,
        evidence: Evidence,
    ) -> AppResult<LogEntry> {
        let staff = self
            .roster
            .get(staff_id)
            .ok_or_else(|| AppError::StaffNotFound(staff_id.to_string()))?;

        // Never earlier than the current head, even if the wall clock stepped back.
        let now = time.now();
        let timestamp = self.logs.head().map_or(now, |head| now.max(head.timestamp));

        let entry = LogEntry {
            id: Uuid::new_v4().to_string(),
            staff_id: staff.id.clone(),
            staff_name: staff.name.clone(),
            kind,
            timestamp,
            photo: evidence.photo,
            geo: evidence.geo,
        };

        // The lookup above guarantees set_presence cannot fail, so both
        // mutations happen or neither does.
        self.roster.set_presence(staff_id, kind)?;
        self.logs.append(entry.clone());

        Ok(entry)
    }

    /// Presence derived from history alone: type of the latest entry, or Out.
    pub fn recompute_presence(&self, staff_id: &str) -> Presence {
        presence_from(&self.logs, staff_id)
    }

    pub fn presence_mismatches(&self) -> Vec<PresenceMismatch> {
        self.roster
            .list()
            .iter()
            .filter_map(|s| {
                let from_history = self.recompute_presence(&s.id);
                (from_history != s.presence).then(|| PresenceMismatch {
                    staff_id: s.id.clone(),
                    staff_name: s.name.clone(),
                    cached: s.presence,
                    from_history,
                })
            })
            .collect()
    }

    /// Rewrite every cached presence from history. Returns how many changed.
    pub fn repair_presence(&mut self) -> usize {
        let logs = &self.logs;
        let mut fixed = 0;
        for staff in self.roster.records_mut() {
            let from_history = presence_from(logs, &staff.id);
            if staff.presence != from_history {
                staff.presence = from_history;
                fixed += 1;
            }
        }
        fixed
    }
}

fn presence_from(logs: &LogBook, staff_id: &str) -> Presence {
    logs.latest_for(staff_id)
        .map(|e| e.kind)
        .unwrap_or(Presence::Out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::FixedTime;
    use chrono::{Duration, TimeZone, Utc};

    fn clock() -> FixedTime {
        FixedTime::at(Utc.with_ymd_and_hms(2025, 6, 3, 8, 30, 0).unwrap())
    }

    #[test]
    fn clock_in_updates_log_and_presence() {
        let time = clock();
        let mut ledger = Ledger::default();
        let ana = ledger.roster.add("Ana", "Dev").unwrap();

        let entry = ledger
            .clock_action(&time, &ana.id, EventType::In, Evidence::default())
            .unwrap();

        assert_eq!(entry.staff_name, "Ana");
        assert_eq!(entry.timestamp, time.now());
        assert_eq!(ledger.logs.head(), Some(&entry));
        assert_eq!(ledger.roster.get(&ana.id).unwrap().presence, Presence::In);
    }

    #[test]
    fn in_then_out_leaves_out_at_head() {
        let time = clock();
        let mut ledger = Ledger::new(Roster::seeded(), LogBook::default());

        ledger.clock_action(&time, "1", EventType::In, Evidence::default()).unwrap();
        time.advance(Duration::hours(8));
        ledger.clock_action(&time, "1", EventType::Out, Evidence::default()).unwrap();

        assert_eq!(ledger.logs.len(), 2);
        assert_eq!(ledger.logs.head().unwrap().kind, EventType::Out);
        assert_eq!(ledger.roster.get("1").unwrap().presence, Presence::Out);
    }

    #[test]
    fn presence_follows_last_call_whatever_came_before() {
        let time = clock();
        let mut ledger = Ledger::new(Roster::seeded(), LogBook::default());
        let sequence = [
            EventType::In,
            EventType::In,
            EventType::Out,
            EventType::Out,
            EventType::In,
            EventType::Out,
        ];

        for kind in sequence {
            ledger.clock_action(&time, "2", kind, Evidence::default()).unwrap();
            time.advance(Duration::minutes(1));
            assert_eq!(ledger.roster.get("2").unwrap().presence, kind);
            assert_eq!(ledger.recompute_presence("2"), kind);
        }
    }

    #[test]
    fn unknown_staff_is_an_error_and_changes_nothing() {
        let time = clock();
        let mut ledger = Ledger::new(Roster::seeded(), LogBook::default());
        let before = ledger.clone();

        let result = ledger.clock_action(&time, "99", EventType::In, Evidence::default());

        assert!(matches!(result, Err(AppError::StaffNotFound(id)) if id == "99"));
        assert_eq!(ledger, before);
    }

    #[test]
    fn evidence_is_carried_into_the_entry() {
        let time = clock();
        let mut ledger = Ledger::new(Roster::seeded(), LogBook::default());
        let evidence = Evidence {
            photo: Some("data:image/png;base64,AAAA".into()),
            geo: GeoPoint::new(40.4, -3.7),
        };

        let entry = ledger.clock_action(&time, "3", EventType::In, evidence.clone()).unwrap();

        assert_eq!(entry.photo, evidence.photo);
        assert_eq!(entry.geo, evidence.geo);
    }

    #[test]
    fn mismatches_are_detected_and_repaired() {
        let time = clock();
        let mut ledger = Ledger::new(Roster::seeded(), LogBook::default());
        ledger.clock_action(&time, "1", EventType::In, Evidence::default()).unwrap();
        ledger.roster.set_presence("1", Presence::Out).unwrap();

        let found = ledger.presence_mismatches();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].from_history, Presence::In);

        assert_eq!(ledger.repair_presence(), 1);
        assert!(ledger.presence_mismatches().is_empty());
        assert_eq!(ledger.roster.get("1").unwrap().presence, Presence::In);
        assert_eq!(ledger.repair_presence(), 0);
    }

    #[test]
    fn timestamps_never_go_backwards() {
        let time = clock();
        let mut ledger = Ledger::new(Roster::seeded(), LogBook::default());

        let first = ledger.clock_action(&time, "1", EventType::In, Evidence::default()).unwrap();
        time.advance(Duration::minutes(-10));
        let second = ledger.clock_action(&time, "2", EventType::In, Evidence::default()).unwrap();
        time.advance(Duration::minutes(30));
        let third = ledger.clock_action(&time, "1", EventType::Out, Evidence::default()).unwrap();

        assert_eq!(second.timestamp, first.timestamp);
        assert_eq!(third.timestamp, time.now());
        let stamps: Vec<_> = ledger.logs.list().iter().rev().map(|e| e.timestamp).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }
}
