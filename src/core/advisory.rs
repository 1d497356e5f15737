//! Narrative attendance analysis.
//!
//! The service sees a digest of the latest entries and returns free text.
//! The text is advisory only: nothing parses it, and any failure is replaced
//! by `FALLBACK_MESSAGE`.

use crate::errors::{AppError, AppResult};
use crate::models::{EventType, LogEntry, StaffRecord};
use chrono::{DateTime, Local, Timelike};
use std::collections::BTreeMap;
use tracing::warn;

pub const FALLBACK_MESSAGE: &str = "Attendance analysis is not available right now.";

/// How many recent entries a digest holds by default.
pub const DIGEST_WINDOW: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct DigestRow {
    pub staff_name: String,
    pub kind: EventType,
    pub at: DateTime<Local>,
}

impl DigestRow {
    /// Localized display form, e.g. `12/03/2025, 08:01:15`.
    pub fn localized(&self) -> String {
        self.at.format("%d/%m/%Y, %H:%M:%S").to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceDigest {
    /// Oldest first.
    pub rows: Vec<DigestRow>,
    pub staff: Vec<StaffRecord>,
}

impl AttendanceDigest {
    /// Take the `window` most recent entries (logs are stored newest first).
    pub fn build(logs: &[LogEntry], staff: &[StaffRecord], window: usize) -> Self {
        let rows = logs
            .iter()
            .take(window)
            .rev()
            .map(|e| DigestRow {
                staff_name: e.staff_name.clone(),
                kind: e.kind,
                at: e.local_time(),
            })
            .collect();

        Self {
            rows,
            staff: staff.to_vec(),
        }
    }
}

pub trait AdvisoryService {
    fn analyze(&self, digest: &AttendanceDigest) -> AppResult<String>;
}

/// Run the service, degrading to the fallback text on any error.
pub fn narrative(service: &dyn AdvisoryService, digest: &AttendanceDigest) -> String {
    match service.analyze(digest) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("advisory service returned an empty answer");
            FALLBACK_MESSAGE.to_string()
        }
        Err(e) => {
            warn!(error = %e, "advisory service failed");
            FALLBACK_MESSAGE.to_string()
        }
    }
}

/// Rule-based advisor that needs no network.
#[derive(Debug, Default)]
pub struct LocalAdvisor;

const EARLY_HOUR: u32 = 6;
const LATE_HOUR: u32 = 22;

impl LocalAdvisor {
    /// Names whose latest event in the digest is an In.
    fn open_shifts(rows: &[DigestRow]) -> Vec<String> {
        let mut last: BTreeMap<&str, EventType> = BTreeMap::new();
        for r in rows {
            last.insert(&r.staff_name, r.kind);
        }
        last.into_iter()
            .filter(|(_, k)| k.is_in())
            .map(|(n, _)| n.to_string())
            .collect()
    }

    fn most_active(rows: &[DigestRow], top: usize) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for r in rows {
            *counts.entry(&r.staff_name).or_default() += 1;
        }
        let mut ranked: Vec<(String, usize)> =
            counts.into_iter().map(|(n, c)| (n.to_string(), c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(top);
        ranked
    }

    fn unusual_hours(rows: &[DigestRow]) -> Vec<&DigestRow> {
        rows.iter()
            .filter(|r| r.at.hour() < EARLY_HOUR || r.at.hour() >= LATE_HOUR)
            .collect()
    }
}

impl AdvisoryService for LocalAdvisor {
    fn analyze(&self, digest: &AttendanceDigest) -> AppResult<String> {
        if digest.rows.is_empty() {
            return Ok("No attendance records to analyze yet.".to_string());
        }

        let mut out = Vec::new();

        let open = Self::open_shifts(&digest.rows);
        out.push(if open.is_empty() {
            "1. Every clock-in in the recent records has a matching clock-out.".to_string()
        } else {
            format!(
                "1. Possibly forgot to clock out (IN with no later OUT): {}.",
                open.join(", ")
            )
        });

        let active = Self::most_active(&digest.rows, 3);
        let listed: Vec<String> = active
            .iter()
            .map(|(name, n)| format!("{name} ({n} events)"))
            .collect();
        out.push(format!("2. Most active recently: {}.", listed.join(", ")));

        let unusual = Self::unusual_hours(&digest.rows);
        out.push(if unusual.is_empty() {
            "3. No events outside regular hours.".to_string()
        } else {
            let samples: Vec<String> = unusual
                .iter()
                .take(5)
                .map(|r| format!("{} {} at {}", r.staff_name, r.kind.et_as_str(), r.localized()))
                .collect();
            format!(
                "3. {} event(s) outside {:02}:00-{:02}:00: {}.",
                unusual.len(),
                EARLY_HOUR,
                LATE_HOUR,
                samples.join("; ")
            )
        });

        out.push(if !open.is_empty() {
            "4. Tip: remind the team to register their exit before leaving.".to_string()
        } else if !unusual.is_empty() {
            "4. Tip: review shift planning for the late or early registrations.".to_string()
        } else {
            "4. Tip: attendance looks regular; keep registering in and out consistently."
                .to_string()
        });

        Ok(out.join("\n"))
    }
}

/// An advisor that always fails; stands in for an unreachable remote service.
#[derive(Debug, Default)]
pub struct OfflineAdvisor;

impl AdvisoryService for OfflineAdvisor {
    fn analyze(&self, _digest: &AttendanceDigest) -> AppResult<String> {
        Err(AppError::Advisory("service unreachable".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(name: &str, kind: EventType, hour: u32, minute: u32) -> LogEntry {
        let local = Local.with_ymd_and_hms(2025, 3, 12, hour, minute, 0).earliest().unwrap();
        LogEntry {
            id: format!("{name}-{hour}-{minute}"),
            staff_id: name.to_lowercase(),
            staff_name: name.to_string(),
            kind,
            timestamp: local.with_timezone(&Utc),
            photo: None,
            geo: None,
        }
    }

    /// Newest first, as the log book stores them.
    fn sample_logs() -> Vec<LogEntry> {
        let mut logs = vec![
            entry("Ana", EventType::In, 8, 0),
            entry("Carlos", EventType::In, 9, 0),
            entry("Ana", EventType::Out, 17, 0),
            entry("Elena", EventType::In, 23, 15),
        ];
        logs.reverse();
        logs
    }

    #[test]
    fn digest_keeps_latest_window_oldest_first() {
        let logs = sample_logs();
        let digest = AttendanceDigest::build(&logs, &[], 3);

        let names: Vec<&str> = digest.rows.iter().map(|r| r.staff_name.as_str()).collect();
        assert_eq!(names, vec!["Carlos", "Ana", "Elena"]);
        assert_eq!(digest.rows[0].localized(), "12/03/2025, 09:00:00");
    }

    #[test]
    fn local_advisor_reports_open_shifts_and_late_events() {
        let digest = AttendanceDigest::build(&sample_logs(), &[], DIGEST_WINDOW);
        let text = LocalAdvisor.analyze(&digest).unwrap();

        assert!(text.contains("Carlos, Elena"));
        assert!(text.contains("Ana (2 events)"));
        assert!(text.contains("1 event(s) outside"));
        assert!(text.contains("remind the team"));
    }

    #[test]
    fn failures_fall_back_to_fixed_text() {
        let digest = AttendanceDigest::build(&sample_logs(), &[], DIGEST_WINDOW);
        assert_eq!(narrative(&OfflineAdvisor, &digest), FALLBACK_MESSAGE);
    }

    #[test]
    fn empty_digest_is_not_an_error() {
        let digest = AttendanceDigest::build(&[], &[], DIGEST_WINDOW);
        assert!(narrative(&LocalAdvisor, &digest).contains("No attendance records"));
    }
}
