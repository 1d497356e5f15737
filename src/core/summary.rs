//! Read-side views over the roster and the log. Nothing here is cached or
//! persisted; every call recomputes from the current stores.

use crate::core::attendance::Ledger;
use crate::models::{EventType, LogEntry, StaffRecord};
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Default width of the notice shown after a clock action.
pub const NOTICE_WINDOW_SECS: u32 = 5;

/// Number of days shown by the dashboard histogram.
pub const HISTOGRAM_DAYS: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCount {
    pub date: NaiveDate,
    /// Short weekday name, e.g. `Mon`.
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodayCounts {
    pub ins: usize,
    pub outs: usize,
}

/// Everything the dashboard shows at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub total_staff: usize,
    pub active_now: usize,
    pub today: TodayCounts,
    pub histogram: Vec<DayCount>,
}

pub fn active_count(staff: &[StaffRecord]) -> usize {
    staff.iter().filter(|s| s.is_in()).count()
}

/// Events per local calendar day for the `days` days ending on `today`,
/// oldest first.
pub fn daily_histogram(logs: &[LogEntry], today: NaiveDate, days: u32) -> Vec<DayCount> {
    (0..days)
        .rev()
        .map(|back| {
            let date = today - Duration::days(i64::from(back));
            DayCount {
                date,
                label: date.format("%a").to_string(),
                count: logs.iter().filter(|e| e.local_date() == date).count(),
            }
        })
        .collect()
}

pub fn today_counts(logs: &[LogEntry], today: NaiveDate) -> TodayCounts {
    logs.iter()
        .filter(|e| e.local_date() == today)
        .fold(TodayCounts::default(), |mut acc, e| {
            match e.kind {
                EventType::In => acc.ins += 1,
                EventType::Out => acc.outs += 1,
            }
            acc
        })
}

pub fn snapshot(ledger: &Ledger, today: NaiveDate, days: u32) -> Snapshot {
    let logs = ledger.logs.list();
    Snapshot {
        total_staff: ledger.roster.len(),
        active_now: active_count(ledger.roster.list()),
        today: today_counts(logs, today),
        histogram: daily_histogram(logs, today, days),
    }
}

/// Transient "last event" notice. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct LastEventNotice {
    entry: LogEntry,
    shown_at: DateTime<Utc>,
    window: Duration,
}

impl LastEventNotice {
    pub fn new(entry: LogEntry, shown_at: DateTime<Utc>, window: Duration) -> Self {
        Self {
            entry,
            shown_at,
            window,
        }
    }

    pub fn entry(&self) -> &LogEntry {
        &self.entry
    }

    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        now >= self.shown_at && now - self.shown_at < self.window
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.shown_at + self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventType;
    use chrono::{Local, TimeZone};

    fn at_local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(y, m, d, h, min, s)
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn entry(kind: EventType, timestamp: DateTime<Utc>) -> LogEntry {
        LogEntry {
            id: timestamp.timestamp_millis().to_string(),
            staff_id: "1".into(),
            staff_name: "Ana García".into(),
            kind,
            timestamp,
            photo: None,
            geo: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_log_gives_seven_zero_buckets() {
        let h = daily_histogram(&[], day(2025, 3, 12), HISTOGRAM_DAYS);

        assert_eq!(h.len(), 7);
        assert!(h.iter().all(|b| b.count == 0));
        assert_eq!(h.first().unwrap().date, day(2025, 3, 6));
        assert_eq!(h.last().unwrap().date, day(2025, 3, 12));
        assert_eq!(h.last().unwrap().label, "Wed");
    }

    #[test]
    fn histogram_respects_local_day_boundaries() {
        let logs = vec![
            entry(EventType::In, at_local(2025, 3, 12, 0, 0, 0)),
            entry(EventType::Out, at_local(2025, 3, 12, 23, 59, 59)),
            entry(EventType::Out, at_local(2025, 3, 11, 23, 59, 59)),
            entry(EventType::In, at_local(2025, 3, 5, 12, 0, 0)),
        ];

        let h = daily_histogram(&logs, day(2025, 3, 12), 7);
        let counts: Vec<usize> = h.iter().map(|b| b.count).collect();

        assert_eq!(counts, vec![0, 0, 0, 0, 0, 1, 2]);
    }

    #[test]
    fn today_counts_split_by_type() {
        let logs = vec![
            entry(EventType::In, at_local(2025, 3, 12, 8, 0, 0)),
            entry(EventType::In, at_local(2025, 3, 12, 9, 0, 0)),
            entry(EventType::Out, at_local(2025, 3, 12, 17, 0, 0)),
            entry(EventType::Out, at_local(2025, 3, 11, 17, 0, 0)),
        ];

        assert_eq!(
            today_counts(&logs, day(2025, 3, 12)),
            TodayCounts { ins: 2, outs: 1 }
        );
    }

    #[test]
    fn notice_expires_after_window() {
        let t0 = at_local(2025, 3, 12, 8, 0, 0);
        let notice = LastEventNotice::new(
            entry(EventType::In, t0),
            t0,
            Duration::seconds(i64::from(NOTICE_WINDOW_SECS)),
        );

        assert!(notice.is_visible(t0));
        assert!(notice.is_visible(t0 + Duration::milliseconds(4999)));
        assert!(!notice.is_visible(t0 + Duration::seconds(5)));
        assert_eq!(notice.expires_at(), t0 + Duration::seconds(5));
    }
}
