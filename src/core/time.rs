//! Time sources for clock events.
//!
//! Timestamps are kept at millisecond precision so that what is written to
//! storage is exactly what was held in memory.

use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::rc::Rc;

pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock, truncated to milliseconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now(&self) -> DateTime<Utc> {
        truncate_millis(Utc::now())
    }
}

/// A manually driven clock. Useful for replaying events and in tests.
#[derive(Debug)]
pub struct FixedTime {
    current: Cell<DateTime<Utc>>,
}

impl FixedTime {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            current: Cell::new(truncate_millis(instant)),
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.current.set(self.current.get() + by);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> DateTime<Utc> {
        self.current.get()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Rc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

pub fn truncate_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(instant.timestamp_millis()).unwrap_or(instant)
}
