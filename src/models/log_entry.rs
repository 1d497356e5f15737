use super::{event_type::EventType, geo::GeoPoint};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One attendance event. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub staff_id: String,
    /// Name at event time; not updated if the staff record changes later.
    pub staff_name: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    /// Epoch milliseconds on disk.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Opaque encoded image (`data:<mime>;base64,...`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, rename = "location", skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoPoint>,
}

impl LogEntry {
    pub fn local_time(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }

    /// Calendar day of the event in local time.
    pub fn local_date(&self) -> NaiveDate {
        self.local_time().date_naive()
    }

    pub fn get_date_time(&self) -> String {
        self.local_time().format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }
}
