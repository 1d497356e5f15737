use super::{employment::EmploymentStatus, event_type::Presence};
use serde::{Deserialize, Serialize};

/// A member of the roster.
///
/// `presence` is a cached projection of the log history: it is only
/// written by the attendance reducer (see `core::attendance`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffRecord {
    pub id: String,
    pub name: String,
    pub position: String,
    #[serde(rename = "status")]
    pub employment: EmploymentStatus,
    #[serde(rename = "currentWorkStatus")]
    pub presence: Presence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl StaffRecord {
    /// New active record, clocked out.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: position.into(),
            employment: EmploymentStatus::Active,
            presence: Presence::Out,
            avatar: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.employment.is_active()
    }

    pub fn is_in(&self) -> bool {
        self.presence.is_in()
    }

    /// Case-insensitive match on name or position. An empty query matches.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.position.to_lowercase().contains(&needle)
    }

    /// First letter of the name, used as a placeholder avatar.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('?')
    }
}
