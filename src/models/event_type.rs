use serde::{Deserialize, Serialize};

/// Kind of a clock event. Stored as `"IN"` / `"OUT"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventType {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

/// Presence of a staff member is the type of their latest event.
pub type Presence = EventType;

impl EventType {
    pub fn et_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }

    pub fn et_as_str(&self) -> &'static str {
        match self {
            EventType::In => "in",
            EventType::Out => "out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventType::In)
    }
}
