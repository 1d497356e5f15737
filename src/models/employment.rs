use serde::{Deserialize, Serialize};

/// Employment state toggled by an administrator.
/// Inactive staff keep their history but leave the clock-in roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EmploymentStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "INACTIVE")]
    Inactive,
}

impl EmploymentStatus {
    pub fn toggled(self) -> Self {
        match self {
            EmploymentStatus::Active => EmploymentStatus::Inactive,
            EmploymentStatus::Inactive => EmploymentStatus::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentStatus::Active => "active",
            EmploymentStatus::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EmploymentStatus::Active)
    }
}
