//! Roster store: the set of staff records, in insertion order.

use crate::errors::{AppError, AppResult};
use crate::models::{EmploymentStatus, Presence, StaffRecord};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    staff: Vec<StaffRecord>,
}

/// Records used when no roster has been persisted yet.
pub fn seed_roster() -> Vec<StaffRecord> {
    vec![
        StaffRecord::new("1", "Ana García", "Desarrolladora Senior"),
        StaffRecord::new("2", "Carlos Ruiz", "Diseñador UI/UX"),
        StaffRecord::new("3", "Elena Beltrán", "Gerente de Proyecto"),
    ]
}

impl Roster {
    pub fn new(staff: Vec<StaffRecord>) -> Self {
        Self { staff }
    }

    pub fn seeded() -> Self {
        Self::new(seed_roster())
    }

    /// Register a new member: fresh id, active, clocked out.
    pub fn add(&mut self, name: &str, position: &str) -> AppResult<StaffRecord> {
        let name = name.trim();
        let position = position.trim();

        if name.is_empty() {
            return Err(AppError::Validation("name must not be empty".into()));
        }
        if position.is_empty() {
            return Err(AppError::Validation("position must not be empty".into()));
        }

        let record = StaffRecord::new(Uuid::new_v4().to_string(), name, position);
        self.staff.push(record.clone());
        Ok(record)
    }

    /// Returns `true` when the status actually changed.
    pub fn set_employment_status(
        &mut self,
        id: &str,
        status: EmploymentStatus,
    ) -> AppResult<bool> {
        let record = self.get_mut(id)?;
        if record.employment == status {
            return Ok(false);
        }
        record.employment = status;
        Ok(true)
    }

    pub fn toggle_employment_status(&mut self, id: &str) -> AppResult<EmploymentStatus> {
        let record = self.get_mut(id)?;
        record.employment = record.employment.toggled();
        Ok(record.employment)
    }

    /// Hard delete. Log rows referencing the id are left in place.
    pub fn remove(&mut self, id: &str) -> AppResult<StaffRecord> {
        let idx = self
            .staff
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::StaffNotFound(id.to_string()))?;
        Ok(self.staff.remove(idx))
    }

    pub fn list(&self) -> &[StaffRecord] {
        &self.staff
    }

    pub fn get(&self, id: &str) -> Option<&StaffRecord> {
        self.staff.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.staff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }

    /// Active members only: who may clock in/out at the station.
    pub fn clock_roster(&self) -> Vec<&StaffRecord> {
        self.staff.iter().filter(|s| s.is_active()).collect()
    }

    /// Case-insensitive match on name or position among active members.
    pub fn search(&self, query: &str) -> Vec<&StaffRecord> {
        self.clock_roster()
            .into_iter()
            .filter(|s| s.matches(query))
            .collect()
    }

    pub(crate) fn set_presence(&mut self, id: &str, presence: Presence) -> AppResult<()> {
        self.get_mut(id)?.presence = presence;
        Ok(())
    }

    pub(crate) fn records_mut(&mut self) -> impl Iterator<Item = &mut StaffRecord> {
        self.staff.iter_mut()
    }

    fn get_mut(&mut self, id: &str) -> AppResult<&mut StaffRecord> {
        self.staff
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::StaffNotFound(id.to_string()))
    }
}
