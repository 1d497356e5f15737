//! Admin gate: a shared passphrase compared verbatim.
//!
//! Every roster or log administration call on `Station` takes an
//! `&AdminSession`, and the only way to get one is `AdminGate::unlock`.

use crate::errors::{AppError, AppResult};

pub const DEFAULT_ADMIN_PASSPHRASE: &str = "admin123";

pub struct AdminGate {
    passphrase: String,
}

/// Proof that the passphrase was entered. Lives until dropped.
#[derive(Debug)]
pub struct AdminSession {
    _unlocked: (),
}

impl AdminGate {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    pub fn unlock(&self, attempt: &str) -> AppResult<AdminSession> {
        if attempt == self.passphrase {
            Ok(AdminSession { _unlocked: () })
        } else {
            Err(AppError::AccessDenied("incorrect admin passphrase".into()))
        }
    }

    /// Unlock from an optional attempt, as supplied on the command line.
    pub fn unlock_opt(&self, attempt: Option<&str>) -> AppResult<AdminSession> {
        match attempt {
            Some(a) => self.unlock(a),
            None => Err(AppError::AccessDenied(
                "admin passphrase required (--admin-pass or STAFFCLOCK_ADMIN_PASS)".into(),
            )),
        }
    }
}

impl Default for AdminGate {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_PASSPHRASE)
    }
}
