//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage migration error: {0}")]
    Migration(String),

    /// The in-memory state is still valid; only the durable copy is stale.
    #[error("Could not persist '{slot}': {reason}")]
    PersistenceWrite { slot: String, reason: String },

    // ---------------------------
    // Roster / attendance
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Staff member not found: {0}")]
    StaffNotFound(String),

    #[error("Invalid event type: {0}")]
    InvalidEventType(String),

    // ---------------------------
    // Collaborators
    // ---------------------------
    #[error("Capture unavailable: {0}")]
    CaptureUnavailable(String),

    #[error("Advisory service error: {0}")]
    Advisory(String),

    // ---------------------------
    // Admin gate
    // ---------------------------
    #[error("Access denied: {0}")]
    AccessDenied(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Errors that are reported to the operator but never abort an action.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::PersistenceWrite { .. }
                | AppError::CaptureUnavailable(_)
                | AppError::Advisory(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
