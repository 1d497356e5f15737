//! Slots stored as rows of an embedded SQLite database.

use super::migrate::run_pending_migrations;
use super::slots::{Slot, SlotStore};
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};

pub struct SqliteSlots {
    pub conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteSlots {
    pub fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        run_pending_migrations(&conn).map_err(|e| AppError::Migration(e.to_string()))?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// Write an internal log line into the `log` table.
    pub fn ttlog(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();

        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        stmt.execute(params![now, operation, target, message])?;
        Ok(())
    }
}

impl SlotStore for SqliteSlots {
    fn read(&self, slot: Slot) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1",
                [slot.key()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, slot: Slot, payload: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE
             SET value = excluded.value, updated_at = excluded.updated_at",
            params![slot.key(), payload, Local::now().to_rfc3339()],
        )?;
        self.ttlog("save", slot.key(), &format!("{} bytes", payload.len()))?;
        Ok(())
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(p) => p.display().to_string(),
            None => ":memory:".to_string(),
        }
    }
}
