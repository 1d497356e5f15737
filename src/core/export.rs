//! History export to CSV / JSON.

use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::{ensure_writable, expand_tilde};
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat row written by every format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LogExport {
    pub id: String,
    pub staff_id: String,
    pub staff_name: String,
    pub kind: String,
    pub date: String,
    pub time: String,
    pub timestamp_ms: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub has_photo: bool,
}

impl From<&LogEntry> for LogExport {
    fn from(e: &LogEntry) -> Self {
        let local = e.local_time();
        Self {
            id: e.id.clone(),
            staff_id: e.staff_id.clone(),
            staff_name: e.staff_name.clone(),
            kind: e.kind.et_as_str().to_string(),
            date: local.format("%Y-%m-%d").to_string(),
            time: local.format("%H:%M:%S").to_string(),
            timestamp_ms: e.timestamp.timestamp_millis(),
            latitude: e.geo.map(|g| g.latitude),
            longitude: e.geo.map(|g| g.longitude),
            has_photo: e.has_photo(),
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write `logs` to `file`. Returns the number of exported rows.
    pub fn export(
        logs: &[LogEntry],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if logs.is_empty() {
            warning("No attendance records to export.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        let rows: Vec<LogExport> = logs.iter().map(LogExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        Ok(rows.len())
    }
}

fn export_json(rows: &[LogExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

fn export_csv(rows: &[LogExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr =
        csv::Writer::from_path(path).map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
