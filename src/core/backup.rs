//! Backup of both storage slots.
//!
//! Plain backups are a single JSON document keyed by slot name; compressed
//! backups are a zip archive with one `<slot>.json` entry per slot.

use crate::db::{PersistenceAdapter, Slot};
use crate::errors::{AppError, AppResult};
use crate::utils::path::{ensure_writable, expand_tilde};
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Returns the path actually written (`.zip` when compressed).
    pub fn backup(
        storage: &PersistenceAdapter,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let dest = expand_tilde(dest_file);
        let dest = if compress {
            dest.with_extension("zip")
        } else {
            dest
        };

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(&dest, force)?;

        let mut slots = Vec::new();
        for slot in Slot::ALL {
            if let Some(raw) = storage.read_raw(slot)? {
                slots.push((slot, raw));
            }
        }

        if slots.is_empty() {
            return Err(AppError::Other(format!(
                "nothing to back up in {}",
                storage.describe()
            )));
        }

        if compress {
            write_zip(&dest, &slots)?;
        } else {
            write_bundle(&dest, &slots)?;
        }

        Ok(dest)
    }
}

fn write_bundle(dest: &Path, slots: &[(Slot, String)]) -> AppResult<()> {
    let mut bundle = Map::new();
    for (slot, raw) in slots {
        // Unparseable slots are kept verbatim as a string.
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.clone()));
        bundle.insert(slot.key().to_string(), value);
    }

    let mut file = File::create(dest)?;
    file.write_all(serde_json::to_string_pretty(&Value::Object(bundle))?.as_bytes())?;
    Ok(())
}

fn write_zip(dest: &Path, slots: &[(Slot, String)]) -> AppResult<()> {
    let file = File::create(dest)?;
    let mut zip = ZipWriter::new(file);

    for (slot, raw) in slots {
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        zip.start_file(format!("{}.json", slot.key()), options)
            .map_err(std::io::Error::other)?;
        zip.write_all(raw.as_bytes())?;
    }

    zip.finish().map_err(std::io::Error::other)?;
    Ok(())
}
