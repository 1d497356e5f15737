//! One JSON file per slot inside a data directory.

use super::slots::{Slot, SlotStore};
use crate::errors::AppResult;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct FileSlots {
    dir: PathBuf,
}

impl FileSlots {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn slot_path(&self, slot: Slot) -> PathBuf {
        self.dir.join(format!("{}.json", slot.key()))
    }
}

impl SlotStore for FileSlots {
    fn read(&self, slot: Slot) -> AppResult<Option<String>> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, slot: Slot, payload: &str) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;

        // write-then-rename so a failed write never truncates the old slot
        let target = self.slot_path(slot);
        let tmp = target.with_extension("json.tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}
