use crate::core::admin::DEFAULT_ADMIN_PASSPHRASE;
use crate::core::advisory::DIGEST_WINDOW;
use crate::core::summary::{HISTOGRAM_DAYS, NOTICE_WINDOW_SECS};
use crate::db::file::FileSlots;
use crate::db::memory::MemorySlots;
use crate::db::sqlite::SqliteSlots;
use crate::db::{PersistenceAdapter, StorageKind};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Environment variable that relocates the configuration directory.
pub const HOME_ENV: &str = "STAFFCLOCK_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub storage: StorageKind,
    #[serde(default = "default_admin_passphrase")]
    pub admin_passphrase: String,
    #[serde(default = "default_notice_seconds")]
    pub notice_seconds: u32,
    #[serde(default = "default_history_days")]
    pub history_days: u32,
    #[serde(default = "default_analysis_window")]
    pub analysis_window: usize,
}

fn default_data_dir() -> String {
    Config::config_dir().join("data").to_string_lossy().to_string()
}
fn default_admin_passphrase() -> String {
    DEFAULT_ADMIN_PASSPHRASE.to_string()
}
fn default_notice_seconds() -> u32 {
    NOTICE_WINDOW_SECS
}
fn default_history_days() -> u32 {
    HISTOGRAM_DAYS
}
fn default_analysis_window() -> usize {
    DIGEST_WINDOW
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage: StorageKind::default(),
            admin_passphrase: default_admin_passphrase(),
            notice_seconds: default_notice_seconds(),
            history_days: default_history_days(),
            analysis_window: default_analysis_window(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`$STAFFCLOCK_HOME` or `~/.staffclock`).
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV)
            && !custom.trim().is_empty()
        {
            return expand_tilde(&custom);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".staffclock")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("staffclock.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn sqlite_file(&self) -> PathBuf {
        self.data_path().join("staffclock.sqlite")
    }

    /// Open the configured storage backend.
    pub fn open_storage(&self) -> AppResult<PersistenceAdapter> {
        Ok(match self.storage {
            StorageKind::File => PersistenceAdapter::new(FileSlots::new(self.data_path())),
            StorageKind::Sqlite => PersistenceAdapter::new(SqliteSlots::open(&self.sqlite_file())?),
        })
    }

    /// Open the configured backend, or in-memory slots when it cannot be
    /// opened. The open error is handed back so it can be reported.
    pub fn open_storage_or_memory(&self) -> (PersistenceAdapter, Option<AppError>) {
        match self.open_storage() {
            Ok(storage) => (storage, None),
            Err(e) => {
                warn!(storage = self.storage.as_str(), error = %e, "storage unavailable");
                (PersistenceAdapter::new(MemorySlots::new()), Some(e))
            }
        }
    }

    /// Create the config directory, write the config file (unless `is_test`)
    /// and make sure the data directory exists.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        fs::create_dir_all(self.data_path())?;

        if !is_test {
            self.save()?;
        }
        Ok(())
    }
}
