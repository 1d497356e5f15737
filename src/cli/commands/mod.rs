pub mod analyze;
pub mod backup;
pub mod check;
pub mod clock;
pub mod config;
pub mod export;
pub mod history;
pub mod init;
pub mod staff;
pub mod summary;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::admin::{AdminGate, AdminSession};
use crate::core::station::{Persisted, Station};
use crate::core::time::SystemTime;
use crate::errors::AppResult;
use crate::ui::messages::warnings;
use chrono::Duration;

/// Rehydrate the station from the configured storage. An unusable backend
/// degrades to an in-memory session instead of aborting the command.
pub(crate) fn open_station(cfg: &Config) -> AppResult<Station> {
    let (storage, open_problem) = cfg.open_storage_or_memory();
    let (station, load_warnings) = Station::open(storage, SystemTime);
    warnings(open_problem.iter().chain(&load_warnings));
    if open_problem.is_some() {
        crate::ui::messages::warning("Using the initial roster for this session only.");
    }
    Ok(station.with_notice_window(Duration::seconds(i64::from(cfg.notice_seconds))))
}

pub(crate) fn admin_session(cli: &Cli, cfg: &Config) -> AppResult<AdminSession> {
    AdminGate::new(cfg.admin_passphrase.clone()).unlock_opt(cli.admin_pass.as_deref())
}

/// Report storage warnings of a committed mutation and hand back its value.
pub(crate) fn settle<T>(outcome: Persisted<T>) -> T {
    if !outcome.is_durable() {
        warnings(&outcome.warnings);
        crate::ui::messages::warning("Changes are kept for this session only.");
    }
    outcome.value
}
