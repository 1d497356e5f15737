use super::open_station;
use crate::config::Config;
use crate::core::advisory::{AttendanceDigest, LocalAdvisor, narrative};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

const WRAP_WIDTH: usize = 80;

/// Handle the `analyze` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let station = open_station(cfg)?;
    let digest = AttendanceDigest::build(
        station.logs().list(),
        station.roster().list(),
        cfg.analysis_window,
    );

    header("Attendance analysis");
    info(format!(
        "Based on the latest {} event(s) of {} staff member(s).",
        digest.rows.len(),
        digest.staff.len()
    ));
    println!();

    for paragraph in narrative(&LocalAdvisor, &digest).lines() {
        for line in textwrap::wrap(paragraph, WRAP_WIDTH) {
            println!("{line}");
        }
    }

    Ok(())
}
