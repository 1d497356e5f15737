use super::{admin_session, open_station, settle};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::colors::colorize_event;
use crate::utils::table::Table;

/// Handle the `check` command: compare cached presence with the log history.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Check { repair } = &cli.command else {
        return Ok(());
    };

    let mut station = open_station(cfg)?;
    let mismatches = station.ledger().presence_mismatches();

    if mismatches.is_empty() {
        success("Presence of every staff member matches the attendance log.");
        return Ok(());
    }

    let mut table = Table::new(["ID", "NAME", "CACHED", "FROM LOG"]);
    for m in &mismatches {
        table.add_row(vec![
            m.staff_id.clone(),
            m.staff_name.clone(),
            colorize_event(m.cached),
            colorize_event(m.from_history),
        ]);
    }
    print!("{}", table.render());

    if !*repair {
        warning(format!(
            "{} mismatch(es) found. Run with --repair to fix them.",
            mismatches.len()
        ));
        return Ok(());
    }

    let admin = admin_session(cli, cfg)?;
    let fixed = settle(station.repair_presence(&admin));
    success(format!("Repaired presence for {fixed} staff member(s)."));
    Ok(())
}
