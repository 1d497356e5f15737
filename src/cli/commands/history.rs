use super::{admin_session, open_station, settle};
use crate::cli::parser::{Cli, Commands, HistoryAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::LogEntry;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{colorize_event, colorize_optional};
use crate::utils::path::ask_confirmation;
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::History {
        action,
        staff,
        limit,
    } = &cli.command
    else {
        return Ok(());
    };

    let mut station = open_station(cfg)?;

    if let Some(HistoryAction::Clear { yes }) = action {
        let admin = admin_session(cli, cfg)?;
        let request = station.request_clear(&admin);

        if request.pending() == 0 {
            info("The attendance log is already empty.");
            return Ok(());
        }

        if !*yes
            && !ask_confirmation(&format!(
                "Delete all {} log entries? This cannot be undone.",
                request.pending()
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = settle(station.commit_clear(&admin, request));
        success(format!("Attendance log cleared ({removed} entries removed)."));
        return Ok(());
    }

    let logs = station.logs();
    let rows: Vec<&LogEntry> = match staff {
        Some(id) => logs.for_staff(id).take(limit.unwrap_or(usize::MAX)).collect(),
        None => logs.recent(limit.unwrap_or(logs.len())).iter().collect(),
    };

    if rows.is_empty() {
        warning("No attendance records found.");
        return Ok(());
    }

    let mut table = Table::new(["DATE", "TIME", "NAME", "TYPE", "LOCATION", "PHOTO"]);
    for e in &rows {
        let local = e.local_time();
        table.add_row(vec![
            local.format("%Y-%m-%d").to_string(),
            local.format("%H:%M:%S").to_string(),
            e.staff_name.clone(),
            colorize_event(e.kind),
            colorize_optional(&e.geo.map(|g| g.describe()).unwrap_or_else(|| "-".into())),
            colorize_optional(if e.has_photo() { "yes" } else { "-" }),
        ]);
    }
    print!("{}", table.render());
    info(format!("{} of {} entries shown.", rows.len(), logs.len()));

    Ok(())
}
