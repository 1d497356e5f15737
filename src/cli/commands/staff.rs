use super::{admin_session, open_station, settle};
use crate::cli::parser::{Cli, Commands, StaffAction};
use crate::config::Config;
use crate::core::station::Station;
use crate::errors::AppResult;
use crate::models::{EmploymentStatus, StaffRecord};
use crate::ui::messages::{info, success};
use crate::utils::colors::{colorize_employment, colorize_event};
use crate::utils::path::ask_confirmation;
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Staff { action } = &cli.command else {
        return Ok(());
    };

    let mut station = open_station(cfg)?;

    match action {
        StaffAction::List { all, search } => {
            let roster = station.roster();
            let rows: Vec<&StaffRecord> = match search {
                Some(q) if !*all => roster.search(q),
                Some(q) => roster.list().iter().filter(|s| s.matches(q)).collect(),
                None if *all => roster.list().iter().collect(),
                None => roster.clock_roster(),
            };
            print_roster(&rows);
        }

        StaffAction::Add { name, position } => {
            let admin = admin_session(cli, cfg)?;
            let record = settle(station.add_staff(&admin, name, position)?);
            success(format!(
                "Registered {} ({}) with id {}",
                record.name, record.position, record.id
            ));
        }

        StaffAction::Activate { id } => {
            set_status(cli, cfg, &mut station, id, EmploymentStatus::Active)?
        }

        StaffAction::Deactivate { id } => {
            set_status(cli, cfg, &mut station, id, EmploymentStatus::Inactive)?
        }

        StaffAction::Toggle { id } => {
            let admin = admin_session(cli, cfg)?;
            let status = settle(station.toggle_employment_status(&admin, id)?);
            success(format!("Staff {id} is now {}.", status.as_str()));
        }

        StaffAction::Remove { id, yes } => {
            let admin = admin_session(cli, cfg)?;

            let name = station
                .roster()
                .get(id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| id.clone());
            if !*yes
                && !ask_confirmation(&format!(
                    "Remove {name}? Their attendance history is kept."
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = settle(station.remove_staff(&admin, id)?);
            success(format!("Removed {} ({}).", removed.name, removed.id));
        }
    }

    Ok(())
}

fn set_status(
    cli: &Cli,
    cfg: &Config,
    station: &mut Station,
    id: &str,
    status: EmploymentStatus,
) -> AppResult<()> {
    let admin = admin_session(cli, cfg)?;
    if settle(station.set_employment_status(&admin, id, status)?) {
        success(format!("Staff {id} is now {}.", status.as_str()));
    } else {
        info(format!("Staff {id} is already {}.", status.as_str()));
    }
    Ok(())
}

fn print_roster(rows: &[&StaffRecord]) {
    if rows.is_empty() {
        info("No staff members match.");
        return;
    }

    let mut table = Table::new(["ID", "NAME", "POSITION", "STATUS", "PRESENCE"]);
    for s in rows {
        table.add_row(vec![
            s.id.clone(),
            format!("{} {}", s.initial(), s.name),
            s.position.clone(),
            colorize_employment(s.employment),
            colorize_event(s.presence),
        ]);
    }
    print!("{}", table.render());
}
