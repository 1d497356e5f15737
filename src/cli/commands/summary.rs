use super::open_station;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, RED, RESET};
use crate::utils::formatting::{bar, bold};

const BAR_WIDTH: usize = 30;

/// Handle the `summary` command: presence counters plus the daily histogram.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let station = open_station(cfg)?;
    let snap = station.snapshot(cfg.history_days);

    header("Attendance summary");
    println!("{:<18}{}", "Staff members:", bold(&snap.total_staff.to_string()));
    println!("{:<18}{GREEN}{}{RESET}", "Working now:", snap.active_now);
    println!(
        "{:<18}{GREEN}{} in{RESET} / {RED}{} out{RESET}",
        "Today:", snap.today.ins, snap.today.outs
    );

    println!("\n{}", bold(&format!("Last {} days", snap.histogram.len())));
    for day in &snap.histogram {
        println!(
            "  {} {}  {:>3} {}",
            day.label,
            day.date.format("%d/%m"),
            day.count,
            bar(day.count, BAR_WIDTH)
        );
    }

    if let Some(last) = station.logs().head() {
        println!(
            "\nLatest entry: {} {} at {}",
            last.staff_name,
            last.kind.et_as_str(),
            last.get_date_time()
        );
    }

    Ok(())
}
