use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warnings};
use tracing::info;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data directory
///  - both storage slots, seeded when empty
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing staffclock…");

    cfg.init_all(cli.test)?;
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }

    let mut storage = cfg.open_storage()?;
    println!("🗄️  Storage     : {} ({})", storage.describe(), cfg.storage.as_str());

    let loaded = storage.load();
    warnings(&loaded.warnings);

    if loaded.seeded || !loaded.warnings.is_empty() {
        let failed = storage.save_all(&loaded.ledger);
        if !failed.is_empty() {
            warnings(&failed);
        }
        info!(staff = loaded.ledger.roster.len(), "storage initialized");
    }

    success(format!(
        "Ready: {} staff member(s), {} log entr{}.",
        loaded.ledger.roster.len(),
        loaded.ledger.logs.len(),
        if loaded.ledger.logs.len() == 1 { "y" } else { "ies" }
    ));
    Ok(())
}
