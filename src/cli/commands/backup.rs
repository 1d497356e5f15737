use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let storage = cfg.open_storage()?;
        let written = BackupLogic::backup(&storage, file, *compress, *force)?;
        success(format!(
            "Backup of {} written to {}",
            storage.describe(),
            written.display()
        ));
    }

    Ok(())
}
