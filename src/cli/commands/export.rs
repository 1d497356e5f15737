use super::open_station;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let station = open_station(cfg)?;
        ExportLogic::export(station.logs().list(), *format, file, *force)?;
    }
    Ok(())
}
