//! staffclock library root.
//! Exposes the CLI parser, the high-level `run()` function and the
//! station, storage and reporting modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic log filter (e.g. `debug`).
pub const LOG_ENV: &str = "STAFFCLOCK_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Staff { .. } => cli::commands::staff::handle(cli, cfg),
        Commands::Clock { .. } => cli::commands::clock::handle(&cli.command, cfg),
        Commands::History { .. } => cli::commands::history::handle(cli, cfg),
        Commands::Summary => cli::commands::summary::handle(cfg),
        Commands::Analyze => cli::commands::analyze::handle(cfg),
        Commands::Check { .. } => cli::commands::check::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr so they never mix with command output.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_tracing();

    let cli = Cli::parse();

    // Load config once; command-line overrides win.
    let mut cfg = Config::load()?;
    if let Some(data) = &cli.data {
        cfg.data_dir = data.clone();
    }
    if let Some(storage) = cli.storage {
        cfg.storage = storage;
    }

    tracing::debug!(data = %cfg.data_dir, storage = cfg.storage.as_str(), "configuration loaded");

    dispatch(&cli, &cfg)
}
