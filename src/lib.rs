//! zeitkonto library root.
//! Exposes the CLI parser, the high-level `run()` function and the
//! internal modules used by the binary and the integration tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing::debug;

fn open_store(cfg: &Config) -> AppResult<Box<dyn store::WorkDayStore>> {
    let store = store::open(cfg)?;
    debug!(backend = ?cfg.backend, "store opened");
    Ok(store)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cmd = &cli.command;
    match cmd {
        Commands::Init => cli::commands::init::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(cmd, cfg),
        Commands::Add { .. } => cli::commands::add::handle(cmd, open_store(cfg)?.as_ref()),
        Commands::List { .. } => {
            cli::commands::list::handle(cmd, cfg, open_store(cfg)?.as_ref())
        }
        Commands::Del { .. } => cli::commands::del::handle(cmd, open_store(cfg)?.as_ref()),
        Commands::Export { .. } => {
            cli::commands::export::handle(cmd, cfg, open_store(cfg)?.as_ref())
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(backend) = cli.backend {
        cfg.backend = backend;
    }

    logging::init_logging(&cfg.log_level, cli.verbose);
    debug!(config = %Config::config_file().display(), "starting");

    dispatch(&cli, &cfg)
}
