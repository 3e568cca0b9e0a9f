//! sbcdb library root.
//! Exposes the CLI parser, the high-level run() function, and the schema initializer.

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_file: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Database { .. } => cli::commands::database::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_file),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_file = Config::resolve_file(cli.config.as_deref());
    let cfg = Config::load_from(&config_file)?;

    dispatch(&cli, &cfg, &config_file)
}
