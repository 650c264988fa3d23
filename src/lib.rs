//! rSerialStats library root.
//! Exposes the release-statistics engine, the CLI parser and a high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod input;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Analyze { .. } => cli::commands::analyze::handle(&cli.command, cfg),
        Commands::Distribution { .. } => cli::commands::distribution::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ resolve and load config once (test mode: built-in defaults)
    let config_path = cli
        .config
        .as_deref()
        .map(input::resolve_path)
        .unwrap_or_else(Config::config_file);

    let cfg = if cli.test {
        Config::default()
    } else {
        Config::load_from(&config_path)?
    };

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
