use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
/// In test mode nothing is written.
pub fn handle(cli: &Cli, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        if cli.test {
            info("Test mode: configuration file not written.");
            return Ok(());
        }

        if config_path.exists() && !*force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                config_path.display()
            )));
        }

        Config::default().save_to(config_path)?;
        success(format!("Config file: {}", config_path.display()));
    }
    Ok(())
}
