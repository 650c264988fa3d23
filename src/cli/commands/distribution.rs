use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::input::{load_batches, resolve_path};

/// Handle the `distribution` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Distribution {
        inputs,
        limit,
        locale,
        format,
        output,
        force,
    } = cmd
    {
        let batches = load_batches(inputs)?;

        // --limit 0 explicitly lifts a configured cap
        let limit = match limit {
            Some(0) => None,
            Some(k) => Some(*k),
            None => cfg.distribution_limit(),
        };
        let slices = Core::distribution(&batches, limit, locale.unwrap_or(cfg.locale))?;

        let out_path = output.as_deref().map(resolve_path);
        let rendered = ExportLogic::render_distribution(&slices, *format, out_path.is_none())?;
        ExportLogic::deliver(&rendered, *format, out_path.as_deref(), *force)?;
    }
    Ok(())
}
