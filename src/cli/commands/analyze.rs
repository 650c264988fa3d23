use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{AnalysisOptions, Core};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::input::{load_batches, resolve_path};

/// Handle the `analyze` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        inputs,
        finished,
        locale,
        format,
        output,
        force,
    } = cmd
    {
        let batches = load_batches(inputs)?;

        let opts = AnalysisOptions {
            finished: *finished,
            locale: locale.unwrap_or(cfg.locale),
            min_paid_events: cfg.min_paid_for_streaks,
            distribution_limit: cfg.distribution_limit(),
        };
        let report = Core::analyze(&batches, &opts)?;

        let out_path = output.as_deref().map(resolve_path);
        let rendered = ExportLogic::render_report(
            &report,
            *format,
            cfg.wrap_width,
            out_path.is_none(),
        )?;
        ExportLogic::deliver(&rendered, *format, out_path.as_deref(), *force)?;
    }
    Ok(())
}
