// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::OutputFormat;
use crate::export::csv_out::{distribution_csv, narrative_csv};
use crate::export::fs_utils::ensure_writable;
use crate::export::json::{distribution_json, report_json};
use crate::export::notify_export_success;
use crate::export::text::{distribution_text, narrative_text};
use crate::models::narrative::{DistributionSlice, Report};
use crate::utils::colors::colors_enabled;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Rendering and delivery of analysis output.
pub struct ExportLogic;

impl ExportLogic {
    /// Narrative followed by the hour distribution; colors only apply to
    /// terminal text. CSV carries only the narrative rows.
    pub fn render_report(
        report: &Report,
        format: OutputFormat,
        wrap_width: usize,
        to_terminal: bool,
    ) -> AppResult<String> {
        match format {
            OutputFormat::Text => {
                let color = to_terminal && colors_enabled();
                let mut out = narrative_text(&report.entries, wrap_width, color);
                out.push('\n');
                out.push_str(&distribution_text(&report.distribution, color));
                Ok(out)
            }
            OutputFormat::Json => report_json(report),
            OutputFormat::Csv => narrative_csv(&report.entries),
        }
    }

    pub fn render_distribution(
        slices: &[DistributionSlice],
        format: OutputFormat,
        to_terminal: bool,
    ) -> AppResult<String> {
        match format {
            OutputFormat::Text => Ok(distribution_text(
                slices,
                to_terminal && colors_enabled(),
            )),
            OutputFormat::Json => distribution_json(slices),
            OutputFormat::Csv => distribution_csv(slices),
        }
    }

    /// Write to `output` (asking before overwriting unless `force`) or to stdout.
    pub fn deliver(
        rendered: &str,
        format: OutputFormat,
        output: Option<&Path>,
        force: bool,
    ) -> AppResult<()> {
        match output {
            Some(path) => {
                ensure_writable(path, force)?;
                fs::write(path, ensure_newline(rendered))?;
                notify_export_success(&format.as_str().to_uppercase(), path);
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(ensure_newline(rendered).as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

fn ensure_newline(s: &str) -> String {
    if s.ends_with('\n') {
        s.to_string()
    } else {
        format!("{s}\n")
    }
}
