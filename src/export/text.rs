use crate::models::narrative::{DistributionSlice, NarrativeEntry};
use crate::utils::colors::{CYAN, GREEN, GREY, paint};
use crate::utils::table::{Column, Table};

const BAR_WIDTH: usize = 30;

/// Dated blocks, every content line wrapped at `width` and indented.
pub(crate) fn narrative_text(entries: &[NarrativeEntry], width: usize, color: bool) -> String {
    let mut out = String::new();

    let opts = textwrap::Options::new(width)
        .initial_indent("  ")
        .subsequent_indent("    ");

    for entry in entries {
        let heading = if entry.date.is_some() { CYAN } else { GREY };
        out.push_str(&paint(&entry.date_label(), heading, color));
        out.push('\n');

        for line in entry.content.iter().flat_map(|c| c.lines()) {
            for wrapped in textwrap::wrap(line, &opts) {
                out.push_str(&wrapped);
                out.push('\n');
            }
        }
    }

    out
}

/// Aligned table with a proportional bar per slice.
pub(crate) fn distribution_text(slices: &[DistributionSlice], color: bool) -> String {
    let total: u32 = slices.iter().map(|s| s.value).sum();
    let max = slices.iter().map(|s| s.value).max().unwrap_or(0);

    let mut table = Table::new(vec![
        Column::new("hour"),
        Column::new("count"),
        Column::new("share"),
        Column::new(""),
    ]);

    for s in slices {
        let share = if total > 0 {
            s.value as f64 * 100.0 / total as f64
        } else {
            0.0
        };
        let bar_len = if max > 0 {
            (s.value as usize * BAR_WIDTH).div_ceil(max as usize)
        } else {
            0
        };

        table.add_row(vec![
            s.name.clone(),
            s.value.to_string(),
            format!("{share:.1}%"),
            paint(&"█".repeat(bar_len), GREEN, color),
        ]);
    }

    let mut out = table.render();
    out.push_str(&format!("total: {total}\n"));
    out
}
