//! Longest run of consecutive release days and longest hiatus between runs.
//!
//! A run is a block of events whose neighbouring dates are at most one day
//! apart. Its length counts from the first event's date up to the day after
//! the last event (inclusive), so three consecutive daily releases form a
//! four-day run. The hiatus after a run starts on that day-after and lasts
//! until the first release of the next run.

use crate::models::event::Event;
use crate::utils::date::{day_interval, next_day};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInfo {
    /// First event of the run.
    pub start: Event,
    pub days: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapInfo {
    /// First day without a release.
    pub start: NaiveDate,
    pub days: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreakSummary {
    pub longest_run: Option<RunInfo>,
    pub longest_gap: Option<GapInfo>,
}

/// Two-pointer scan over a time-ordered event slice.
///
/// Only strictly longer runs/gaps replace the recorded one, so the earliest
/// of several equal maxima wins. With fewer than two events nothing is
/// reported. The trailing block (the one starting at the last event) is
/// never measured on its own.
pub fn analyze_streaks(events: &[&Event]) -> StreakSummary {
    let n = events.len();
    let mut summary = StreakSummary::default();
    let mut best_run = 1;
    let mut best_gap = 0;

    let mut i = 0;
    while i + 1 < n {
        let mut j = i;
        while j + 1 < n && day_interval(events[j].date(), events[j + 1].date()) <= 1 {
            j += 1;
        }

        let run_end = next_day(events[j].date());
        let run_days = day_interval(events[i].date(), run_end) + 1;
        if run_days > best_run {
            best_run = run_days;
            summary.longest_run = Some(RunInfo {
                start: events[i].clone(),
                days: run_days,
            });
        }

        if j + 1 < n {
            let gap_days = day_interval(run_end, events[j + 1].date());
            if gap_days > best_gap {
                best_gap = gap_days;
                summary.longest_gap = Some(GapInfo {
                    start: run_end,
                    days: gap_days,
                });
            }
        }

        i = j + 1;
    }

    tracing::debug!(
        run = summary.longest_run.as_ref().map(|r| r.days),
        gap = summary.longest_gap.as_ref().map(|g| g.days),
        "streak scan finished"
    );
    summary
}
