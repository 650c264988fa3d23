//! Aggregated statistics over one publication's release series.
//!
//! Everything except streaks is computed in a single forward pass when the
//! facts are built; streaks are scanned on first request and cached for the
//! lifetime of the instance.

use crate::core::calculator::histogram::HourHistogram;
use crate::core::calculator::streaks::{GapInfo, RunInfo, StreakSummary, analyze_streaks};
use crate::core::series::EventSeries;
use crate::models::event::Event;
use crate::utils::date::day_interval;
use chrono::{NaiveDate, NaiveTime, Timelike};
use std::cell::OnceCell;

/// Hour the "logical" day starts at for earliest/latest comparisons.
const DAY_START_HOUR: u32 = 6;

/// Day with the most releases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusiestDay {
    /// First release of that day.
    pub anchor: Event,
    pub count: usize,
}

#[derive(Debug)]
pub struct PublicationFacts {
    series: EventSeries,
    paid: Vec<usize>,
    free: Vec<usize>,
    paid_words: u64,
    min_paid: Option<usize>,
    max_paid: Option<usize>,
    earliest: usize,
    latest: usize,
    busiest: BusiestDay,
    histogram: HourHistogram,
    streaks: OnceCell<StreakSummary>,
}

impl PublicationFacts {
    pub fn new(series: EventSeries) -> Self {
        let mut paid = Vec::new();
        let mut free = Vec::new();
        let mut paid_words = 0;
        let mut min_paid: Option<usize> = None;
        let mut max_paid: Option<usize> = None;
        let mut earliest = 0;
        let mut latest = 0;
        let mut histogram = HourHistogram::new();

        for (idx, ev) in series.iter().enumerate() {
            histogram.record(ev.hour());

            if ev.is_paid() {
                paid.push(idx);
                paid_words += ev.size;

                // strict comparisons: the first extreme seen is kept
                match min_paid {
                    Some(m) if ev.size >= series[m].size => {}
                    _ => min_paid = Some(idx),
                }
                match max_paid {
                    Some(m) if ev.size <= series[m].size => {}
                    _ => max_paid = Some(idx),
                }
            } else {
                free.push(idx);
            }

            let t = ev.time();
            if series[earliest].time() > t && is_daytime(t) {
                earliest = idx;
            }
            if supersedes_latest(series[latest].time(), t) {
                latest = idx;
            }
        }

        let busiest = find_busiest_day(&series);

        tracing::debug!(
            total = series.len(),
            paid = paid.len(),
            free = free.len(),
            busiest_count = busiest.count,
            "publication facts computed"
        );

        Self {
            series,
            paid,
            free,
            paid_words,
            min_paid,
            max_paid,
            earliest,
            latest,
            busiest,
            histogram,
            streaks: OnceCell::new(),
        }
    }

    pub fn series(&self) -> &EventSeries {
        &self.series
    }

    pub fn total_count(&self) -> usize {
        self.series.len()
    }

    pub fn paid_count(&self) -> usize {
        self.paid.len()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn paid_events(&self) -> Vec<&Event> {
        self.paid.iter().map(|&i| &self.series[i]).collect()
    }

    pub fn free_events(&self) -> Vec<&Event> {
        self.free.iter().map(|&i| &self.series[i]).collect()
    }

    pub fn first_event(&self) -> &Event {
        self.series.first()
    }

    pub fn first_paid(&self) -> Option<&Event> {
        self.paid.first().map(|&i| &self.series[i])
    }

    /// Last paid release; only meaningful for a completed publication.
    pub fn last_paid(&self) -> Option<&Event> {
        self.paid.last().map(|&i| &self.series[i])
    }

    pub fn max_size_paid(&self) -> Option<&Event> {
        self.max_paid.map(|i| &self.series[i])
    }

    pub fn min_size_paid(&self) -> Option<&Event> {
        self.min_paid.map(|i| &self.series[i])
    }

    /// Integer mean word count of paid releases; 0 without a paid tier.
    pub fn average_paid_size(&self) -> u64 {
        if self.paid.is_empty() {
            return 0;
        }
        self.paid_words / self.paid.len() as u64
    }

    pub fn earliest_time_of_day(&self) -> &Event {
        &self.series[self.earliest]
    }

    pub fn latest_time_of_day(&self) -> &Event {
        &self.series[self.latest]
    }

    pub fn busiest_day(&self) -> &BusiestDay {
        &self.busiest
    }

    pub fn histogram(&self) -> &HourHistogram {
        &self.histogram
    }

    /// Paid-only series when a paid tier exists, otherwise the whole series.
    pub fn streaks(&self) -> &StreakSummary {
        self.streaks.get_or_init(|| {
            let events: Vec<&Event> = if self.paid.is_empty() {
                self.series.iter().collect()
            } else {
                self.paid_events()
            };
            analyze_streaks(&events)
        })
    }

    pub fn longest_run(&self) -> Option<&RunInfo> {
        self.streaks().longest_run.as_ref()
    }

    /// Hiatus is only reported across the paid tier.
    pub fn longest_gap(&self) -> Option<&GapInfo> {
        if self.paid.is_empty() {
            return None;
        }
        self.streaks().longest_gap.as_ref()
    }

    /// Day span between the first release and the last paid release.
    pub fn completion_span(&self) -> Option<i64> {
        self.last_paid()
            .map(|last| day_interval(self.first_event().date(), last.date()))
    }
}

fn is_daytime(t: NaiveTime) -> bool {
    t.hour() >= DAY_START_HOUR
}

/// Releases before 06:00 belong to the previous logical day. While one of
/// them is recorded, any daytime release replaces it, and so does an even
/// earlier small-hours release. A daytime record is replaced by any release
/// at the same or a later clock time.
fn supersedes_latest(current: NaiveTime, candidate: NaiveTime) -> bool {
    if !is_daytime(current) {
        is_daytime(candidate) || candidate < current
    } else {
        candidate >= current
    }
}

/// Same-day releases are contiguous in a sorted series; the first day with
/// the strictly highest count wins.
fn find_busiest_day(series: &EventSeries) -> BusiestDay {
    let events = series.events();
    let mut best_start = 0;
    let mut best_count = 0;

    let mut i = 0;
    while i < events.len() {
        let day: NaiveDate = events[i].date();
        let mut j = i + 1;
        while j < events.len() && events[j].date() == day {
            j += 1;
        }

        if j - i > best_count {
            best_start = i;
            best_count = j - i;
        }
        i = j;
    }

    BusiestDay {
        anchor: events[best_start].clone(),
        count: best_count,
    }
}
