use crate::core::facts::PublicationFacts;
use crate::core::narrative::{DEFAULT_MIN_PAID_EVENTS, NarrativeBuilder};
use crate::core::series::EventSeries;
use crate::errors::AppResult;
use crate::models::event::RawBatch;
use crate::models::narrative::{DistributionSlice, Report};
use crate::models::time_of_day::Locale;

/// Label of the synthetic remainder slice in the distribution view.
pub fn other_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "other",
        Locale::Zh => "其他",
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub finished: bool,
    pub locale: Locale,
    pub min_paid_events: usize,
    /// Top-K cap for the distribution view; `None` = every non-zero hour.
    pub distribution_limit: Option<usize>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            finished: false,
            locale: Locale::En,
            min_paid_events: DEFAULT_MIN_PAID_EVENTS,
            distribution_limit: None,
        }
    }
}

pub struct Core;

impl Core {
    /// Sort, aggregate and render one publication. Every call builds its
    /// own series and facts; nothing is shared between calls.
    pub fn analyze(batches: &[RawBatch], opts: &AnalysisOptions) -> AppResult<Report> {
        let facts = PublicationFacts::new(EventSeries::from_batches(batches)?);

        let entries = NarrativeBuilder::new(&facts, opts.finished)
            .locale(opts.locale)
            .min_paid_events(opts.min_paid_events)
            .build();

        let distribution = facts
            .histogram()
            .distribution(opts.distribution_limit, other_label(opts.locale));

        Ok(Report {
            entries,
            distribution,
        })
    }

    /// Hour-of-day distribution only; skips narrative rendering.
    pub fn distribution(
        batches: &[RawBatch],
        limit: Option<usize>,
        locale: Locale,
    ) -> AppResult<Vec<DistributionSlice>> {
        let facts = PublicationFacts::new(EventSeries::from_batches(batches)?);
        Ok(facts.histogram().distribution(limit, other_label(locale)))
    }
}
