//! Renders publication facts as a date-ordered list of narrative entries.

use crate::core::facts::PublicationFacts;
use crate::models::event::Event;
use crate::models::narrative::NarrativeEntry;
use crate::models::time_of_day::{Locale, TimeOfDay};
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

/// Paid releases needed before streak, tier-entry and size entries appear.
pub const DEFAULT_MIN_PAID_EVENTS: usize = 10;

/// A rendered line waiting to be grouped under its date.
#[derive(Debug, Clone)]
struct Fact {
    date: NaiveDate,
    text: String,
}

impl Fact {
    fn at(ev: &Event, text: String) -> Self {
        Self {
            date: ev.date(),
            text,
        }
    }
}

pub struct NarrativeBuilder<'a> {
    facts: &'a PublicationFacts,
    finished: bool,
    locale: Locale,
    min_paid_events: usize,
}

impl<'a> NarrativeBuilder<'a> {
    pub fn new(facts: &'a PublicationFacts, finished: bool) -> Self {
        Self {
            facts,
            finished,
            locale: Locale::default(),
            min_paid_events: DEFAULT_MIN_PAID_EVENTS,
        }
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn min_paid_events(mut self, n: usize) -> Self {
        self.min_paid_events = n;
        self
    }

    /// Dated entries in ascending date order, then the undated summary.
    pub fn build(&self) -> Vec<NarrativeEntry> {
        let mut entries = group_by_date(self.collect_facts());
        entries.push(self.summary());

        tracing::debug!(entries = entries.len(), locale = self.locale.as_str(), "narrative built");
        entries
    }

    fn collect_facts(&self) -> Vec<Fact> {
        let f = self.facts;
        let t = Templates(self.locale);
        let mut out = Vec::new();

        let first = f.first_event();
        out.push(Fact::at(first, t.first_release(&first.time_str(), &first.title)));

        let earliest = f.earliest_time_of_day();
        out.push(Fact::at(earliest, t.earliest(&earliest.time_str(), &earliest.title)));

        let latest = f.latest_time_of_day();
        out.push(Fact::at(latest, t.latest(&latest.time_str(), &latest.title)));

        let busiest = f.busiest_day();
        let anchor = &busiest.anchor;
        out.push(Fact::at(anchor, t.busiest_day(&anchor.time_str(), busiest.count)));

        if f.paid_count() >= self.min_paid_events {
            if let Some(run) = f.longest_run() {
                out.push(Fact::at(&run.start, t.longest_run(&run.start.time_str(), run.days)));
            }
            if let Some(gap) = f.longest_gap() {
                out.push(Fact {
                    date: gap.start,
                    text: t.longest_gap(&clock(NaiveTime::MIN), gap.days),
                });
            }
            if let Some(ev) = f.first_paid() {
                out.push(Fact::at(ev, t.first_paid(&ev.time_str(), &ev.title)));
            }
            if let Some(ev) = f.max_size_paid() {
                out.push(Fact::at(ev, t.max_size(&ev.time_str(), &ev.title, ev.size)));
            }
            if let Some(ev) = f.min_size_paid() {
                out.push(Fact::at(ev, t.min_size(&ev.time_str(), &ev.title, ev.size)));
            }
        }

        if self.finished
            && let (Some(last), Some(days)) = (f.last_paid(), f.completion_span())
        {
            out.push(Fact::at(last, t.completed(&last.time_str(), &last.title, days)));
        }

        out
    }

    fn summary(&self) -> NarrativeEntry {
        let t = Templates(self.locale);
        let mut content = Vec::new();

        if self.facts.paid_count() > 0 {
            content.push(t.average_size(self.facts.average_paid_size()));
        }

        let ranked = self.facts.histogram().ranked_descending();
        if let [(h1, _), (h2, _), ..] = ranked.as_slice() {
            let (b1, b2) = (TimeOfDay::from_hour(*h1), TimeOfDay::from_hour(*h2));
            content.push(if b1 == b2 {
                t.active_bucket(b1)
            } else {
                t.active_hours(*h1, *h2)
            });
        }

        NarrativeEntry { date: None, content }
    }
}

/// Group lines by date keeping generation order inside a date; dates ascend.
fn group_by_date(facts: Vec<Fact>) -> Vec<NarrativeEntry> {
    let mut by_date: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
    for fact in facts {
        by_date.entry(fact.date).or_default().push(fact.text);
    }

    by_date
        .into_iter()
        .map(|(date, content)| NarrativeEntry {
            date: Some(date),
            content,
        })
        .collect()
}

fn clock(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Fixed text templates; the clock time of the anchoring release always
/// comes first.
#[derive(Clone, Copy)]
struct Templates(Locale);

impl Templates {
    fn first_release(&self, time: &str, title: &str) -> String {
        match self.0 {
            Locale::En => format!("[{time}] First release - {title}"),
            Locale::Zh => format!("【{time}】新书发布 - {title}"),
        }
    }

    fn earliest(&self, time: &str, title: &str) -> String {
        match self.0 {
            Locale::En => format!("[{time}] Earliest release of the day - {title}"),
            Locale::Zh => format!("【{time}】最早更新 - {title}"),
        }
    }

    fn latest(&self, time: &str, title: &str) -> String {
        match self.0 {
            Locale::En => format!("[{time}] Latest release of the day - {title}"),
            Locale::Zh => format!("【{time}】最晚更新 - {title}"),
        }
    }

    fn busiest_day(&self, time: &str, count: usize) -> String {
        match self.0 {
            Locale::En if count == 1 => format!("[{time}] Busiest day: 1 release"),
            Locale::En => format!("[{time}] Busiest day: {count} releases"),
            Locale::Zh => format!("【{time}】一天最多更新 {count} 章"),
        }
    }

    fn longest_run(&self, time: &str, days: i64) -> String {
        match self.0 {
            Locale::En => format!("[{time}] Longest streak: {days} consecutive days"),
            Locale::Zh => format!("【{time}】最长连续更新 {days} 天"),
        }
    }

    fn longest_gap(&self, time: &str, days: i64) -> String {
        match self.0 {
            Locale::En => format!("[{time}] Longest hiatus: {days} days"),
            Locale::Zh => format!("【{time}】最长连续断更 {days} 天"),
        }
    }

    fn first_paid(&self, time: &str, title: &str) -> String {
        match self.0 {
            Locale::En => format!("[{time}] Paid tier begins - {title}"),
            Locale::Zh => format!("【{time}】上架 - {title}"),
        }
    }

    fn max_size(&self, time: &str, title: &str, words: u64) -> String {
        match self.0 {
            Locale::En => format!("[{time}] {title}\nLongest paid release: {words} words"),
            Locale::Zh => format!("【{time}】{title}\n更新字数最多 {words} 字"),
        }
    }

    fn min_size(&self, time: &str, title: &str, words: u64) -> String {
        match self.0 {
            Locale::En => format!("[{time}] {title}\nShortest paid release: {words} words"),
            Locale::Zh => format!("【{time}】{title}\n更新字数最少 {words} 字"),
        }
    }

    fn completed(&self, time: &str, title: &str, days: i64) -> String {
        match self.0 {
            Locale::En => format!("[{time}] {title}\nCompleted after {days} days"),
            Locale::Zh => format!("【{time}】{title}\n历时 {days} 天，大结局(￣▽￣)~*"),
        }
    }

    fn average_size(&self, words: u64) -> String {
        match self.0 {
            Locale::En => format!("Once paid, each release averaged {words} words."),
            Locale::Zh => format!("上架后，平均每章更新 {words} 字。"),
        }
    }

    fn active_bucket(&self, bucket: TimeOfDay) -> String {
        let label = bucket.label(self.0);
        match self.0 {
            Locale::En => format!(
                "This work is most active in the {label}, perhaps when inspiration runs highest."
            ),
            Locale::Zh => format!("这部作品在{label}最活跃，或许这时作者的灵感更强吧。"),
        }
    }

    fn active_hours(&self, h1: u32, h2: u32) -> String {
        match self.0 {
            Locale::En => format!(
                "This work is most active at {h1:02}:00 and {h2:02}:00, perhaps when inspiration runs highest."
            ),
            Locale::Zh => format!("这部作品在 {h1:02} 点和 {h2:02} 点最活跃，或许这时作者的灵感更强吧。"),
        }
    }
}
