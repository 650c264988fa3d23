#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rserialstats::core::facts::PublicationFacts;
use rserialstats::core::series::EventSeries;
use rserialstats::input::parse_batches;
use rserialstats::models::event::{Event, RawBatch};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rss() -> Command {
    cargo_bin_cmd!("rserialstats")
}

/// Create a temporary file path inside the system temp dir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rserialstats.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `json` to a fresh temp file and return its path
pub fn write_input(name: &str, json: &str) -> String {
    let p = temp_out(name, "json");
    fs::write(&p, json).expect("write input fixture");
    p
}

pub fn ev(ts: &str, size: u64) -> Event {
    Event::at(ts, format!("at {ts}"), size, false).expect("valid timestamp")
}

pub fn titled(ts: &str, title: &str, size: u64, free: bool) -> Event {
    Event::at(ts, title, size, free).expect("valid timestamp")
}

pub fn series(events: Vec<Event>) -> EventSeries {
    EventSeries::from_events(events).expect("non-empty series")
}

pub fn facts(events: Vec<Event>) -> PublicationFacts {
    PublicationFacts::new(series(events))
}

/// `n` paid daily releases starting 2021-03-01 at 20:00.
pub fn daily_paid(n: u32) -> Vec<Event> {
    (0..n)
        .map(|i| {
            let day = chrono::NaiveDate::from_ymd_opt(2021, 3, 1).unwrap() + chrono::Days::new(i as u64);
            titled(
                &format!("{} 20:00:00", day.format("%Y-%m-%d")),
                &format!("Chapter {}", i + 1),
                2000 + i as u64,
                false,
            )
        })
        .collect()
}

/// A finished publication: a free volume of three releases followed by a
/// paid volume of twelve. Expected facts:
/// - earliest 2020-01-16 08:00 (Chapter 8), latest 2020-01-16 23:30 (Chapter 10)
/// - busiest day 2020-01-16 (3 releases)
/// - paid streak 7 days from 2020-01-15, hiatus 6 days from 2020-01-09
/// - paid max Chapter 5 (4000), min Chapter 11 (1200), average 2225
/// - hours: 21 ×11, 02/08/09/23 ×1
pub const SAGA_JSON: &str = r#"[
  {"cs": [
    {"uT": "2020-01-01 09:00:00", "cN": "Prologue",  "cnt": 900,  "sS": 1},
    {"uT": "2020-01-01 21:00:00", "cN": "Chapter 1", "cnt": 3000, "sS": 1},
    {"uT": "2020-01-02 21:00:00", "cN": "Chapter 2", "cnt": 3100, "sS": 1}
  ]},
  {"cs": [
    {"uT": "2020-01-19 21:00:00", "cN": "Chapter 13", "cnt": 1200, "sS": 0},
    {"uT": "2020-01-05 21:00:00", "cN": "Chapter 3",  "cnt": 2000, "sS": 0},
    {"uT": "2020-01-06 21:00:00", "cN": "Chapter 4",  "cnt": 2200, "sS": 0},
    {"uT": "2020-01-07 21:10:00", "cN": "Chapter 5",  "cnt": 4000, "sS": 0},
    {"uT": "2020-01-08 21:00:00", "cN": "Chapter 6",  "cnt": 2100, "sS": 0},
    {"uT": "2020-01-15 21:00:00", "cN": "Chapter 7",  "cnt": 1500, "sS": 0},
    {"uT": "2020-01-16 08:00:00", "cN": "Chapter 8",  "cnt": 2000, "sS": 0},
    {"uT": "2020-01-16 21:00:00", "cN": "Chapter 9",  "cnt": 2000, "sS": 0},
    {"uT": "2020-01-16 23:30:00", "cN": "Chapter 10", "cnt": 4000, "sS": 0},
    {"uT": "2020-01-17 02:00:00", "cN": "Chapter 11", "cnt": 1200, "sS": 0},
    {"uT": "2020-01-18 21:00:00", "cN": "Chapter 12", "cnt": 1500},
    {"uT": "2020-01-20 21:00:00", "cN": "Finale",     "cnt": 3000, "sS": false}
  ]}
]"#;

pub fn saga_batches() -> Vec<RawBatch> {
    parse_batches(SAGA_JSON).expect("saga fixture parses")
}

pub fn saga_facts() -> PublicationFacts {
    PublicationFacts::new(EventSeries::from_batches(&saga_batches()).expect("saga series"))
}
