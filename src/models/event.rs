use super::time_of_day::TimeOfDay;
use crate::errors::AppResult;
use crate::utils::date::{DATE_FORMAT, parse_timestamp};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};

/// A release is paid-tier only above this many words.
pub const PAID_MIN_SIZE: u64 = 1000;

/// One released chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub title: String,
    /// Raw `uT`, "YYYY-MM-DD HH:MM:SS".
    pub timestamp: NaiveDateTime,
    /// Raw `cnt`, the word count.
    pub size: u64,
    /// Raw `sS`.
    pub is_free: bool,
}

impl Event {
    pub fn new(title: impl Into<String>, timestamp: NaiveDateTime, size: u64, is_free: bool) -> Self {
        Self {
            title: title.into(),
            timestamp,
            size,
            is_free,
        }
    }

    /// Build an event from a "YYYY-MM-DD HH:MM:SS" string.
    pub fn at(timestamp: &str, title: impl Into<String>, size: u64, is_free: bool) -> AppResult<Self> {
        Ok(Self::new(title, parse_timestamp(timestamp)?, size, is_free))
    }

    pub fn from_raw(raw: &RawRecord) -> AppResult<Self> {
        Self::at(&raw.timestamp, raw.title.clone(), raw.size, raw.is_free)
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }

    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_hour(self.hour())
    }

    pub fn is_paid(&self) -> bool {
        self.size > PAID_MIN_SIZE && !self.is_free
    }

    pub fn date_str(&self) -> String {
        self.date().format(DATE_FORMAT).to_string()
    }

    pub fn time_str(&self) -> String {
        self.time().format("%H:%M:%S").to_string()
    }
}

/// A release record as supplied by the host (storage or a remote source).
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "uT", alias = "timestamp")]
    pub timestamp: String,
    #[serde(rename = "cN", alias = "title", default)]
    pub title: String,
    #[serde(rename = "cnt", alias = "size", alias = "word_count", default)]
    pub size: u64,
    #[serde(rename = "sS", alias = "free", default, deserialize_with = "free_flag")]
    pub is_free: bool,
}

/// One volume worth of records.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBatch {
    #[serde(rename = "cs", alias = "records")]
    pub records: Vec<RawRecord>,
}

/// Accepted shapes of an input document.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Batches(Vec<RawBatch>),
    Batch(RawBatch),
    Records(Vec<RawRecord>),
}

impl RawInput {
    pub fn into_batches(self) -> Vec<RawBatch> {
        match self {
            RawInput::Batches(b) => b,
            RawInput::Batch(b) => vec![b],
            RawInput::Records(records) => vec![RawBatch { records }],
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FreeFlag {
    Bool(bool),
    Int(i64),
}

/// Sources send the free flag either as a boolean or as 0/1.
fn free_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Option::<FreeFlag>::deserialize(deserializer)? {
        Some(FreeFlag::Bool(b)) => b,
        Some(FreeFlag::Int(i)) => i != 0,
        None => false,
    })
}
