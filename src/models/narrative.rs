use crate::utils::date::DATE_FORMAT;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Date marker of the closing free-text entry.
pub const NO_DATE_MARKER: &str = "(^_^)";

/// One rendered, dated block of the narrative.
/// `date == None` marks the closing free-text entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeEntry {
    #[serde(serialize_with = "serialize_entry_date")]
    pub date: Option<NaiveDate>,
    pub content: Vec<String>,
}

impl NarrativeEntry {
    pub fn date_label(&self) -> String {
        match self.date {
            Some(d) => d.format(DATE_FORMAT).to_string(),
            None => NO_DATE_MARKER.to_string(),
        }
    }
}

fn serialize_entry_date<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
    match date {
        Some(d) => s.serialize_str(&d.format(DATE_FORMAT).to_string()),
        None => s.serialize_str(NO_DATE_MARKER),
    }
}

/// One slice of the hour-of-day distribution (`name` is "00".."23" or the "other" label).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionSlice {
    pub name: String,
    pub value: u32,
}

/// Full output of one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub entries: Vec<NarrativeEntry>,
    pub distribution: Vec<DistributionSlice>,
}
