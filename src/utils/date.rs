//! Calendar arithmetic on plain dates: day intervals and the following day.
//! Nothing here looks at the time-of-day part of a timestamp.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a "YYYY-MM-DD" string.
pub fn parse_ymd(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| AppError::InvalidDateFormat(s.to_string()))
}

/// Parse a "YYYY-MM-DD HH:MM:SS" release timestamp.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| AppError::InvalidDateFormat(s.to_string()))
}

/// Absolute number of calendar days between two dates.
pub fn day_interval(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days().abs()
}

/// The calendar day after `d`; saturates at the last representable date.
pub fn next_day(d: NaiveDate) -> NaiveDate {
    d.succ_opt().unwrap_or(d)
}

/// String form of [`day_interval`], for callers holding raw "YYYY-MM-DD" values.
pub fn day_interval_str(a: &str, b: &str) -> AppResult<i64> {
    Ok(day_interval(parse_ymd(a)?, parse_ymd(b)?))
}

/// String form of [`next_day`].
pub fn next_day_str(a: &str) -> AppResult<String> {
    Ok(next_day(parse_ymd(a)?).format(DATE_FORMAT).to_string())
}
