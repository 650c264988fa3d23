use chrono::NaiveDate;
use rserialstats::errors::AppError;
use rserialstats::utils::date::{
    day_interval, day_interval_str, next_day, next_day_str, parse_timestamp, parse_ymd,
};

fn d(s: &str) -> NaiveDate {
    parse_ymd(s).expect("valid date")
}

#[test]
fn test_day_interval_is_absolute() {
    assert_eq!(day_interval(d("2018-01-22"), d("2018-01-24")), 2);
    assert_eq!(day_interval(d("2018-01-24"), d("2018-01-22")), 2);
    assert_eq!(day_interval(d("2018-01-24"), d("2018-01-24")), 0);
}

#[test]
fn test_day_interval_across_year_and_leap_day() {
    assert_eq!(day_interval(d("2019-12-31"), d("2020-01-01")), 1);
    assert_eq!(day_interval(d("2020-02-28"), d("2020-03-01")), 2);
    assert_eq!(day_interval(d("2019-02-28"), d("2019-03-01")), 1);
}

#[test]
fn test_day_interval_ignores_time_of_day() {
    let late = parse_timestamp("2020-05-01 23:59:59").unwrap();
    let early = parse_timestamp("2020-05-02 00:00:01").unwrap();
    assert_eq!(day_interval(late.date(), early.date()), 1);
}

#[test]
fn test_next_day_rolls_over() {
    assert_eq!(next_day(d("2020-01-31")), d("2020-02-01"));
    assert_eq!(next_day(d("2020-02-28")), d("2020-02-29"));
    assert_eq!(next_day(d("2021-02-28")), d("2021-03-01"));
    assert_eq!(next_day(d("2020-12-31")), d("2021-01-01"));
}

#[test]
fn test_string_forms() {
    assert_eq!(day_interval_str("2020-01-02", "2020-01-10").unwrap(), 8);
    assert_eq!(next_day_str("2020-12-31").unwrap(), "2021-01-01");
}

#[test]
fn test_invalid_date_format() {
    assert!(matches!(
        day_interval_str("2020/01/02", "2020-01-10"),
        Err(AppError::InvalidDateFormat(_))
    ));
    assert!(matches!(next_day_str("yesterday"), Err(AppError::InvalidDateFormat(_))));
    assert!(matches!(
        parse_timestamp("2020-01-02T10:00:00"),
        Err(AppError::InvalidDateFormat(_))
    ));
}
