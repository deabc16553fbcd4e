//! Work interval computation: elapsed hours/minutes between two local
//! wall-clock instants and the canonical `YYYY-MM-DD` / `HH:MM` keys.
//!
//! Everything here is pure and never fails. `end <= start` is a zero span.

use crate::models::work_record::NewWorkDay;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub use crate::utils::date::parse_local_date_key;

const MILLIS_PER_MINUTE: f64 = 60_000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

fn span_millis(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_milliseconds().max(0)
}

/// Hours worked between `start` and `end`, floored at zero.
pub fn compute_duration_hours(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    span_millis(start, end) as f64 / MILLIS_PER_HOUR
}

/// Whole minutes between `start` and `end`, floored at zero.
/// Rounds the minute value itself (half up), never a rounded hour value.
pub fn compute_duration_minutes(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (span_millis(start, end) as f64 / MILLIS_PER_MINUTE).round() as i64
}

/// `YYYY-MM-DD` from the value's own calendar fields.
///
/// Works for naive values and zoned `DateTime`s alike; the fields are read
/// as they are, nothing is converted to UTC first.
pub fn build_canonical_date<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// `HH:MM`, seconds and below dropped.
pub fn build_canonical_time<T: Timelike>(time: &T) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Local instant for a calendar date and a clock time, seconds dropped.
pub fn local_instant(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    let t = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time);
    date.and_time(t)
}

/// Canonical create payload for a date and two clock times on that day.
pub fn build_work_day(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> NewWorkDay {
    let from = local_instant(date, start);
    let to = local_instant(date, end);

    NewWorkDay {
        date: build_canonical_date(&date),
        start: build_canonical_time(&from),
        end: build_canonical_time(&to),
        total: compute_duration_minutes(from, to),
    }
}
