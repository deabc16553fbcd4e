//! Totals and period filters over work records.
//!
//! Filters keep the input order and compare local calendar days only.
//! Records whose date key is invalid are never selected by a date window.

use crate::models::work_record::WorkRecord;
use crate::utils::date::LocalDay;
use chrono::{Datelike, Days, NaiveDate};

pub fn total_hours(records: &[WorkRecord]) -> f64 {
    records.iter().map(|r| r.total_hours).sum()
}

/// Records dated within `[week_start, week_start + 6 days]`.
///
/// `week_start` is decided by the caller (Sunday, Monday, ...); no
/// day-of-week arithmetic happens here.
pub fn filter_by_week(records: &[WorkRecord], week_start: NaiveDate) -> Vec<WorkRecord> {
    let week_end = week_start
        .checked_add_days(Days::new(6))
        .unwrap_or(NaiveDate::MAX);
    let (from, to) = (LocalDay::new(week_start), LocalDay::new(week_end));

    records
        .iter()
        .filter(|r| {
            let day = r.local_day();
            day >= from && day <= to
        })
        .cloned()
        .collect()
}

/// Records dated in the given month.
///
/// `month_index` is ZERO-based: 0 = January ... 11 = December. Convert
/// 1-based input (`--month 9`) before calling. Indexes above 11 match
/// nothing.
pub fn filter_by_month(records: &[WorkRecord], year: i32, month_index: u32) -> Vec<WorkRecord> {
    records
        .iter()
        .filter(|r| {
            r.local_day()
                .date()
                .is_some_and(|d| d.year() == year && d.month0() == month_index)
        })
        .cloned()
        .collect()
}

/// Most recent first by date key; equal dates keep their order.
/// Zero-padded keys sort correctly as plain strings.
pub fn sort_most_recent_first(records: &mut [WorkRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}
