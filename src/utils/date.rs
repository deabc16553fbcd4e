//! Local calendar date helpers: lenient `YYYY-MM-DD` parsing, the invalid-date
//! sentinel and small formatting helpers shared by core and export.

use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::cmp::Ordering;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// A local calendar day, or the invalid-date sentinel.
///
/// Comparisons involving the sentinel always fail: `==`, `<`, `<=`, `>`
/// and `>=` all return `false`, so an invalid day never falls inside any
/// date window.
#[derive(Debug, Clone, Copy)]
pub struct LocalDay(Option<NaiveDate>);

impl LocalDay {
    pub const INVALID: LocalDay = LocalDay(None);

    pub fn new(date: NaiveDate) -> Self {
        Self(Some(date))
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }
}

impl From<NaiveDate> for LocalDay {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl PartialEq for LocalDay {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for LocalDay {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => None,
        }
    }
}

/// Parse a `YYYY-MM-DD` key as a local calendar date.
///
/// The key is split on `-` and never goes through a timestamp, so there is
/// no timezone shift. A missing, empty, zero or non-numeric month or day
/// defaults to `1`. An empty key, an unreadable year or an impossible date
/// (e.g. `2025-02-30`) gives [`LocalDay::INVALID`].
pub fn parse_local_date_key(key: &str) -> LocalDay {
    let key = key.trim();
    if key.is_empty() {
        return LocalDay::INVALID;
    }

    let mut parts = key.split('-');

    let Some(year) = parts.next().and_then(|y| y.trim().parse::<i32>().ok()) else {
        return LocalDay::INVALID;
    };
    let month = component_or_first(parts.next());
    let day = component_or_first(parts.next());

    NaiveDate::from_ymd_opt(year, month, day).map_or(LocalDay::INVALID, LocalDay::new)
}

fn component_or_first(part: Option<&str>) -> u32 {
    match part.and_then(|p| p.trim().parse::<u32>().ok()) {
        Some(0) | None => 1,
        Some(v) => v,
    }
}

/// Strict parser for user input on the command line.
pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Format a date with a user supplied strftime pattern.
/// Unknown specifiers fall back to `%Y-%m-%d` instead of failing at display time.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let broken = StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
    if broken {
        date.format("%Y-%m-%d").to_string()
    } else {
        date.format(pattern).to_string()
    }
}

/// English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
