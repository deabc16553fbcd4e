//! Period selection for listings and reports: which records, which label,
//! which default file name.

use crate::core::aggregate::{filter_by_month, filter_by_week};
use crate::errors::{AppError, AppResult};
use crate::models::work_record::WorkRecord;
use crate::utils::date::{format_date, month_name};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// First day of the week used when the CLI picks "this week".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

/// Start of the week containing `day`.
pub fn week_start_for(day: NaiveDate, convention: WeekStart) -> NaiveDate {
    let back = match convention {
        WeekStart::Sunday => day.weekday().num_days_from_sunday(),
        WeekStart::Monday => day.weekday().num_days_from_monday(),
    };
    day.checked_sub_days(Days::new(back as u64)).unwrap_or(day)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    All,
    /// Seven days starting at the given day.
    Week(NaiveDate),
    /// `month_index` is zero-based (0 = January).
    Month { year: i32, month_index: u32 },
}

impl Period {
    /// Month period from a 1-based month number as typed by a user.
    pub fn month(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidPeriod(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        Ok(Period::Month {
            year,
            month_index: month - 1,
        })
    }

    pub fn apply(&self, records: &[WorkRecord]) -> Vec<WorkRecord> {
        match *self {
            Period::All => records.to_vec(),
            Period::Week(start) => filter_by_week(records, start),
            Period::Month { year, month_index } => filter_by_month(records, year, month_index),
        }
    }

    fn week_end(start: NaiveDate) -> NaiveDate {
        start.checked_add_days(Days::new(6)).unwrap_or(start)
    }

    pub fn label(&self, date_format: &str) -> String {
        match *self {
            Period::All => "All entries".to_string(),
            Period::Week(start) => format!(
                "{} – {}",
                format_date(start, date_format),
                format_date(Self::week_end(start), date_format)
            ),
            Period::Month { year, month_index } => {
                format!("{} {}", month_name(month_index + 1), year)
            }
        }
    }

    pub fn file_name(&self, ext: &str) -> String {
        match *self {
            Period::All => format!("report_all.{ext}"),
            Period::Week(start) => format!(
                "report_{}_to_{}.{ext}",
                start.format("%Y-%m-%d"),
                Self::week_end(start).format("%Y-%m-%d")
            ),
            Period::Month { year, month_index } => {
                format!("report_{year}-{:02}.{ext}", month_index + 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_start_conventions() {
        // 2025-03-12 is a Wednesday
        let wed = ymd(2025, 3, 12);
        assert_eq!(week_start_for(wed, WeekStart::Sunday), ymd(2025, 3, 9));
        assert_eq!(week_start_for(wed, WeekStart::Monday), ymd(2025, 3, 10));

        let sun = ymd(2025, 3, 9);
        assert_eq!(week_start_for(sun, WeekStart::Sunday), sun);
        assert_eq!(week_start_for(sun, WeekStart::Monday), ymd(2025, 3, 3));
    }

    #[test]
    fn month_from_user_input() {
        assert_eq!(
            Period::month(2025, 9).unwrap(),
            Period::Month {
                year: 2025,
                month_index: 8
            }
        );
        assert!(Period::month(2025, 0).is_err());
        assert!(Period::month(2025, 13).is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(Period::All.label("%d.%m.%Y"), "All entries");
        assert_eq!(
            Period::Week(ymd(2025, 3, 9)).label("%d.%m.%Y"),
            "09.03.2025 – 15.03.2025"
        );
        assert_eq!(Period::month(2025, 9).unwrap().label("%d.%m.%Y"), "September 2025");
    }

    #[test]
    fn file_names() {
        assert_eq!(Period::All.file_name("pdf"), "report_all.pdf");
        assert_eq!(
            Period::Week(ymd(2025, 12, 28)).file_name("pdf"),
            "report_2025-12-28_to_2026-01-03.pdf"
        );
        assert_eq!(Period::month(2025, 9).unwrap().file_name("html"), "report_2025-09.html");
    }
}
