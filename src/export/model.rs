use crate::core::list::Selection;
use crate::models::WorkRecord;
use crate::utils::date::format_date;
use crate::utils::format_hours;
use serde::Serialize;

/// One printable report line.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub date: String,
    pub start: String,
    pub end: String,
    pub hours: String,
}

impl ReportRow {
    pub fn from_record(r: &WorkRecord, date_format: &str) -> Self {
        let date = match r.local_day().date() {
            Some(d) => format_date(d, date_format),
            None => r.date.clone(),
        };

        Self {
            date,
            start: r.start_time.clone(),
            end: r.end_time.clone(),
            hours: format_hours(r.total_hours),
        }
    }

    pub(crate) fn cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.start.clone(),
            self.end.clone(),
            self.hours.clone(),
        ]
    }
}

/// Everything a renderer needs. The total is taken as given, renderers
/// never add rows up themselves.
#[derive(Serialize, Clone, Debug)]
pub struct Report {
    pub title: String,
    pub period: String,
    pub rows: Vec<ReportRow>,
    pub total_hours: f64,
}

impl Report {
    pub fn new(title: &str, selection: &Selection, date_format: &str) -> Self {
        Self {
            title: title.to_string(),
            period: selection.period.label(date_format),
            rows: selection
                .records
                .iter()
                .map(|r| ReportRow::from_record(r, date_format))
                .collect(),
            total_hours: selection.total_hours,
        }
    }

    pub fn total_label(&self) -> String {
        format!("Total: {} hours", format_hours(self.total_hours))
    }

    pub fn period_label(&self) -> String {
        format!("Period: {}", self.period)
    }
}

/// Header per CSV / PDF / HTML
pub(crate) fn get_headers() -> [&'static str; 4] {
    ["Date", "Start", "End", "Hours"]
}
