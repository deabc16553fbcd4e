use crate::models::duration::WorkDuration;
use crate::utils::date::{LocalDay, parse_local_date_key};
use serde::{Deserialize, Serialize};

/// One day's worked interval in canonical form.
///
/// `date` is a local `YYYY-MM-DD` key, `start_time`/`end_time` are `HH:MM`
/// on that same day; `total_hours` is derived and never negative.
/// Serialized field names match the legacy local store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRecord {
    pub id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub total_hours: f64,
}

impl WorkRecord {
    pub fn local_day(&self) -> LocalDay {
        parse_local_date_key(&self.date)
    }
}

/// Compact create payload handed to the stores: `total` is whole minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorkDay {
    pub date: String,
    pub start: String,
    pub end: String,
    pub total: i64,
}

impl NewWorkDay {
    pub fn duration(&self) -> WorkDuration {
        WorkDuration::Minutes(self.total as f64)
    }

    /// Canonical record once the store has assigned an id.
    pub fn to_record(&self, id: impl Into<String>) -> WorkRecord {
        WorkRecord {
            id: id.into(),
            date: self.date.clone(),
            start_time: self.start.clone(),
            end_time: self.end.clone(),
            total_hours: self.duration().hours(),
        }
    }
}
