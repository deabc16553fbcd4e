use crate::core::calculator::interval::build_work_day;
use crate::errors::{AppError, AppResult};
use crate::models::WorkRecord;
use crate::store::WorkDayStore;
use chrono::{NaiveDate, NaiveTime};
use tracing::info;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Build the canonical work day and persist it.
    ///
    /// With `replace_id` the stored record with that id is replaced as a
    /// whole; otherwise a new record is created. An end at or before the
    /// start is refused before the store is touched.
    pub fn apply(
        store: &dyn WorkDayStore,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        replace_id: Option<&str>,
    ) -> AppResult<WorkRecord> {
        let day = build_work_day(date, start, end);
        if day.total <= 0 {
            return Err(AppError::InvalidInterval(format!(
                "end time must be after start time ({} – {})",
                day.start, day.end
            )));
        }

        let id = match replace_id {
            Some(id) => {
                store.replace(id, &day)?;
                id.to_string()
            }
            None => store.create(&day)?,
        };

        info!(%id, date = %day.date, minutes = day.total, "work day stored");
        Ok(day.to_record(id))
    }
}
