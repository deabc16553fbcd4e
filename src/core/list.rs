use crate::core::aggregate::{sort_most_recent_first, total_hours};
use crate::core::period::Period;
use crate::errors::AppResult;
use crate::models::{WorkRecord, reconstruct};
use crate::store::WorkDayStore;

/// Work days selected for a period, with their precomputed total.
#[derive(Debug, Clone)]
pub struct Selection {
    pub period: Period,
    pub records: Vec<WorkRecord>,
    pub total_hours: f64,
}

pub struct ListLogic;

impl ListLogic {
    /// Every stored work day, reconstructed and most recent first.
    pub fn load(store: &dyn WorkDayStore) -> AppResult<Vec<WorkRecord>> {
        let mut records: Vec<WorkRecord> = store.list()?.iter().map(reconstruct).collect();
        sort_most_recent_first(&mut records);
        Ok(records)
    }

    pub fn select(store: &dyn WorkDayStore, period: Period) -> AppResult<Selection> {
        let records = period.apply(&Self::load(store)?);
        let total_hours = total_hours(&records);
        Ok(Selection {
            period,
            records,
            total_hours,
        })
    }
}
