use crate::errors::AppResult;
use crate::store::WorkDayStore;
use tracing::info;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(store: &dyn WorkDayStore, id: &str) -> AppResult<()> {
        store.delete(id)?;
        info!(%id, "work day deleted");
        Ok(())
    }
}
