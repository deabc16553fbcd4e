use crate::cli::parser::Commands;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::WorkDayStore;
use crate::ui::messages::{confirm, info, success, warning};

pub fn handle(cmd: &Commands, store: &dyn WorkDayStore) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes {
            warning(format!("Work day {id} will be deleted. This cannot be undone."));
            if !confirm("Delete it?") {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        DeleteLogic::apply(store, id)?;
        success(format!("Work day {id} deleted."));
    }

    Ok(())
}
