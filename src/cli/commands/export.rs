use crate::cli::commands::resolve_period;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::WorkDayStore;

pub fn handle(cmd: &Commands, cfg: &Config, store: &dyn WorkDayStore) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = cmd
    {
        let period = resolve_period(period, cfg)?;
        ExportLogic::export(store, cfg, period, *format, file.as_deref(), *force)?;
    }
    Ok(())
}
