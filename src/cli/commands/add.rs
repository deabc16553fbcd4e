use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::store::WorkDayStore;
use crate::ui::messages::success;
use crate::utils::date::parse_date_arg;
use crate::utils::format_hours;
use crate::utils::time::parse_time_arg;

/// Record a work day, or replace one with `--edit <id>`.
pub fn handle(cmd: &Commands, store: &dyn WorkDayStore) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        edit,
    } = cmd
    {
        let d = parse_date_arg(date)?;
        let s = parse_time_arg(start)?;
        let e = parse_time_arg(end)?;

        let rec = AddLogic::apply(store, d, s, e, edit.as_deref())?;

        let verb = if edit.is_some() { "Updated" } else { "Saved" };
        success(format!(
            "{verb} {} {}–{} ({} h) [id {}]",
            rec.date,
            rec.start_time,
            rec.end_time,
            format_hours(rec.total_hours),
            rec.id
        ));
    }
    Ok(())
}
