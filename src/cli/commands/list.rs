use crate::cli::commands::resolve_period;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::{ListLogic, Selection};
use crate::errors::AppResult;
use crate::store::WorkDayStore;
use crate::ui::messages::{header, info};
use crate::utils::date::format_date;
use crate::utils::table::Table;
use crate::utils::{format_hours, hours2readable};

pub fn handle(cmd: &Commands, cfg: &Config, store: &dyn WorkDayStore) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let period = resolve_period(period, cfg)?;
        let selection = ListLogic::select(store, period)?;

        header(period.label(&cfg.report_date_format));
        if selection.records.is_empty() {
            info("No work days for this period.");
            return Ok(());
        }

        print!("{}", render(&selection, &cfg.report_date_format));
    }
    Ok(())
}

fn render(selection: &Selection, date_format: &str) -> String {
    let mut table = Table::new(vec!["ID", "DATE", "START", "END", "HOURS"]);
    for r in &selection.records {
        let date = r
            .local_day()
            .date()
            .map(|d| format_date(d, date_format))
            .unwrap_or_else(|| r.date.clone());
        table.add_row(vec![
            r.id.clone(),
            date,
            r.start_time.clone(),
            r.end_time.clone(),
            format_hours(r.total_hours),
        ]);
    }

    format!(
        "{}\nTotal: {} hours ({})\n",
        table.render(),
        format_hours(selection.total_hours),
        hours2readable(selection.total_hours)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::period::Period;
    use crate::models::WorkRecord;

    #[test]
    fn table_and_total() {
        let sel = Selection {
            period: Period::All,
            records: vec![WorkRecord {
                id: "abc".into(),
                date: "2025-09-01".into(),
                start_time: "08:00".into(),
                end_time: "16:30".into(),
                total_hours: 8.5,
            }],
            total_hours: 8.5,
        };

        let out = render(&sel, "%d.%m.%Y");
        assert!(out.contains("01.09.2025"));
        assert!(out.contains("8.50"));
        assert!(out.contains("Total: 8.50 hours (08h 30m)"));
    }
}
