use crate::config::Config;
use crate::core::list::ListLogic;
use crate::core::period::Period;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::html::export_html;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::Report;
use crate::export::pdf::export_pdf;
use crate::store::WorkDayStore;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// High-level export flow.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the work days of `period`.
    ///
    /// - `file`: absolute output path (`~/` is expanded); `None` writes the
    ///   period's default file name into the current directory
    /// - `force`: overwrite an existing file without asking
    ///
    /// Returns the path written.
    pub fn export(
        store: &dyn WorkDayStore,
        cfg: &Config,
        period: Period,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => {
                let p = expand_tilde(f);
                if !p.is_absolute() {
                    return Err(AppError::Export(format!(
                        "Output file path must be absolute: {f}"
                    )));
                }
                p
            }
            None => env::current_dir()?.join(period.file_name(format.as_str())),
        };

        ensure_writable(&path, force)?;

        let selection = ListLogic::select(store, period)?;
        debug!(
            records = selection.records.len(),
            total_hours = selection.total_hours,
            "export selection ready"
        );

        if selection.records.is_empty() {
            warning("No work days found for the selected period.");
        }

        let report = Report::new(&cfg.report_title, &selection, &cfg.report_date_format);

        match format {
            ExportFormat::Pdf => export_pdf(&report, &path)?,
            ExportFormat::Html => export_html(&report, &path)?,
            ExportFormat::Csv => export_csv(&report, &path)?,
            ExportFormat::Json => export_json(&report, &path)?,
        }

        Ok(path)
    }
}
