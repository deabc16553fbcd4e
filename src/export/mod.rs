mod fs_utils;
mod html;
mod json_csv;
pub mod logic;
mod model;
mod pdf;

pub use html::render_html;
pub use logic::ExportLogic;
pub use model::{Report, ReportRow};
pub use pdf::encode_win_ansi;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion line for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Html,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
