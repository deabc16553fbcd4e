use crate::errors::AppResult;
use crate::export::model::{Report, ReportRow};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use askama::Template;
use std::fs;
use std::path::Path;

#[derive(Template)]
#[template(path = "report.html")]
struct ReportPage<'a> {
    title: &'a str,
    period_label: String,
    rows: &'a [ReportRow],
    total_label: String,
}

/// Render the report as a standalone HTML page (values are escaped).
pub fn render_html(report: &Report) -> AppResult<String> {
    let page = ReportPage {
        title: &report.title,
        period_label: report.period_label(),
        rows: &report.rows,
        total_label: report.total_label(),
    };
    Ok(page.render()?)
}

pub(crate) fn export_html(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to HTML: {}", path.display()));
    fs::write(path, render_html(report)?)?;
    notify_export_success("HTML", path);
    Ok(())
}
