//! Formatting utilities used for CLI and export outputs.

/// Hours with two decimals, the way every listing and report shows them.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// es: 8.5 → "08h 30m"
pub fn hours2readable(hours: f64) -> String {
    let mins = (hours.max(0.0) * 60.0).round() as i64;
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}
