//! Keep older configuration files in step with the current key set.

use crate::config::Config;
use crate::errors::AppResult;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Top-level keys a current configuration file carries.
pub const KNOWN_KEYS: &[&str] = &[
    "backend",
    "database",
    "remote",
    "week_start",
    "report_title",
    "report_date_format",
    "log_level",
];

/// Keys absent from the YAML text.
/// Unreadable YAML reports every key as missing.
pub fn missing_keys(content: &str) -> Vec<&'static str> {
    let parsed: Option<Mapping> = serde_yaml::from_str::<Value>(content)
        .ok()
        .and_then(|v| v.as_mapping().cloned());

    KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| {
            parsed
                .as_ref()
                .is_none_or(|m| !m.contains_key(*k))
        })
        .collect()
}

/// Rewrite the file with every missing key filled from `cfg`.
/// Returns the keys that were added; nothing is written when none are missing.
pub fn migrate_file(path: &Path, cfg: &Config) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path)?;
    let missing = missing_keys(&content);
    if missing.is_empty() {
        return Ok(missing);
    }

    fs::write(path, cfg.to_yaml()?)?;
    Ok(missing)
}
