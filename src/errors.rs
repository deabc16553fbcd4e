//! Crate-wide error type.
//!
//! Collaborators (cli, config, store, export) return [`AppResult`]. The pure
//! core (calculator, aggregator, reconstruction) never fails and does not
//! use it.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Local key-value database.
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// Transport failure talking to the hosted store.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The hosted store answered with a non-success status.
    #[error("Remote store error: {0}")]
    Store(String),

    #[error("Work day not found: {0}")]
    NotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Report template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Invalid time (expected HH:MM): {0}")]
    InvalidTime(String),

    /// End at or before start; nothing is stored.
    #[error("Invalid work interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
