//! Persistence collaborators.
//!
//! Stores hand back raw documents; turning them into [`WorkRecord`]s is the
//! job of [`crate::models::reconstruct`], shared by every backend.
//!
//! [`WorkRecord`]: crate::models::WorkRecord

pub mod local;
pub mod remote;

use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::models::{NewWorkDay, RawDocument};

pub use local::LocalStore;
pub use remote::RemoteStore;

pub trait WorkDayStore {
    /// Persist a new work day and return the id the store assigned.
    fn create(&self, day: &NewWorkDay) -> AppResult<String>;

    fn list(&self) -> AppResult<Vec<RawDocument>>;

    fn delete(&self, id: &str) -> AppResult<()>;

    /// Replace the whole record stored under `id`.
    fn replace(&self, id: &str, day: &NewWorkDay) -> AppResult<()>;
}

/// Build the store selected in the configuration.
pub fn open(cfg: &Config) -> AppResult<Box<dyn WorkDayStore>> {
    Ok(match cfg.backend {
        Backend::Local => Box::new(LocalStore::open(&cfg.database)?),
        Backend::Remote => Box::new(RemoteStore::new(cfg.remote.clone())?),
    })
}
