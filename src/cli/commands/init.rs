use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::store::LocalStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and file when missing and, for the local
/// backend, the SQLite database with its schema.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let path = cfg.init_all()?;
    info(format!("Config file : {}", path.display()));

    match cfg.backend {
        Backend::Local => {
            LocalStore::open(&cfg.database)?;
            info(format!("Database    : {}", cfg.database));
        }
        Backend::Remote => {
            cfg.remote.validate()?;
            info(format!("Remote store: {}", cfg.remote.endpoint));
        }
    }

    success("zeitkonto initialization completed.");
    Ok(())
}
