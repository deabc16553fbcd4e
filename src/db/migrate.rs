//! Schema migrations for the local key-value database.
//! The applied level is tracked in `PRAGMA user_version`.

use rusqlite::{Connection, Result};
use tracing::info;

type Migration = fn(&Connection) -> Result<()>;

/// Ordered list; index + 1 is the schema version the step produces.
const MIGRATIONS: &[(&str, Migration)] = &[("create kv table", create_kv_table)];

fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )
}

pub fn schema_version(conn: &Connection) -> Result<usize> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v.max(0) as usize)
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    let current = schema_version(conn)?;

    for (idx, (name, step)) in MIGRATIONS.iter().enumerate().skip(current) {
        let version = idx + 1;
        step(conn)?;
        conn.execute_batch(&format!("PRAGMA user_version = {version}"))?;
        info!(version, migration = *name, "migration applied");
    }

    Ok(())
}
