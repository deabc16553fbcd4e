//! Legacy on-device store: one JSON array of work days kept under a single
//! key of a SQLite key-value table.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::raw_document::document_id;
use crate::models::{NewWorkDay, RawDocument, WorkRecord};
use crate::store::WorkDayStore;
use rusqlite::{OptionalExtension, params};
use serde_json::Value;
use tracing::debug;

pub const WORK_DAYS_KEY: &str = "work_days";

pub struct LocalStore {
    pool: DbPool,
}

impl LocalStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Self::with_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::with_pool(DbPool::in_memory()?)
    }

    fn with_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    fn read_days(&self) -> AppResult<Vec<RawDocument>> {
        let value: Option<String> = self
            .pool
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                [WORK_DAYS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match value {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_days(&self, days: &[RawDocument]) -> AppResult<()> {
        let json = serde_json::to_string(days)?;
        self.pool.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![WORK_DAYS_KEY, json],
        )?;
        Ok(())
    }

    fn position_of(days: &[RawDocument], id: &str) -> AppResult<usize> {
        days.iter()
            .position(|d| document_id(d).as_deref() == Some(id))
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }
}

fn record_document(record: &WorkRecord) -> AppResult<RawDocument> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::Other(format!(
            "work record serialized to a non-object: {other}"
        ))),
    }
}

impl WorkDayStore for LocalStore {
    fn create(&self, day: &NewWorkDay) -> AppResult<String> {
        let id = uuid::Uuid::new_v4().to_string();

        let tx = self.pool.conn.unchecked_transaction()?;
        let mut days = self.read_days()?;
        days.push(record_document(&day.to_record(id.clone()))?);
        self.write_days(&days)?;
        tx.commit()?;

        debug!(%id, date = %day.date, "local work day saved");
        Ok(id)
    }

    fn list(&self) -> AppResult<Vec<RawDocument>> {
        self.read_days()
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        let tx = self.pool.conn.unchecked_transaction()?;
        let mut days = self.read_days()?;
        let idx = Self::position_of(&days, id)?;
        days.remove(idx);
        self.write_days(&days)?;
        tx.commit()?;

        debug!(%id, "local work day deleted");
        Ok(())
    }

    fn replace(&self, id: &str, day: &NewWorkDay) -> AppResult<()> {
        let tx = self.pool.conn.unchecked_transaction()?;
        let mut days = self.read_days()?;
        let idx = Self::position_of(&days, id)?;
        days[idx] = record_document(&day.to_record(id))?;
        self.write_days(&days)?;
        tx.commit()?;

        debug!(%id, "local work day replaced");
        Ok(())
    }
}
