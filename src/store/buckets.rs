use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Mutex;

use crate::errors::ServerError;
use crate::store::connection::Database;

/// A typed name for one bucket in the key-value store. Each bucket holds an
/// ordered list of `T` records, serialized as a single JSON array.
pub struct BucketKey<T> {
    name: &'static str,
    _records: PhantomData<fn() -> T>,
}

impl<T> BucketKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _records: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Database {
    /// Read a bucket wholesale. A bucket that has never been written yields
    /// `default()`; defaults are not persisted until the first mutation.
    pub fn get_bucket<T: DeserializeOwned>(
        &self,
        key: &BucketKey<T>,
        default: impl FnOnce() -> Vec<T>,
    ) -> Result<Vec<T>, ServerError> {
        let raw: Option<String> = self.with_conn(|conn| {
            conn.query_row(
                "SELECT value FROM buckets WHERE key = ?1",
                params![key.name],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| ServerError::StoreError(e.to_string()))
        })?;

        match raw {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                ServerError::StoreError(format!("decode bucket '{}' failed: {e}", key.name))
            }),
            None => Ok(default()),
        }
    }

    /// Write a bucket wholesale.
    pub fn set_bucket<T: Serialize>(
        &self,
        key: &BucketKey<T>,
        records: &[T],
    ) -> Result<(), ServerError> {
        let json = serde_json::to_string(records).map_err(|e| {
            ServerError::StoreError(format!("encode bucket '{}' failed: {e}", key.name))
        })?;

        self.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO buckets (key, value) VALUES (?1, ?2)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value
                "#,
                params![key.name, json],
            )
            .map_err(|e| ServerError::StoreError(e.to_string()))?;
            Ok(())
        })
    }

    /// Whole-value replace-on-write: read the current list (or the default),
    /// apply `f`, write the result back. Last writer wins; there is no
    /// field-level merge. Returns the written list.
    pub fn update_bucket<T: Serialize + DeserializeOwned>(
        &self,
        key: &BucketKey<T>,
        default: impl FnOnce() -> Vec<T>,
        f: impl FnOnce(&mut Vec<T>),
    ) -> Result<Vec<T>, ServerError> {
        let mut records = self.get_bucket(key, default)?;
        f(&mut records);
        self.set_bucket(key, &records)?;
        Ok(records)
    }
}

/// Record ids are creation timestamps in milliseconds, bumped when two
/// records land in the same millisecond so ids stay strictly increasing
/// within a process.
pub fn next_record_id() -> i64 {
    static LAST_ID: Mutex<i64> = Mutex::new(0);

    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ID.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *last = if now > *last { now } else { *last + 1 };
    *last
}
