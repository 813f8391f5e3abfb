use rusqlite::Connection;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use crate::errors::ServerError;

// Thread-local connection slot, keyed by path so two handles to different
// store files on the same thread each get their own connection.
thread_local! {
    static STORE_CONN: RefCell<Option<(PathBuf, Connection)>> = const { RefCell::new(None) };
}

/// Handle to the key-value store. Cheap to clone; the actual SQLite
/// connection is opened lazily per thread.
#[derive(Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Provides the per-thread connection to the closure, opening it on
    /// first use.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        STORE_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                let reusable = matches!(&*slot, Some((path, _)) if *path == self.path);
                if !reusable {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| ServerError::StoreError(format!("open store failed: {e}")))?;
                    *slot = Some((self.path.clone(), conn));
                }
                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(ServerError::InternalError),
                }
            })
            .map_err(|_| ServerError::InternalError)?
    }
}

/// Initialize the store from a SQL schema file.
pub fn init_store(db: &Database, schema_path: &str) -> Result<(), ServerError> {
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| ServerError::StoreError(format!("failed to read schema file: {e}")))?;

    db.with_conn(|conn| {
        conn.execute_batch(&schema_sql)
            .map_err(|e| ServerError::StoreError(format!("failed to apply schema: {e}")))?;
        Ok(())
    })?;

    tracing::debug!(schema = schema_path, "store initialized");
    Ok(())
}
