//! Database operations split into domain-specific modules.
//!
//! This module re-exports the main Database struct and all its operations.

mod entries;
mod helpers;
mod settings;

#[cfg(test)]
mod tests;

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::error::{StorageError, StorageResult};
use crate::migrations;

/// Database connection wrapper
pub struct Database {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl Database {
    /// Open (or create) the database file
    ///
    /// # Errors
    ///
    /// Returns an error if database directory creation, connection opening, or schema initialization fails
    pub fn new(db_path: Option<PathBuf>) -> StorageResult<Self> {
        let path = db_path.unwrap_or_else(Self::default_db_path);

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)?;
        migrations::init_schema(&conn)?;

        log::info!("Database opened at: {}", path.display());

        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path),
        })
    }

    /// Open a private database that lives only as long as this value
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema initialization fails
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Get default database path
    #[must_use]
    pub fn default_db_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("faithlog");
        path.push("faithlog.db");
        path
    }

    /// File backing this database, `None` when in memory
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Schema version currently recorded in the file
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is unavailable or the query fails
    pub fn schema_version(&self) -> StorageResult<i64> {
        let conn = self.conn()?;
        migrations::schema_version(&conn)
    }

    pub(crate) fn conn(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }
}
