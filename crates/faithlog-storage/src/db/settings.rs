use rusqlite::{params, OptionalExtension};

use crate::error::StorageResult;

use super::Database;

impl Database {
    /// Read a stored preference
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub fn get_setting(&self, key: &str) -> StorageResult<Option<String>> {
        let conn = self.conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Insert or overwrite a stored preference
    ///
    /// # Errors
    ///
    /// Returns an error if the database upsert operation fails
    pub fn set_setting(&self, key: &str, value: &str) -> StorageResult<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        log::debug!("Setting {key} updated");
        Ok(())
    }
}
