use rusqlite::Connection;

use crate::error::{StorageError, StorageResult};

/// Schema version recorded in `PRAGMA user_version`
pub const SCHEMA_VERSION: i64 = 1;

/// Read the schema version stored in the database file
///
/// # Errors
///
/// Returns an error if the pragma query fails
pub fn schema_version(conn: &Connection) -> StorageResult<i64> {
    let version = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(version)
}

/// Initialize or upgrade the database schema
///
/// # Errors
///
/// Returns an error if table or index creation fails, or if the file was
/// written by a newer schema version
pub fn init_schema(conn: &Connection) -> StorageResult<()> {
    let found = schema_version(conn)?;
    if found > SCHEMA_VERSION {
        return Err(StorageError::UnsupportedSchema {
            found,
            supported: SCHEMA_VERSION,
        });
    }

    // Entries table - one row per journal entry
    conn.execute(
        "CREATE TABLE IF NOT EXISTS entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT NOT NULL CHECK (type IN ('testimony', 'gratitude', 'prayer_request')),
            status TEXT CHECK (status IN ('pending', 'in_progress', 'answered')),
            date TEXT NOT NULL,
            time TEXT NOT NULL,
            person_name TEXT NOT NULL,
            title TEXT,
            details TEXT NOT NULL,
            tags TEXT NOT NULL DEFAULT '[]',
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL,
            CHECK ((type = 'prayer_request') = (status IS NOT NULL))
        )",
        [],
    )?;

    // Settings table - simple key/value preferences
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;

    create_indexes(conn)?;

    if found < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        if found == 0 {
            log::info!("Database schema created (version {SCHEMA_VERSION})");
        } else {
            log::info!("Database schema upgraded from version {found} to {SCHEMA_VERSION}");
        }
    }

    Ok(())
}

/// Secondary lookup indexes; safe to re-run on every open
fn create_indexes(conn: &Connection) -> StorageResult<()> {
    let indexes = [
        ("idx_entries_type", "type"),
        ("idx_entries_date", "date"),
        ("idx_entries_person_name", "person_name"),
    ];

    for (name, column) in indexes {
        conn.execute(
            &format!("CREATE INDEX IF NOT EXISTS {name} ON entries({column})"),
            [],
        )?;
    }

    Ok(())
}
