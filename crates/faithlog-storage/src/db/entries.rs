use rusqlite::{params, OptionalExtension, Row};

use crate::error::StorageResult;
use crate::models::{Entry, EntryId, EntryKind, EntryRecord, EntryType, Status, Tags};

use super::helpers::{corrupt, parse_date, parse_time, DATE_FORMAT, TIME_FORMAT};
use super::Database;

const ENTRY_COLUMNS: &str =
    "id, type, status, date, time, person_name, title, details, tags, created_at, updated_at";

/// Raw column values, converted to an `Entry` outside the row callback
struct EntryRow {
    id: i64,
    entry_type: String,
    status: Option<String>,
    date: String,
    time: String,
    person_name: String,
    title: Option<String>,
    details: String,
    tags: String,
    created_at: i64,
    updated_at: i64,
}

impl EntryRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            entry_type: row.get(1)?,
            status: row.get(2)?,
            date: row.get(3)?,
            time: row.get(4)?,
            person_name: row.get(5)?,
            title: row.get(6)?,
            details: row.get(7)?,
            tags: row.get(8)?,
            created_at: row.get(9)?,
            updated_at: row.get(10)?,
        })
    }

    fn into_entry(self) -> StorageResult<Entry> {
        let Self {
            id,
            entry_type,
            status,
            date,
            time,
            person_name,
            title,
            details,
            tags,
            created_at,
            updated_at,
        } = self;

        let entry_type = entry_type
            .parse::<EntryType>()
            .map_err(|e| corrupt(id, e.to_string()))?;
        let status = status
            .as_deref()
            .map(str::parse::<Status>)
            .transpose()
            .map_err(|e| corrupt(id, e.to_string()))?;
        if entry_type == EntryType::PrayerRequest && status.is_none() {
            return Err(corrupt(id, "prayer request without status"));
        }
        let tags: Vec<String> =
            serde_json::from_str(&tags).map_err(|e| corrupt(id, format!("tags: {e}")))?;

        Ok(Entry {
            id,
            kind: EntryKind::from_parts(entry_type, status),
            date: parse_date(id, &date)?,
            time: parse_time(id, &time)?,
            person_name,
            title,
            details,
            tags: Tags::new(tags),
            created_at,
            updated_at,
        })
    }
}

impl Database {
    /// Insert a record without an id, or replace the record with the given id
    ///
    /// Returns the id of the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database write fails
    pub fn put_entry(&self, record: &EntryRecord) -> StorageResult<EntryId> {
        let draft = &record.draft;
        let entry_type = draft.kind.entry_type().as_str();
        let status = draft.kind.status().map(Status::as_str);
        let date = draft.date.format(DATE_FORMAT).to_string();
        let time = draft.time.format(TIME_FORMAT).to_string();
        let tags = serde_json::to_string(draft.tags.as_slice())?;

        let conn = self.conn()?;
        let id = if let Some(id) = record.id {
            conn.execute(
                "INSERT INTO entries (id, type, status, date, time, person_name, title, details, tags, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                 ON CONFLICT(id) DO UPDATE SET
                    type = excluded.type,
                    status = excluded.status,
                    date = excluded.date,
                    time = excluded.time,
                    person_name = excluded.person_name,
                    title = excluded.title,
                    details = excluded.details,
                    tags = excluded.tags,
                    created_at = excluded.created_at,
                    updated_at = excluded.updated_at",
                params![
                    id,
                    entry_type,
                    status,
                    date,
                    time,
                    draft.person_name,
                    draft.title,
                    draft.details,
                    tags,
                    record.created_at,
                    record.updated_at,
                ],
            )?;
            id
        } else {
            conn.execute(
                "INSERT INTO entries (type, status, date, time, person_name, title, details, tags, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    entry_type,
                    status,
                    date,
                    time,
                    draft.person_name,
                    draft.title,
                    draft.details,
                    tags,
                    record.created_at,
                    record.updated_at,
                ],
            )?;
            conn.last_insert_rowid()
        };

        log::debug!("Stored entry {id} ({entry_type})");
        Ok(id)
    }

    /// Get a single entry by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is corrupt
    pub fn get_entry(&self, id: EntryId) -> StorageResult<Option<Entry>> {
        let conn = self.conn()?;
        let row = conn
            .query_row(
                &format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1"),
                params![id],
                EntryRow::from_row,
            )
            .optional()?;

        row.map(EntryRow::into_entry).transpose()
    }

    /// Get every stored entry in key order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or any row is corrupt
    pub fn get_all_entries(&self) -> StorageResult<Vec<Entry>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("SELECT {ENTRY_COLUMNS} FROM entries ORDER BY id"))?;

        let rows = stmt
            .query_map([], EntryRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(EntryRow::into_entry).collect()
    }

    /// Delete an entry; deleting a missing id is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete operation fails
    pub fn delete_entry(&self, id: EntryId) -> StorageResult<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM entries WHERE id = ?1", params![id])?;
        log::debug!("Deleted entry {id} ({deleted} row(s))");
        Ok(())
    }

    /// Delete every entry, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete operation fails
    pub fn clear_entries(&self) -> StorageResult<usize> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM entries", [])?;
        log::info!("Cleared {deleted} entries");
        Ok(deleted)
    }
}
