//! Database helper functions for safe type conversions.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{StorageError, StorageResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Parse a `YYYY-MM-DD` column value, tagging failures with the row id.
pub fn parse_date(id: i64, s: &str) -> StorageResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| corrupt(id, format!("date '{s}': {e}")))
}

/// Parse a `HH:MM:SS` column value, tagging failures with the row id.
pub fn parse_time(id: i64, s: &str) -> StorageResult<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FORMAT).map_err(|e| corrupt(id, format!("time '{s}': {e}")))
}

pub fn corrupt(id: i64, reason: impl Into<String>) -> StorageError {
    StorageError::Corrupt {
        id,
        reason: reason.into(),
    }
}
