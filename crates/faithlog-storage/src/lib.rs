pub mod db;
pub mod error;
pub mod migrations;
pub mod models;

pub use db::Database;
pub use error::{ParseEnumError, StorageError, StorageResult, ValidationError};
pub use models::{
    Entry, EntryDraft, EntryId, EntryKind, EntryRecord, EntryType, Status, Tags,
};
