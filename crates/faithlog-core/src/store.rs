//! Async seam between the repository and the record store.

use async_trait::async_trait;
use faithlog_storage::{Database, Entry, EntryId, EntryRecord, StorageResult};

/// Keyed entry storage with store-assigned ids
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert when `record.id` is `None`, otherwise replace; returns the id
    async fn put(&self, record: &EntryRecord) -> StorageResult<EntryId>;

    async fn get(&self, id: EntryId) -> StorageResult<Option<Entry>>;

    /// Every stored record, no particular order
    async fn get_all(&self) -> StorageResult<Vec<Entry>>;

    /// Missing ids are not an error
    async fn delete(&self, id: EntryId) -> StorageResult<()>;

    async fn clear(&self) -> StorageResult<()>;
}

#[async_trait]
impl RecordStore for Database {
    async fn put(&self, record: &EntryRecord) -> StorageResult<EntryId> {
        self.put_entry(record)
    }

    async fn get(&self, id: EntryId) -> StorageResult<Option<Entry>> {
        self.get_entry(id)
    }

    async fn get_all(&self) -> StorageResult<Vec<Entry>> {
        self.get_all_entries()
    }

    async fn delete(&self, id: EntryId) -> StorageResult<()> {
        self.delete_entry(id)
    }

    async fn clear(&self) -> StorageResult<()> {
        self.clear_entries().map(|_| ())
    }
}
