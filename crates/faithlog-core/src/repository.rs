//! Entry repository
//!
//! Applies identity and timestamp rules on top of a [`RecordStore`]:
//! - `add` stamps `created_at == updated_at == now`
//! - `update` keeps `id` and `created_at`, refreshes `updated_at`
//! - `list` returns entries newest first by their (date, time)


use faithlog_storage::{Entry, EntryDraft, EntryId, EntryRecord};

use crate::clock::{Clock, SystemClock};
use crate::error::RepositoryResult;
use crate::store::RecordStore;

pub struct EntryRepository<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: RecordStore> EntryRepository<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: RecordStore, C: Clock> EntryRepository<S, C> {
    #[must_use]
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist a new entry and return it with its assigned id
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is missing required fields or the store write fails
    pub async fn add(&self, draft: EntryDraft) -> RepositoryResult<Entry> {
        let draft = draft.normalized();
        draft.validate()?;

        let now = self.clock.now_millis();
        let record = EntryRecord {
            id: None,
            draft,
            created_at: now,
            updated_at: now,
        };
        let id = self.store.put(&record).await?;
        log::debug!("Added entry {id}");
        Ok(record.into_entry(id))
    }

    /// Replace an existing entry's content, keeping its id and creation time
    ///
    /// # Errors
    ///
    /// Returns an error if the entry is missing required fields or the store write fails
    pub async fn update(&self, entry: Entry) -> RepositoryResult<Entry> {
        let draft = entry.draft().normalized();
        draft.validate()?;

        let record = EntryRecord {
            id: Some(entry.id),
            draft,
            created_at: entry.created_at,
            updated_at: self.clock.now_millis().max(entry.created_at),
        };
        let id = self.store.put(&record).await?;
        log::debug!("Updated entry {id}");
        Ok(record.into_entry(id))
    }

    /// # Errors
    ///
    /// Returns an error if the store lookup fails
    pub async fn get(&self, id: EntryId) -> RepositoryResult<Option<Entry>> {
        Ok(self.store.get(id).await?)
    }

    /// # Errors
    ///
    /// Returns an error if the store delete fails
    pub async fn remove(&self, id: EntryId) -> RepositoryResult<()> {
        self.store.delete(id).await?;
        log::debug!("Removed entry {id}");
        Ok(())
    }

    /// All entries, most recent (date, time) first; ties keep store order
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails
    pub async fn list(&self) -> RepositoryResult<Vec<Entry>> {
        let mut entries = self.store.get_all().await?;
        entries.sort_by(|a, b| b.occurred_at().cmp(&a.occurred_at()));
        Ok(entries)
    }

    /// # Errors
    ///
    /// Returns an error if the store clear fails
    pub async fn clear(&self) -> RepositoryResult<()> {
        self.store.clear().await?;
        log::info!("All entries cleared");
        Ok(())
    }
}
