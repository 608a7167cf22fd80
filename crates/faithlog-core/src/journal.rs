//! In-memory view of the journal.
//!
//! Every mutation awaits the repository and then re-reads the whole entry
//! list, so each write costs O(n). A failed mutation or refresh is logged and
//! the previously loaded list stays as it was.

use faithlog_storage::{Entry, EntryDraft, EntryId};

use crate::clock::{Clock, SystemClock};
use crate::error::RepositoryResult;
use crate::repository::EntryRepository;
use crate::store::RecordStore;

pub struct Journal<S, C = SystemClock> {
    repository: EntryRepository<S, C>,
    entries: Vec<Entry>,
}

impl<S: RecordStore, C: Clock> Journal<S, C> {
    /// Load the current entry list
    ///
    /// # Errors
    ///
    /// Returns an error if the initial read fails
    pub async fn load(repository: EntryRepository<S, C>) -> RepositoryResult<Self> {
        let entries = repository.list().await?;
        Ok(Self {
            repository,
            entries,
        })
    }

    /// Entries as of the last successful refresh, newest first
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn find(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn repository(&self) -> &EntryRepository<S, C> {
        &self.repository
    }

    /// Re-read every entry from the store
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails; the loaded list is left untouched
    pub async fn refresh(&mut self) -> RepositoryResult<()> {
        match self.repository.list().await {
            Ok(entries) => {
                self.entries = entries;
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to fetch entries: {e}");
                Err(e)
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if validation, the write, or the follow-up refresh fails
    pub async fn add(&mut self, draft: EntryDraft) -> RepositoryResult<Entry> {
        let added = self.repository.add(draft).await.map_err(|e| {
            log::error!("Failed to add entry: {e}");
            e
        })?;
        self.refresh().await?;
        Ok(added)
    }

    /// # Errors
    ///
    /// Returns an error if validation, the write, or the follow-up refresh fails
    pub async fn update(&mut self, entry: Entry) -> RepositoryResult<Entry> {
        let updated = self.repository.update(entry).await.map_err(|e| {
            log::error!("Failed to update entry: {e}");
            e
        })?;
        self.refresh().await?;
        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns an error if the delete or the follow-up refresh fails
    pub async fn remove(&mut self, id: EntryId) -> RepositoryResult<()> {
        self.repository.remove(id).await.map_err(|e| {
            log::error!("Failed to delete entry {id}: {e}");
            e
        })?;
        self.refresh().await
    }

    /// # Errors
    ///
    /// Returns an error if the clear or the follow-up refresh fails
    pub async fn clear(&mut self) -> RepositoryResult<()> {
        self.repository.clear().await.map_err(|e| {
            log::error!("Failed to clear entries: {e}");
            e
        })?;
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveTime};
    use faithlog_storage::{
        Database, EntryKind, EntryRecord, StorageError, StorageResult, Tags,
    };
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Real database that can be switched into a failing mode
    struct FlakyStore {
        db: Database,
        failing: Arc<AtomicBool>,
    }

    impl FlakyStore {
        fn check(&self) -> StorageResult<()> {
            if self.failing.load(Ordering::SeqCst) {
                Err(StorageError::LockPoisoned)
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl RecordStore for FlakyStore {
        async fn put(&self, record: &EntryRecord) -> StorageResult<EntryId> {
            self.check()?;
            self.db.put_entry(record)
        }

        async fn get(&self, id: EntryId) -> StorageResult<Option<Entry>> {
            self.check()?;
            self.db.get_entry(id)
        }

        async fn get_all(&self) -> StorageResult<Vec<Entry>> {
            self.check()?;
            self.db.get_all_entries()
        }

        async fn delete(&self, id: EntryId) -> StorageResult<()> {
            self.check()?;
            self.db.delete_entry(id)
        }

        async fn clear(&self) -> StorageResult<()> {
            self.check()?;
            self.db.clear_entries().map(|_| ())
        }
    }

    fn draft(person: &str) -> EntryDraft {
        EntryDraft {
            kind: EntryKind::Gratitude,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            person_name: person.to_string(),
            title: None,
            details: "Thankful for the morning".to_string(),
            tags: Tags::default(),
        }
    }

    async fn journal() -> (Journal<FlakyStore>, Arc<AtomicBool>) {
        let failing = Arc::new(AtomicBool::new(false));
        let store = FlakyStore {
            db: Database::open_in_memory().unwrap(),
            failing: Arc::clone(&failing),
        };
        let journal = Journal::load(EntryRepository::new(store)).await.unwrap();
        (journal, failing)
    }

    #[tokio::test]
    async fn test_mutations_refresh_entries() {
        let (mut journal, _) = journal().await;
        assert!(journal.entries().is_empty());

        let added = journal.add(draft("Ana")).await.unwrap();
        assert_eq!(journal.entries().len(), 1);
        assert!(journal.find(added.id).is_some());

        let mut edited = added.clone();
        edited.person_name = "Ana Maria".to_string();
        journal.update(edited).await.unwrap();
        assert_eq!(journal.entries()[0].person_name, "Ana Maria");

        journal.remove(added.id).await.unwrap();
        assert!(journal.entries().is_empty());
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_previous_entries() {
        let (mut journal, failing) = journal().await;
        journal.add(draft("Ana")).await.unwrap();
        let before = journal.entries().to_vec();

        failing.store(true, Ordering::SeqCst);
        assert!(journal.add(draft("Ben")).await.is_err());
        assert!(journal.clear().await.is_err());
        assert!(journal.refresh().await.is_err());
        assert_eq!(journal.entries(), before.as_slice());

        failing.store(false, Ordering::SeqCst);
        journal.clear().await.unwrap();
        assert!(journal.entries().is_empty());
    }
}
