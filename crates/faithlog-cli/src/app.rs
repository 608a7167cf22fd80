//! Shared state for one CLI invocation

use anyhow::{Context, Result};
use std::path::PathBuf;

use faithlog_core::i18n::LANGUAGE_SETTING;
use faithlog_core::{Config, EntryRepository, Journal, Language, Translator};
use faithlog_storage::Database;

pub struct App {
    pub config: Config,
    pub database_path: PathBuf,
    pub journal: Journal<Database>,
}

impl App {
    pub async fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        let database_path = config.database_path();
        let db = Database::new(Some(database_path.clone())).with_context(|| {
            format!("Failed to open database at {}", database_path.display())
        })?;
        let journal = Journal::load(EntryRepository::new(db))
            .await
            .context("Failed to load entries")?;

        Ok(Self {
            config,
            database_path,
            journal,
        })
    }

    pub fn database(&self) -> &Database {
        self.journal.repository().store()
    }

    /// Stored preference, then the config default
    pub fn language(&self) -> Result<Language> {
        let stored = self.database().get_setting(LANGUAGE_SETTING)?;
        Ok(Language::from_setting(
            stored.as_deref(),
            self.config.language(),
        ))
    }

    pub fn translator(&self) -> Result<Translator> {
        Ok(Translator::new(self.language()?))
    }
}
