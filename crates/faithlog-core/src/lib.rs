pub mod clock;
pub mod config;
pub mod error;
pub mod i18n;
pub mod journal;
pub mod repository;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use error::{ConfigError, RepositoryError, RepositoryResult};
pub use i18n::{Language, TextLookup, Translator};
pub use journal::Journal;
pub use repository::EntryRepository;
pub use store::RecordStore;
