use std::path::PathBuf;
use thiserror::Error;

use faithlog_storage::{StorageError, ValidationError};

/// Failure of a repository call
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage fault: {0}")]
    Storage(#[from] StorageError),
    #[error("invalid entry: {0}")]
    Validation(#[from] ValidationError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failure while resolving paths or reading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine the {0} directory")]
    NoDirectory(&'static str),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
