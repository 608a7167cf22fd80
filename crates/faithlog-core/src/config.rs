use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use faithlog_storage::Database;

use crate::error::ConfigError;
use crate::i18n::Language;

/// Environment variable that overrides the database location
pub const DB_PATH_ENV: &str = "FAITHLOG_DB";

const APP_DIR: &str = "faithlog";
const CONFIG_FILE: &str = "config.toml";

/// Get the config directory for faithlog.
///
/// # Errors
///
/// Returns an error if the config directory cannot be determined.
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    let mut path = dirs::config_dir().ok_or(ConfigError::NoDirectory("config"))?;
    path.push(APP_DIR);
    Ok(path)
}

/// Optional settings read from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_path: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
    pub default_language: Option<Language>,
    /// TrueType/OpenType font embedded in PDF reports
    pub report_font: Option<PathBuf>,
}

impl Config {
    /// Load `<config_dir>/faithlog/config.toml`, or defaults when it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_dir()?.join(CONFIG_FILE))
    }

    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Database file: `FAITHLOG_DB`, then the config file, then
    /// [`Database::default_db_path`]
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        let from_env = std::env::var_os(DB_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.resolve_database_path(from_env)
    }

    fn resolve_database_path(&self, from_env: Option<PathBuf>) -> PathBuf {
        from_env
            .or_else(|| self.database_path.clone())
            .unwrap_or_else(Database::default_db_path)
    }

    /// Where exported reports go unless a directory is given explicitly
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.default_language.unwrap_or_default()
    }
}
