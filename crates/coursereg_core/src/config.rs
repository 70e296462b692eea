//! Database connection configuration.
//!
//! # Responsibility
//! - Carry the `url`/`user`/`password` triple handed to the gateway.
//! - Resolve the SQLite location from the configured URL.
//!
//! # Invariants
//! - Configuration is passed explicitly; nothing here is global.
//! - `password` never appears in `Debug` output or logs.

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

pub const DB_URL_ENV: &str = "COURSEREG_DB_URL";
pub const DB_USER_ENV: &str = "COURSEREG_DB_USER";
pub const DB_PASSWORD_ENV: &str = "COURSEREG_DB_PASSWORD";

const DEFAULT_DB_FILE_NAME: &str = "coursereg.sqlite3";

/// Configuration failure, raised before any connection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// URL is blank or has no path after its scheme prefix.
    EmptyUrl,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "database url cannot be empty"),
        }
    }
}

impl Error for ConfigError {}

/// Connection settings consumed by `SqliteCourseRepository`.
///
/// SQLite has no authentication; `user` and `password` are kept so callers
/// can hand over the same triple regardless of the backing store.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub user: String,
    pub password: String,
}

impl Debug for DatabaseConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl DatabaseConfig {
    pub fn new(
        url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            user: user.into(),
            password: password.into(),
        }
    }

    /// Config pointing at a database file, with empty credentials.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self::new(path.into().to_string_lossy().into_owned(), "", "")
    }

    /// Reads `COURSEREG_DB_URL`, `COURSEREG_DB_USER` and
    /// `COURSEREG_DB_PASSWORD`.
    ///
    /// A missing or blank URL falls back to `coursereg.sqlite3` in the
    /// system temp directory. Missing credentials become empty strings.
    pub fn from_env() -> Self {
        let url = std::env::var(DB_URL_ENV)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(default_db_url);
        let user = std::env::var(DB_USER_ENV).unwrap_or_default();
        let password = std::env::var(DB_PASSWORD_ENV).unwrap_or_default();
        Self::new(url, user, password)
    }

    /// Resolves `url` to a SQLite file path.
    ///
    /// Accepts a plain path, `sqlite://<path>` or `sqlite:<path>`.
    ///
    /// # Errors
    /// - `ConfigError::EmptyUrl` when nothing remains after trimming and
    ///   stripping the scheme.
    pub fn sqlite_path(&self) -> Result<PathBuf, ConfigError> {
        let trimmed = self.url.trim();
        let path = trimmed
            .strip_prefix("sqlite://")
            .or_else(|| trimmed.strip_prefix("sqlite:"))
            .unwrap_or(trimmed)
            .trim();
        if path.is_empty() {
            return Err(ConfigError::EmptyUrl);
        }
        Ok(PathBuf::from(path))
    }
}

fn default_db_url() -> String {
    std::env::temp_dir()
        .join(DEFAULT_DB_FILE_NAME)
        .to_string_lossy()
        .into_owned()
}
