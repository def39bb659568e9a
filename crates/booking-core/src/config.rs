//! Workflow configuration
//!
//! Resolution order, later wins: defaults, TOML file, environment, explicit
//! `with_*` calls by the caller.

use std::path::{Path, PathBuf};

use booking_catalog::Catalog;
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, ConfigError};

/// Data directory; sets both store files beneath it
pub const ENV_DATA_DIR: &str = "BOOKING_DATA_DIR";
/// Booking file path
pub const ENV_BOOKINGS_FILE: &str = "BOOKING_FILE";
/// Account file path
pub const ENV_USERS_FILE: &str = "BOOKING_USERS_FILE";
/// Catalog TOML path
pub const ENV_CATALOG_FILE: &str = "BOOKING_CATALOG";
/// Log filter
pub const ENV_LOG_LEVEL: &str = "BOOKING_LOG";

const BOOKINGS_FILE_NAME: &str = "bookings.csv";
const USERS_FILE_NAME: &str = "users.csv";

/// Where the stores live and how to log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookingConfig {
    /// Booking CSV file
    pub bookings_file: PathBuf,
    /// Account CSV file
    pub users_file: PathBuf,
    /// Catalog TOML; `None` uses the built-in table
    pub catalog_file: Option<PathBuf>,
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl BookingConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put both store files under `dir`
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.bookings_file = dir.join(BOOKINGS_FILE_NAME);
        self.users_file = dir.join(USERS_FILE_NAME);
        self
    }

    /// With booking file
    #[inline]
    #[must_use]
    pub fn with_bookings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.bookings_file = path.into();
        self
    }

    /// With account file
    #[inline]
    #[must_use]
    pub fn with_users_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.users_file = path.into();
        self
    }

    /// With catalog file
    #[inline]
    #[must_use]
    pub fn with_catalog_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_file = Some(path.into());
        self
    }

    /// With log level
    #[inline]
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Parse TOML text; missing keys keep their defaults
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Io`] if unreadable, otherwise as
    /// [`BookingConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Apply overrides from the process environment
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup` (the environment, or a map in tests)
    ///
    /// Blank values are ignored. The data directory applies first, so a
    /// specific file variable beats it.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(dir) = get(ENV_DATA_DIR) {
            self = self.with_data_dir(dir);
        }
        if let Some(path) = get(ENV_BOOKINGS_FILE) {
            self.bookings_file = path.into();
        }
        if let Some(path) = get(ENV_USERS_FILE) {
            self.users_file = path.into();
        }
        if let Some(path) = get(ENV_CATALOG_FILE) {
            self.catalog_file = Some(path.into());
        }
        if let Some(level) = get(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        self
    }

    /// Build the catalog this configuration points at
    ///
    /// # Errors
    /// [`BookingError::Catalog`] if the file cannot be loaded.
    pub fn catalog(&self) -> Result<Catalog, BookingError> {
        let catalog = match &self.catalog_file {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };
        Ok(catalog)
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self::new_in(Path::new("data"))
    }
}

impl BookingConfig {
    fn new_in(dir: &Path) -> Self {
        Self {
            bookings_file: dir.join(BOOKINGS_FILE_NAME),
            users_file: dir.join(USERS_FILE_NAME),
            catalog_file: None,
            log_level: "info".to_string(),
        }
    }
}
