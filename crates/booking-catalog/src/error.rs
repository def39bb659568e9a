//! Catalog errors

use std::path::PathBuf;

/// Failure to build a catalog from a file or a shop list
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("I/O error while reading catalog {path}: {source}")]
    Io {
        /// Catalog file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid TOML for the catalog schema
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        /// Catalog file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// The same shop name appears twice
    #[error("shop '{name}' is listed more than once")]
    DuplicateShop {
        /// Offending shop name
        name: String,
    },

    /// A shop has a blank name
    #[error("catalog contains a shop with an empty name")]
    EmptyShopName,

    /// A shop lists no locations, so nothing could ever be booked there
    #[error("shop '{name}' has no locations")]
    NoLocations {
        /// Offending shop name
        name: String,
    },

    /// No shops at all
    #[error("catalog has no shops")]
    Empty,
}

impl CatalogError {
    /// Create an I/O error with path context
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with path context
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
