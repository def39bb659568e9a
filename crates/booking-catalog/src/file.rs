//! TOML catalog files
//!
//! ```toml
//! [[shops]]
//! name = "Chanel Boutique"
//! locations = ["Dubai, UAE"]
//! time_slots = ["10:00 AM", "11:00 AM"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::catalog::{Catalog, ShopEntry};
use crate::error::CatalogError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    shops: Vec<ShopRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ShopRecord {
    name: String,
    locations: Vec<String>,
    #[serde(default)]
    time_slots: Vec<String>,
}

impl Catalog {
    /// Parse a catalog from TOML text
    ///
    /// `origin` is only used for error context.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] for malformed TOML and the
    /// [`Catalog::from_shops`] errors for inconsistent content.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(text).map_err(|source| CatalogError::parse(origin, source))?;

        Self::from_shops(
            file.shops
                .into_iter()
                .map(|shop| (shop.name, ShopEntry::new(shop.locations, shop.time_slots))),
        )
    }

    /// Load a catalog from a TOML file
    ///
    /// # Errors
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise
    /// the errors of [`Catalog::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::io(path, source))?;
        let catalog = Self::from_toml_str(&text, path)?;
        tracing::debug!("Loaded catalog {} with {} shops", path.display(), catalog.len());
        Ok(catalog)
    }
}
