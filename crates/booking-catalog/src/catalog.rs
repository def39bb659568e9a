//! Shop catalog
//!
//! Maps each shop to its ordered locations and time slots. A [`Catalog`] is
//! built once at start-up and only ever read afterwards; callers hold it by
//! reference (or behind an `Arc`) and pass it to whatever needs lookups.

use indexmap::IndexMap;

use crate::error::CatalogError;

/// Locations and time slots registered for one shop
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShopEntry {
    /// Valid locations, in display order
    pub locations: Vec<String>,
    /// Valid time slots, in display order
    pub time_slots: Vec<String>,
}

impl ShopEntry {
    /// Create an entry from locations and time slots
    #[must_use]
    pub fn new<L, T>(locations: L, time_slots: T) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            locations: dedup(locations),
            time_slots: dedup(time_slots),
        }
    }

    /// Whether `location` is registered for this shop
    #[inline]
    #[must_use]
    pub fn has_location(&self, location: &str) -> bool {
        self.locations.iter().any(|l| l == location)
    }

    /// Whether `slot` is registered for this shop
    #[inline]
    #[must_use]
    pub fn has_time_slot(&self, slot: &str) -> bool {
        self.time_slots.iter().any(|s| s == slot)
    }
}

/// Ordered sets keep first occurrence only
fn dedup<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let item = item.into();
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Immutable shop reference table
///
/// Shop order is the order shops were supplied in, which is also the
/// order listings present them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    shops: IndexMap<String, ShopEntry>,
}

impl Catalog {
    /// Build a catalog from `(name, entry)` pairs
    ///
    /// # Errors
    /// Rejects an empty list, blank or repeated shop names, and shops
    /// without locations.
    pub fn from_shops<I, S>(shops: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (S, ShopEntry)>,
        S: Into<String>,
    {
        let mut map = IndexMap::new();
        for (name, entry) in shops {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(CatalogError::EmptyShopName);
            }
            if entry.locations.is_empty() {
                return Err(CatalogError::NoLocations { name });
            }
            if map.contains_key(&name) {
                return Err(CatalogError::DuplicateShop { name });
            }
            map.insert(name, entry);
        }

        if map.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { shops: map })
    }

    /// Number of shops
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.shops.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }

    /// Shop names in catalog order
    pub fn shop_names(&self) -> impl Iterator<Item = &str> {
        self.shops.keys().map(String::as_str)
    }

    /// Iterate `(name, entry)` pairs in catalog order
    pub fn shops(&self) -> impl Iterator<Item = (&str, &ShopEntry)> {
        self.shops.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Whether `shop` is a known shop name (exact match)
    #[inline]
    #[must_use]
    pub fn contains_shop(&self, shop: &str) -> bool {
        self.shops.contains_key(shop)
    }

    /// Entry for `shop`
    #[inline]
    #[must_use]
    pub fn shop(&self, shop: &str) -> Option<&ShopEntry> {
        self.shops.get(shop)
    }

    /// Locations registered for `shop`; empty for unknown shops
    #[must_use]
    pub fn locations_for(&self, shop: &str) -> &[String] {
        self.shops
            .get(shop)
            .map_or(&[][..], |entry| entry.locations.as_slice())
    }

    /// Time slots registered for `shop`; empty for unknown shops
    #[must_use]
    pub fn time_slots_for(&self, shop: &str) -> &[String] {
        self.shops
            .get(shop)
            .map_or(&[][..], |entry| entry.time_slots.as_slice())
    }

    /// Shops that have a branch at `location`, in catalog order
    #[must_use]
    pub fn shops_at(&self, location: &str) -> Vec<&str> {
        self.shops
            .iter()
            .filter(|(_, entry)| entry.has_location(location))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Every location across all shops, first-seen order, no repeats
    #[must_use]
    pub fn all_locations(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for entry in self.shops.values() {
            for location in &entry.locations {
                if !out.contains(&location.as_str()) {
                    out.push(location);
                }
            }
        }
        out
    }
}
