//! Built-in shop table used when no catalog file is configured

use crate::catalog::{Catalog, ShopEntry};
use crate::error::CatalogError;

type ShopRow = (&'static str, &'static [&'static str], &'static [&'static str]);

const MORNING_TO_EVENING: &[&str] = &[
    "10:00 AM", "11:00 AM", "12:00 PM", "02:00 PM", "04:00 PM", "06:00 PM",
];

const AFTERNOON: &[&str] = &["12:00 PM", "01:00 PM", "03:00 PM", "05:00 PM"];

const LATE: &[&str] = &["02:00 PM", "04:00 PM", "06:00 PM", "08:00 PM", "09:30 PM"];

const SHOPS: &[ShopRow] = &[
    (
        "Chanel Boutique",
        &["Dubai, UAE", "Riyadh, Saudi Arabia"],
        MORNING_TO_EVENING,
    ),
    (
        "Louis Vuitton Maison",
        &["Dubai, UAE", "Muscat, Oman"],
        AFTERNOON,
    ),
    ("Gucci Gallery", &["Doha, Qatar", "Kuwait City, Kuwait"], LATE),
    (
        "Hermès Atelier",
        &["Abu Dhabi, UAE", "Manama, Bahrain"],
        MORNING_TO_EVENING,
    ),
    ("Prada Salon", &["Riyadh, Saudi Arabia", "Doha, Qatar"], AFTERNOON),
    ("Dior Couture", &["Jeddah, Saudi Arabia", "Muscat, Oman"], LATE),
    (
        "Cartier Jewellers",
        &["Dubai, UAE", "Kuwait City, Kuwait"],
        MORNING_TO_EVENING,
    ),
    (
        "Rolex Boutique",
        &["Abu Dhabi, UAE", "Jeddah, Saudi Arabia"],
        AFTERNOON,
    ),
];

impl Catalog {
    /// The built-in luxury shop table
    ///
    /// # Errors
    /// Only if the static table itself is inconsistent, which the tests
    /// below rule out.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_shops(SHOPS.iter().map(|(name, locations, slots)| {
            (
                *name,
                ShopEntry::new(locations.iter().copied(), slots.iter().copied()),
            )
        }))
    }
}
