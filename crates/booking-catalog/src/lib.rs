//! Booking Catalog
//!
//! Static reference data for the booking workflow: which shops exist, where
//! each one has a branch, and which time slots it offers.
//!
//! # Overview
//!
//! - **Catalog**: immutable, ordered shop table with key lookups
//! - **ShopEntry**: a shop's locations and time slots
//! - Built-in table ([`Catalog::builtin`]) or TOML file ([`Catalog::load`])
//!
//! # Example
//!
//! ```rust
//! use booking_catalog::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! assert!(catalog.contains_shop("Chanel Boutique"));
//! assert!(catalog.locations_for("Chanel Boutique").iter().any(|l| l == "Dubai, UAE"));
//! ```

#![warn(missing_docs)]

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod file;

// Re-exports
pub use catalog::{Catalog, ShopEntry};
pub use error::CatalogError;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
