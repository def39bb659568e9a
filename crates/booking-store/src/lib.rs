//! Booking Store
//!
//! Durable, append-only storage of booking records in a headered CSV file.
//!
//! # Overview
//!
//! - **RecordStore**: initialize / append / read_all / search / sort
//! - **CsvTable**: the headered-file plumbing, reused by the account store
//! - **StoreError**: every I/O or format failure, never a panic
//!
//! File format:
//!
//! ```text
//! User Name,Email,Phone,Shop Name,Booking Time,Location
//! alice,alice@example.com,0501234567,Chanel Boutique,10:00 AM,"Dubai, UAE"
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use booking_model::{BookingField, BookingRecord};
//! use booking_store::RecordStore;
//!
//! # fn example() -> Result<(), booking_store::StoreError> {
//! let store = RecordStore::new("data/bookings.csv");
//! store.initialize()?;
//! store.append(&BookingRecord::new(
//!     "alice", "alice@example.com", "0501234567",
//!     "Chanel Boutique", "10:00 AM", "Dubai, UAE",
//! ))?;
//! let mine = store.search("alice@", BookingField::Email)?;
//! assert_eq!(mine.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod query;
pub mod store;
pub mod table;

// Re-exports
pub use error::{StoreError, STORAGE_UNAVAILABLE};
pub use query::{filter_records, parse_clock, sort_records};
pub use store::RecordStore;
pub use table::CsvTable;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
