//! Booking model
//!
//! Plain data shared by every layer of the booking workspace:
//! - **BookingRecord**: one row of the booking file
//! - **BookingField**: a column of that file, used to select search and sort keys
//!
//! # Example
//!
//! ```rust
//! use booking_model::{BookingField, BookingRecord};
//!
//! let record = BookingRecord::new(
//!     "alice", "alice@example.com", "0501234567",
//!     "Chanel Boutique", "10:00 AM", "Dubai, UAE",
//! );
//! let field: BookingField = "Shop Name".parse().unwrap();
//! assert_eq!(field.value_of(&record), "Chanel Boutique");
//! ```

#![warn(missing_docs)]

pub mod field;
pub mod record;

// Re-exports
pub use field::{BookingField, UnknownFieldError};
pub use record::BookingRecord;

/// Header row of the booking file, in column order
pub const BOOKING_HEADER: [&str; 6] = [
    "User Name",
    "Email",
    "Phone",
    "Shop Name",
    "Booking Time",
    "Location",
];

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
