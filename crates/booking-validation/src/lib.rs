//! Booking Validation
//!
//! Decides whether a candidate booking may enter the store.
//!
//! # Overview
//!
//! - Format rules: [`validate_email`], [`validate_phone`],
//!   [`validate_booking_time`]
//! - Catalog rules: [`FieldValidator::validate_shop_name`],
//!   [`FieldValidator::validate_shop_location`]
//! - [`FieldValidator::validate_all_fields`]: fixed-priority check returning
//!   the first [`ValidationError`]
//!
//! # Example
//!
//! ```rust
//! use booking_catalog::Catalog;
//! use booking_model::BookingRecord;
//! use booking_validation::{FieldValidator, ValidationError};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let validator = FieldValidator::new(&catalog);
//!
//! let record = BookingRecord::new(
//!     "alice", "alice@example.com", "+971501234567",
//!     "Chanel Boutique", "10:00 AM", "Dubai, UAE",
//! );
//! assert_eq!(validator.validate_all_fields(&record), Err(ValidationError::InvalidPhone));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod rules;
pub mod validator;

// Re-exports
pub use error::ValidationError;
pub use rules::{is_blank, validate_booking_time, validate_email, validate_phone};
pub use validator::FieldValidator;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for validation
    pub use crate::{
        validate_booking_time, validate_email, validate_phone, FieldValidator, ValidationError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
