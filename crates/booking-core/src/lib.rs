//! Booking Core
//!
//! The booking workflow that front ends call.
//!
//! # Overview
//!
//! - **BookingConfig**: store paths, catalog source and log level, from
//!   defaults, TOML and environment
//! - **BookingService**: sign-up, sign-in, validated submission and queries
//! - **Confirmation**: the message produced for every stored booking
//! - **BookingError**: one error type with user-facing messages
//!
//! # Example
//!
//! ```rust,no_run
//! use booking_core::prelude::*;
//!
//! # fn main() -> Result<(), BookingError> {
//! let service = BookingService::open(&BookingConfig::new().with_data_dir("data"))?;
//! let account = service.sign_up("alice", "alice@example.com", "pw")?;
//!
//! let request = BookingRequest::new("0501234567", "Chanel Boutique", "10:00 AM", "Dubai, UAE");
//! let confirmation = service.submit(&account, request)?;
//! println!("{}", confirmation.sent_message());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod confirmation;
pub mod error;
pub mod service;

// Re-exports
pub use config::BookingConfig;
pub use confirmation::{Confirmation, BOOKING_SUCCESS, CONFIRMATION_SENDER};
pub use error::{BookingError, ConfigError};
pub use service::{BookingRequest, BookingService};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for front ends
    pub use crate::{
        BookingConfig, BookingError, BookingRequest, BookingService, Confirmation,
    };
    pub use booking_auth::UserAccount;
    pub use booking_model::{BookingField, BookingRecord};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
