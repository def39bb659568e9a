//! Booking Auth
//!
//! Sign-up and sign-in for the booking workflow.
//!
//! # Overview
//!
//! - **AccountStore**: append-only account file with a guarded
//!   check-then-append registration
//! - **UserAccount**: username, email and password digest
//! - **PasswordDigest**: lowercase hex SHA-256, the only form a password is stored in
//!
//! Account file format:
//!
//! ```text
//! Username,Email,Password
//! alice,alice@example.com,5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8
//! ```

#![warn(missing_docs)]

pub mod account;
pub mod error;
pub mod store;

// Re-exports
pub use account::{PasswordDigest, UserAccount, ACCOUNT_HEADER};
pub use error::AuthError;
pub use store::AccountStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
