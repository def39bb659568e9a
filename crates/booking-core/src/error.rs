//! Error types for the booking workflow
//!
//! Wraps every lower-layer failure so callers handle one type:
//! - Validation failures (user must correct input)
//! - Sign-up and sign-in failures
//! - Storage failures (shown as a generic message)
//! - Catalog and configuration failures at start-up

use std::path::PathBuf;

use booking_auth::AuthError;
use booking_catalog::CatalogError;
use booking_store::StoreError;
use booking_validation::ValidationError;

/// Main workflow error type
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// Candidate booking failed a field check
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Time is well-formed but the shop does not offer it
    #[error("Please select a valid time slot for {shop}.")]
    SlotUnavailable {
        /// Requested shop
        shop: String,
        /// Requested time
        time: String,
    },

    /// Sign-up or sign-in failed
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// Booking file could not be read or written
    #[error("booking store error: {0}")]
    Store(#[from] StoreError),

    /// Catalog could not be loaded
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BookingError {
    /// Caused by user input rather than the environment
    #[inline]
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::Validation(_) | Self::SlotUnavailable { .. } => true,
            Self::Auth(err) => err.is_user_error(),
            Self::Store(_) | Self::Catalog(_) | Self::Config(_) => false,
        }
    }

    /// Text suitable for showing to the user
    ///
    /// Storage problems collapse to the generic storage message; the
    /// detail belongs in logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Store(err) => err.user_message().to_string(),
            Self::Auth(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("I/O error while reading config {path}: {source}")]
    Io {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the config schema
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}
