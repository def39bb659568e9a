//! Account errors

use booking_store::StoreError;

/// Failure to register or sign in
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Username, email or password was blank
    #[error("All fields are required!")]
    MissingField {
        /// Which input was blank
        field: &'static str,
    },

    /// Username or email already belongs to an account
    #[error("Username or email already registered!")]
    Duplicate {
        /// Which column collided (`username` or `email`)
        field: &'static str,
    },

    /// No account matches the identifier and password
    #[error("Invalid username/email or password!")]
    InvalidCredentials,

    /// The account file could not be read or written
    #[error("account store error: {0}")]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Caused by user input rather than storage
    #[inline]
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Store(_))
    }

    /// Text suitable for showing to the user
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Store(err) => err.user_message().to_string(),
            other => other.to_string(),
        }
    }
}
