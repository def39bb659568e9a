//! Account records and password digests

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Header row of the account file
pub const ACCOUNT_HEADER: [&str; 3] = ["Username", "Email", "Password"];

/// Lowercase hex SHA-256 of a plaintext password
///
/// The plaintext is never stored; only this digest reaches the file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Digest `password`
    #[must_use]
    pub fn of(password: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Whether `password` hashes to this digest
    #[inline]
    #[must_use]
    pub fn matches(&self, password: &str) -> bool {
        *self == Self::of(password)
    }

    /// The 64-character hex string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PasswordDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One registered user, as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unique login name
    #[serde(rename = "Username")]
    pub username: String,
    /// Unique email, also usable to sign in
    #[serde(rename = "Email")]
    pub email: String,
    /// Digest of the password
    #[serde(rename = "Password")]
    pub password_hash: PasswordDigest,
}

impl UserAccount {
    /// Create an account, hashing `password`
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>, password: &str) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password_hash: PasswordDigest::of(password),
        }
    }

    /// Signs in by username or by email
    #[inline]
    #[must_use]
    pub fn is_identified_by(&self, identifier: &str) -> bool {
        self.username == identifier || self.email == identifier
    }
}
