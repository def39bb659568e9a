//! Account store
//!
//! Accounts live in their own append-only CSV file. Registration checks
//! uniqueness with a full scan and appends inside one critical section, so
//! two registrations through the same [`AccountStore`] cannot both pass the
//! check. Separate processes sharing the file are not coordinated.

use std::path::{Path, PathBuf};

use booking_store::{CsvTable, StoreError};
use parking_lot::Mutex;

use crate::account::{UserAccount, ACCOUNT_HEADER};
use crate::error::AuthError;

/// Registered users, one row each
#[derive(Debug)]
pub struct AccountStore {
    table: CsvTable,
    write_lock: Mutex<()>,
}

impl AccountStore {
    /// Store backed by the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            table: CsvTable::new(path, &ACCOUNT_HEADER),
            write_lock: Mutex::new(()),
        }
    }

    /// Backing file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        self.table.path()
    }

    /// Create the file with its header if it is absent or empty
    ///
    /// # Errors
    /// [`StoreError`] if the file cannot be created.
    pub fn initialize(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock();
        self.table.initialize().map(|_| ())
    }

    /// All accounts in registration order; a missing file reads as none
    ///
    /// # Errors
    /// [`StoreError`] for unreadable or malformed files.
    pub fn accounts(&self) -> Result<Vec<UserAccount>, StoreError> {
        match self.table.read_all() {
            Err(err) if err.is_not_found() => Ok(Vec::new()),
            other => other,
        }
    }

    /// Register a new user
    ///
    /// All three inputs are trimmed first; the trimmed values are what get
    /// checked, compared and stored. Fails before anything is written if a
    /// field is blank or if the username or the email already belongs to an
    /// account.
    ///
    /// # Errors
    /// [`AuthError::MissingField`], [`AuthError::Duplicate`], or
    /// [`AuthError::Store`].
    pub fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserAccount, AuthError> {
        let [username, email, password] = trimmed([
            ("username", username),
            ("email", email),
            ("password", password),
        ])?;

        let _guard = self.write_lock.lock();
        self.table.initialize()?;

        for existing in self.table.read_all::<UserAccount>()? {
            if existing.username == username {
                return Err(AuthError::Duplicate { field: "username" });
            }
            if existing.email == email {
                return Err(AuthError::Duplicate { field: "email" });
            }
        }

        let account = UserAccount::new(username, email, password);
        self.table.append(&account)?;
        tracing::info!(username = %account.username, "Registered account");
        Ok(account)
    }

    /// Find the account for `identifier` (username or email) and `password`
    ///
    /// Both inputs are trimmed, as at registration.
    ///
    /// # Errors
    /// [`AuthError::MissingField`] for a blank input,
    /// [`AuthError::InvalidCredentials`] when nothing matches, or
    /// [`AuthError::Store`].
    pub fn sign_in(&self, identifier: &str, password: &str) -> Result<UserAccount, AuthError> {
        let [identifier, password] =
            trimmed([("identifier", identifier), ("password", password)])?;

        self.accounts()?
            .into_iter()
            .find(|account| {
                account.is_identified_by(identifier) && account.password_hash.matches(password)
            })
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Whether `identifier` and `password` match a registered account
    ///
    /// Storage failures count as a failed sign-in and are logged.
    #[must_use]
    pub fn authenticate(&self, identifier: &str, password: &str) -> bool {
        match self.sign_in(identifier, password) {
            Ok(_) => true,
            Err(AuthError::Store(err)) => {
                tracing::warn!("Account lookup failed: {}", err);
                false
            }
            Err(_) => false,
        }
    }

    /// Whether the username or the email is already taken
    ///
    /// # Errors
    /// [`StoreError`] for unreadable or malformed files.
    pub fn is_registered(&self, username: &str, email: &str) -> Result<bool, StoreError> {
        let (username, email) = (username.trim(), email.trim());
        Ok(self
            .accounts()?
            .iter()
            .any(|account| account.username == username || account.email == email))
    }
}

/// Trim every input, failing on the first one left empty
fn trimmed<'a, const N: usize>(
    fields: [(&'static str, &'a str); N],
) -> Result<[&'a str; N], AuthError> {
    let mut values = [""; N];
    for (slot, (field, value)) in values.iter_mut().zip(fields) {
        *slot = value.trim();
        if slot.is_empty() {
            return Err(AuthError::MissingField { field });
        }
    }
    Ok(values)
}
