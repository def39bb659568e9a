//! Booking workflow service
//!
//! Ties the catalog, the booking store and the account store together:
//! a signed-in account submits a request, the request becomes a record,
//! the record is validated and appended, and a confirmation comes back.

use booking_auth::{AccountStore, UserAccount};
use booking_catalog::Catalog;
use booking_model::{BookingField, BookingRecord};
use booking_store::RecordStore;
use booking_validation::FieldValidator;
use serde::{Deserialize, Serialize};

use crate::config::BookingConfig;
use crate::confirmation::Confirmation;
use crate::error::BookingError;

/// What a signed-in user fills in; name and email come from the account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Contact phone
    pub phone: String,
    /// Catalog shop
    pub shop_name: String,
    /// `HH:MM AM/PM`
    pub booking_time: String,
    /// One of the shop's locations
    pub location: String,
}

impl BookingRequest {
    /// Create a request
    #[must_use]
    pub fn new(
        phone: impl Into<String>,
        shop_name: impl Into<String>,
        booking_time: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            phone: phone.into(),
            shop_name: shop_name.into(),
            booking_time: booking_time.into(),
            location: location.into(),
        }
    }

    /// Record this request would produce for `account`
    #[must_use]
    pub fn into_record(self, account: &UserAccount) -> BookingRecord {
        BookingRecord::new(
            account.username.clone(),
            account.email.clone(),
            self.phone,
            self.shop_name,
            self.booking_time,
            self.location,
        )
    }
}

/// The booking workflow over one catalog and two stores
#[derive(Debug)]
pub struct BookingService {
    catalog: Catalog,
    bookings: RecordStore,
    accounts: AccountStore,
}

impl BookingService {
    /// Open the stores named by `config`, creating their files if needed
    ///
    /// # Errors
    /// [`BookingError::Catalog`] or [`BookingError::Store`] when start-up
    /// fails.
    pub fn open(config: &BookingConfig) -> Result<Self, BookingError> {
        let catalog = config.catalog()?;
        tracing::debug!(
            shops = catalog.len(),
            bookings = %config.bookings_file.display(),
            users = %config.users_file.display(),
            "Opening booking service"
        );
        Self::new(
            catalog,
            RecordStore::new(&config.bookings_file),
            AccountStore::new(&config.users_file),
        )
    }

    /// Assemble a service from parts and initialize both stores
    ///
    /// # Errors
    /// [`BookingError::Store`] if either file cannot be created.
    pub fn new(
        catalog: Catalog,
        bookings: RecordStore,
        accounts: AccountStore,
    ) -> Result<Self, BookingError> {
        bookings.initialize()?;
        accounts.initialize()?;
        Ok(Self {
            catalog,
            bookings,
            accounts,
        })
    }

    /// Catalog in use
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validator bound to this service's catalog
    #[inline]
    #[must_use]
    pub fn validator(&self) -> FieldValidator<'_> {
        FieldValidator::new(&self.catalog)
    }

    /// Booking store
    #[inline]
    #[must_use]
    pub fn bookings(&self) -> &RecordStore {
        &self.bookings
    }

    /// Account store
    #[inline]
    #[must_use]
    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    /// Register a new account
    ///
    /// # Errors
    /// [`BookingError::Auth`] for blank fields, a taken username or email,
    /// or a storage failure.
    pub fn sign_up(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserAccount, BookingError> {
        Ok(self.accounts.register(username, email, password)?)
    }

    /// Sign in by username or email
    ///
    /// # Errors
    /// [`BookingError::Auth`] when the credentials match no account.
    pub fn sign_in(&self, identifier: &str, password: &str) -> Result<UserAccount, BookingError> {
        let account = self.accounts.sign_in(identifier, password)?;
        tracing::debug!(username = %account.username, "Signed in");
        Ok(account)
    }

    /// Validate and store a booking for `account`
    ///
    /// Field checks run first in their fixed order. Only a record that
    /// passes them is checked against the shop's time slots.
    ///
    /// # Errors
    /// [`BookingError::Validation`], [`BookingError::SlotUnavailable`] or
    /// [`BookingError::Store`]. Nothing is written unless every check
    /// passes.
    pub fn submit(
        &self,
        account: &UserAccount,
        request: BookingRequest,
    ) -> Result<Confirmation, BookingError> {
        let record = request.into_record(account);
        let validator = self.validator();

        validator.validate_all_fields(&record)?;
        if !validator.validate_time_slot(&record.shop_name, &record.booking_time) {
            return Err(BookingError::SlotUnavailable {
                shop: record.shop_name,
                time: record.booking_time,
            });
        }

        if let Err(err) = self.bookings.append(&record) {
            tracing::warn!("Failed to store booking: {}", err);
            return Err(err.into());
        }

        let confirmation = Confirmation::for_booking(&record);
        tracing::info!(
            username = %record.user_name,
            shop = %record.shop_name,
            time = %record.booking_time,
            "Booking stored; confirmation addressed to {}",
            confirmation.to
        );
        Ok(confirmation)
    }

    /// Every booking, earliest time first
    ///
    /// # Errors
    /// [`BookingError::Store`] if the file cannot be read.
    pub fn all_bookings(&self) -> Result<Vec<BookingRecord>, BookingError> {
        self.sort(BookingField::BookingTime, false)
    }

    /// Bookings made under `account`'s email, in file order
    ///
    /// Matches the whole address, ignoring case, so `a@x.com` does not pick
    /// up `ba@x.com`.
    ///
    /// # Errors
    /// [`BookingError::Store`] if the file cannot be read.
    pub fn bookings_for(&self, account: &UserAccount) -> Result<Vec<BookingRecord>, BookingError> {
        Ok(self
            .bookings
            .search(&account.email, BookingField::Email)?
            .into_iter()
            .filter(|record| record.email.eq_ignore_ascii_case(&account.email))
            .collect())
    }

    /// Bookings whose `field` contains `query`, ignoring case
    ///
    /// # Errors
    /// [`BookingError::Store`] if the file cannot be read.
    pub fn search(
        &self,
        query: &str,
        field: BookingField,
    ) -> Result<Vec<BookingRecord>, BookingError> {
        Ok(self.bookings.search(query, field)?)
    }

    /// Every booking ordered by `field`
    ///
    /// # Errors
    /// [`BookingError::Store`] if the file cannot be read.
    pub fn sort(
        &self,
        field: BookingField,
        descending: bool,
    ) -> Result<Vec<BookingRecord>, BookingError> {
        Ok(self.bookings.sort(field, descending)?)
    }
}
