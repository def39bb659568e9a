//! Record validation against the catalog
//!
//! [`FieldValidator`] borrows a [`Catalog`] and applies the format rules plus
//! the shop/location pairing check to a whole [`BookingRecord`].

use booking_catalog::Catalog;
use booking_model::{BookingField, BookingRecord};

use crate::error::ValidationError;
use crate::rules::{is_blank, validate_booking_time, validate_email, validate_phone};

/// Catalog-aware validator for candidate bookings
///
/// Pure: no I/O, never panics, same answer for the same input.
#[derive(Debug, Clone, Copy)]
pub struct FieldValidator<'a> {
    catalog: &'a Catalog,
}

impl<'a> FieldValidator<'a> {
    /// Create a validator over `catalog`
    #[inline]
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Catalog this validator checks against
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Shop name is a catalog shop (exact match)
    #[inline]
    #[must_use]
    pub fn validate_shop_name(&self, shop: &str) -> bool {
        self.catalog.contains_shop(shop)
    }

    /// `location` is registered for `shop` specifically
    ///
    /// A location that only belongs to some other shop is rejected.
    #[inline]
    #[must_use]
    pub fn validate_shop_location(&self, shop: &str, location: &str) -> bool {
        self.catalog
            .shop(shop)
            .is_some_and(|entry| entry.has_location(location))
    }

    /// `time` is one of the slots `shop` offers
    #[inline]
    #[must_use]
    pub fn validate_time_slot(&self, shop: &str, time: &str) -> bool {
        self.catalog
            .shop(shop)
            .is_some_and(|entry| entry.has_time_slot(time))
    }

    /// Run every check in priority order and report the first failure
    ///
    /// Order: email, phone, booking time, shop name, location, then the
    /// user name. For each field an empty value fails with
    /// [`ValidationError::EmptyField`] before its format is looked at.
    ///
    /// # Errors
    /// The first failing check, as a [`ValidationError`].
    pub fn validate_all_fields(&self, record: &BookingRecord) -> Result<(), ValidationError> {
        let result = self.first_failure(record);
        if let Err(error) = &result {
            tracing::debug!(code = error.code(), field = %error.field(), "booking rejected");
        }
        result
    }

    fn first_failure(&self, record: &BookingRecord) -> Result<(), ValidationError> {
        check(record, BookingField::Email, validate_email, ValidationError::InvalidEmail)?;
        check(record, BookingField::Phone, validate_phone, ValidationError::InvalidPhone)?;
        check(
            record,
            BookingField::BookingTime,
            validate_booking_time,
            ValidationError::InvalidTime,
        )?;
        check(
            record,
            BookingField::ShopName,
            |shop| self.validate_shop_name(shop),
            ValidationError::EmptyField(BookingField::ShopName),
        )?;
        check(
            record,
            BookingField::Location,
            |location| self.validate_shop_location(&record.shop_name, location),
            ValidationError::InvalidLocation,
        )?;

        if is_blank(&record.user_name) {
            return Err(ValidationError::EmptyField(BookingField::UserName));
        }

        Ok(())
    }
}

fn check(
    record: &BookingRecord,
    field: BookingField,
    rule: impl Fn(&str) -> bool,
    failure: ValidationError,
) -> Result<(), ValidationError> {
    let value = field.value_of(record);
    if is_blank(value) {
        return Err(ValidationError::EmptyField(field));
    }
    if !rule(value) {
        return Err(failure);
    }
    Ok(())
}
