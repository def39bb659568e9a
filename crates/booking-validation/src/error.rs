//! Validation error codes
//!
//! Each variant's display text is the message shown to the user verbatim.

use booking_model::BookingField;

/// First failing check for a candidate booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    /// A required field is empty or whitespace-only, or the shop name is
    /// not in the catalog
    #[error("All fields must be filled out.")]
    EmptyField(BookingField),

    /// Email does not match `local@domain.tld`
    #[error("Invalid email address. Please enter a valid email.")]
    InvalidEmail,

    /// Phone is not 8-15 digits
    #[error("Invalid phone number. Please enter a valid phone number.")]
    InvalidPhone,

    /// Booking time is not `HH:MM AM|PM`
    #[error("Invalid booking time. Please use HH:MM AM/PM format.")]
    InvalidTime,

    /// Location is not registered for the chosen shop
    #[error("Please select a valid location.")]
    InvalidLocation,
}

impl ValidationError {
    /// Field the error is about
    #[inline]
    #[must_use]
    pub const fn field(&self) -> BookingField {
        match self {
            Self::EmptyField(field) => *field,
            Self::InvalidEmail => BookingField::Email,
            Self::InvalidPhone => BookingField::Phone,
            Self::InvalidTime => BookingField::BookingTime,
            Self::InvalidLocation => BookingField::Location,
        }
    }

    /// Stable machine-readable code
    #[inline]
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyField(_) => "empty_field",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidPhone => "invalid_phone",
            Self::InvalidTime => "invalid_time",
            Self::InvalidLocation => "invalid_location",
        }
    }
}
