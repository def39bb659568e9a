//! Booking record
//!
//! A [`BookingRecord`] is one row of the booking file. Serde names match
//! the header row so the same type reads and writes the file.

use serde::{Deserialize, Serialize};

/// One user's reservation request
///
/// All fields are plain text. A record is written once and never
/// mutated afterwards; it has no identity beyond its field values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BookingRecord {
    /// Display name of the signed-in user
    #[serde(rename = "User Name")]
    pub user_name: String,
    /// Contact email
    #[serde(rename = "Email")]
    pub email: String,
    /// Contact phone, digits only
    #[serde(rename = "Phone")]
    pub phone: String,
    /// Catalog shop name
    #[serde(rename = "Shop Name")]
    pub shop_name: String,
    /// Requested slot, `HH:MM AM|PM`
    #[serde(rename = "Booking Time")]
    pub booking_time: String,
    /// Shop location, must belong to `shop_name`
    #[serde(rename = "Location")]
    pub location: String,
}

impl BookingRecord {
    /// Create a record from its six fields
    #[inline]
    #[must_use]
    pub fn new(
        user_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        shop_name: impl Into<String>,
        booking_time: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            email: email.into(),
            phone: phone.into(),
            shop_name: shop_name.into(),
            booking_time: booking_time.into(),
            location: location.into(),
        }
    }

    /// With user name
    #[inline]
    #[must_use]
    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// With email
    #[inline]
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// With phone
    #[inline]
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// With shop name
    #[inline]
    #[must_use]
    pub fn with_shop_name(mut self, shop_name: impl Into<String>) -> Self {
        self.shop_name = shop_name.into();
        self
    }

    /// With booking time
    #[inline]
    #[must_use]
    pub fn with_booking_time(mut self, booking_time: impl Into<String>) -> Self {
        self.booking_time = booking_time.into();
        self
    }

    /// With location
    #[inline]
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// One-line summary used by listings
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} - {} ({}, {})",
            self.user_name, self.shop_name, self.booking_time, self.location
        )
    }
}
