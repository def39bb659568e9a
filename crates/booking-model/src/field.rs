//! Booking columns
//!
//! [`BookingField`] names one column of the booking file. The display form
//! is the exact header text, so it doubles as the query key for search and
//! sort.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::record::BookingRecord;

/// One column of the booking file, in header order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BookingField {
    /// `User Name`
    UserName,
    /// `Email`
    Email,
    /// `Phone`
    Phone,
    /// `Shop Name`
    ShopName,
    /// `Booking Time`
    BookingTime,
    /// `Location`
    Location,
}

impl BookingField {
    /// All columns in file order
    pub const ALL: [BookingField; 6] = [
        BookingField::UserName,
        BookingField::Email,
        BookingField::Phone,
        BookingField::ShopName,
        BookingField::BookingTime,
        BookingField::Location,
    ];

    /// Header text for this column
    #[inline]
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::UserName => "User Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::ShopName => "Shop Name",
            Self::BookingTime => "Booking Time",
            Self::Location => "Location",
        }
    }

    /// Borrow this column's value from a record
    #[inline]
    #[must_use]
    pub fn value_of(self, record: &BookingRecord) -> &str {
        match self {
            Self::UserName => &record.user_name,
            Self::Email => &record.email,
            Self::Phone => &record.phone,
            Self::ShopName => &record.shop_name,
            Self::BookingTime => &record.booking_time,
            Self::Location => &record.location,
        }
    }
}

impl Display for BookingField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for BookingField {
    type Err = UnknownFieldError;

    /// Accepts the header text (`Shop Name`) or its snake-case form
    /// (`shop_name`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| {
                field.header().eq_ignore_ascii_case(wanted)
                    || field
                        .header()
                        .replace(' ', "_")
                        .eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownFieldError {
                name: wanted.to_string(),
            })
    }
}

/// Column name did not match any booking field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown booking field '{name}'")]
pub struct UnknownFieldError {
    /// The rejected name
    pub name: String,
}
