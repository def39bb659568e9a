//! Format rules
//!
//! Stateless checks on single field values. Each returns `true` only for a
//! full match; there is no partial credit and no trimming.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern")
});

// ASCII digits only; `\d` would also admit other Unicode digit classes.
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8,15}$").expect("phone pattern"));

static BOOKING_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2]):[0-5][0-9] (AM|PM)$").expect("booking time pattern")
});

/// `local@domain.tld` with a TLD of two or more letters
#[inline]
#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// 8 to 15 digits, no `+`, spaces or separators
#[inline]
#[must_use]
pub fn validate_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}

/// Strict `HH:MM AM|PM`: zero-padded 01-12 hour, 00-59 minute, uppercase suffix
#[inline]
#[must_use]
pub fn validate_booking_time(time: &str) -> bool {
    BOOKING_TIME.is_match(time)
}

/// Empty or whitespace-only
#[inline]
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn email_accepts_common_forms() {
        assert!(validate_email("a@x.com"));
        assert!(validate_email("first.last+tag@mail.example.co"));
        assert!(validate_email("A_B%c-d@sub-domain.org"));
    }

    #[test]
    fn email_rejects_malformed() {
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign.com"));
        assert!(!validate_email("a@x"));
        assert!(!validate_email("a@x.c"));
        assert!(!validate_email("a b@x.com"));
        assert!(!validate_email("a@x.com "));
    }

    #[test]
    fn phone_length_bounds() {
        assert!(!validate_phone("1234567"));
        assert!(validate_phone("12345678"));
        assert!(validate_phone("123456789012345"));
        assert!(!validate_phone("1234567890123456"));
    }

    #[test]
    fn phone_rejects_symbols() {
        assert!(!validate_phone("+97150123456"));
        assert!(!validate_phone("050 123 4567"));
        assert!(!validate_phone("050-1234567"));
        assert!(!validate_phone("12345678\n"));
    }

    #[test]
    fn time_accepts_padded_twelve_hour() {
        assert!(validate_booking_time("09:00 AM"));
        assert!(validate_booking_time("12:59 PM"));
        assert!(validate_booking_time("01:30 PM"));
    }

    #[test]
    fn time_rejects_other_formats() {
        assert!(!validate_booking_time("9:00 AM"));
        assert!(!validate_booking_time("13:00 PM"));
        assert!(!validate_booking_time("00:30 AM"));
        assert!(!validate_booking_time("10:60 AM"));
        assert!(!validate_booking_time("10:00 am"));
        assert!(!validate_booking_time("10:00AM"));
        assert!(!validate_booking_time("14:00"));
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank(" x "));
    }

    proptest! {
        #[test]
        fn any_eight_to_fifteen_digits_is_a_phone(phone in "[0-9]{8,15}") {
            prop_assert!(validate_phone(&phone));
        }

        #[test]
        fn a_plus_sign_is_never_a_phone(prefix in "[0-9]{0,8}", suffix in "[0-9]{0,8}") {
            let phone = format!("{prefix}+{suffix}");
            prop_assert!(!validate_phone(&phone));
        }

        #[test]
        fn every_padded_slot_is_a_time(hour in 1u32..=12, minute in 0u32..60, pm in any::<bool>()) {
            let time = format!("{hour:02}:{minute:02} {}", if pm { "PM" } else { "AM" });
            prop_assert!(validate_booking_time(&time));
        }
    }
}
