//! Testing utilities for the booking workspace
//!
//! Shared fixtures: a small catalog, valid records, and temp file paths.

#![allow(missing_docs)]

use std::path::PathBuf;

use booking_catalog::{Catalog, ShopEntry};
use booking_model::BookingRecord;
use tempfile::TempDir;

pub const CHANEL: &str = "Chanel Boutique";
pub const DIOR: &str = "Dior Couture";
pub const DUBAI: &str = "Dubai, UAE";
pub const MUSCAT: &str = "Muscat, Oman";

/// Two shops; Muscat belongs to Dior only.
pub fn test_catalog() -> Catalog {
    Catalog::from_shops([
        (
            CHANEL,
            ShopEntry::new(
                [DUBAI, "Riyadh, Saudi Arabia"],
                ["09:00 AM", "10:00 AM", "11:00 AM", "02:00 PM"],
            ),
        ),
        (DIOR, ShopEntry::new([MUSCAT], ["12:00 PM", "04:00 PM"])),
    ])
    .unwrap()
}

/// A record that passes every check against [`test_catalog`].
pub fn valid_record() -> BookingRecord {
    BookingRecord::new("alice", "alice@example.com", "0501234567", CHANEL, "10:00 AM", DUBAI)
}

pub fn record_with_email(email: &str) -> BookingRecord {
    valid_record().with_email(email)
}

pub fn record_at(time: &str) -> BookingRecord {
    valid_record().with_booking_time(time)
}

/// Temp dir plus a not-yet-created file path inside it.
pub fn temp_file(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    (dir, path)
}
