//! End-to-end tests for the booking workflow service.

use std::fs;

use booking_auth::{AccountStore, UserAccount};
use booking_core::prelude::*;
use booking_core::{BOOKING_SUCCESS, CONFIRMATION_SENDER};
use booking_store::RecordStore;
use booking_test_utils::{test_catalog, CHANEL, DIOR, DUBAI, MUSCAT};
use booking_validation::ValidationError;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn service() -> (TempDir, BookingService) {
    let dir = tempfile::tempdir().unwrap();
    let service = BookingService::new(
        test_catalog(),
        RecordStore::new(dir.path().join("bookings.csv")),
        AccountStore::new(dir.path().join("users.csv")),
    )
    .unwrap();
    (dir, service)
}

fn alice(service: &BookingService) -> UserAccount {
    service.sign_up("alice", "alice@example.com", "pw1").unwrap()
}

fn chanel_at(time: &str) -> BookingRequest {
    BookingRequest::new("0501234567", CHANEL, time, DUBAI)
}

/// Tenet: opening a service leaves both files initialized with their headers.
#[test]
fn new_service_initializes_both_stores() {
    let (dir, _service) = service();
    assert_eq!(
        fs::read_to_string(dir.path().join("bookings.csv")).unwrap(),
        "User Name,Email,Phone,Shop Name,Booking Time,Location\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("users.csv")).unwrap(),
        "Username,Email,Password\n"
    );
}

/// Tenet: a valid submission is stored under the account and confirmed.
#[test]
fn submit_stores_and_confirms() {
    let (_dir, service) = service();
    let account = alice(&service);

    let confirmation = service.submit(&account, chanel_at("10:00 AM")).unwrap();
    assert_eq!(confirmation.from, CONFIRMATION_SENDER);
    assert_eq!(confirmation.to, "alice@example.com");
    assert_eq!(confirmation.subject, "Booking Confirmation for Chanel Boutique");
    assert!(BOOKING_SUCCESS.starts_with("Booking successful!"));

    let stored = service.all_bookings().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user_name, "alice");
    assert_eq!(stored[0].location, DUBAI);
}

/// Tenet: a rejected submission writes nothing.
#[test]
fn invalid_submission_is_not_stored() {
    let (_dir, service) = service();
    let account = alice(&service);

    let err = service
        .submit(&account, BookingRequest::new("123", CHANEL, "10:00 AM", DUBAI))
        .unwrap_err();
    assert!(matches!(err, BookingError::Validation(ValidationError::InvalidPhone)));
    assert!(err.is_user_error());

    let err = service
        .submit(&account, BookingRequest::new("0501234567", CHANEL, "10:00 AM", MUSCAT))
        .unwrap_err();
    assert_eq!(err.user_message(), "Please select a valid location.");

    assert!(service.all_bookings().unwrap().is_empty());
}

/// Tenet: a well-formed time the shop does not offer is refused after field checks.
#[test]
fn time_outside_shop_slots_is_refused() {
    let (_dir, service) = service();
    let account = alice(&service);

    let err = service.submit(&account, chanel_at("04:00 PM")).unwrap_err();
    assert!(matches!(err, BookingError::SlotUnavailable { .. }));
    assert_eq!(
        err.user_message(),
        "Please select a valid time slot for Chanel Boutique."
    );

    // Field errors still win over the slot check.
    let err = service
        .submit(&account, BookingRequest::new("bad", CHANEL, "04:00 PM", DUBAI))
        .unwrap_err();
    assert!(matches!(err, BookingError::Validation(ValidationError::InvalidPhone)));

    assert!(service.all_bookings().unwrap().is_empty());
}

/// Tenet: the full listing is ordered by time of day.
#[test]
fn all_bookings_are_chronological() {
    let (_dir, service) = service();
    let account = alice(&service);

    for time in ["02:00 PM", "09:00 AM", "11:00 AM"] {
        service.submit(&account, chanel_at(time)).unwrap();
    }

    let times: Vec<_> = service
        .all_bookings()
        .unwrap()
        .into_iter()
        .map(|record| record.booking_time)
        .collect();
    assert_eq!(times, ["09:00 AM", "11:00 AM", "02:00 PM"]);

    let descending: Vec<_> = service
        .sort(BookingField::BookingTime, true)
        .unwrap()
        .into_iter()
        .map(|record| record.booking_time)
        .collect();
    assert_eq!(descending, ["02:00 PM", "11:00 AM", "09:00 AM"]);
}

/// Tenet: a user's own bookings match their whole email, not a substring of it.
#[test]
fn bookings_for_matches_exact_email() {
    let (_dir, service) = service();
    let alice = alice(&service);
    let malice = service.sign_up("malice", "malice@example.com", "pw2").unwrap();

    service.submit(&alice, chanel_at("10:00 AM")).unwrap();
    service
        .submit(&malice, BookingRequest::new("0509876543", DIOR, "12:00 PM", MUSCAT))
        .unwrap();

    let mine = service.bookings_for(&alice).unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].shop_name, CHANEL);

    // Substring search sees both.
    assert_eq!(
        service.search("alice@", BookingField::Email).unwrap().len(),
        2
    );
}

/// Tenet: sign-in round-trips through the account store and rejects bad passwords.
#[test]
fn sign_in_after_sign_up() {
    let (_dir, service) = service();
    alice(&service);

    let account = service.sign_in("alice@example.com", "pw1").unwrap();
    assert_eq!(account.username, "alice");

    let err = service.sign_in("alice", "nope").unwrap_err();
    assert_eq!(err.user_message(), "Invalid username/email or password!");

    let err = service.sign_up("alice", "other@example.com", "pw").unwrap_err();
    assert_eq!(err.user_message(), "Username or email already registered!");
}

/// Tenet: a service opened from configuration uses the built-in catalog and the configured directory.
#[test]
fn open_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = BookingConfig::new().with_data_dir(dir.path().join("nested"));

    let service = BookingService::open(&config).unwrap();
    assert!(service.catalog().contains_shop("Rolex Boutique"));
    assert!(dir.path().join("nested").join("bookings.csv").exists());
    assert!(dir.path().join("nested").join("users.csv").exists());
}

/// Tenet: a broken catalog file stops start-up.
#[test]
fn open_with_bad_catalog_fails() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.toml");
    fs::write(&catalog, "[[shops]]\nname = \"\"\n").unwrap();

    let config = BookingConfig::new()
        .with_data_dir(dir.path())
        .with_catalog_file(&catalog);
    let err = BookingService::open(&config).unwrap_err();
    assert!(matches!(err, BookingError::Catalog(_)));
    assert!(!err.is_user_error());
}
