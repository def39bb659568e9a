//! Functional tests for account registration and sign-in.

use std::fs;
use std::sync::Arc;
use std::thread;

use booking_auth::{AccountStore, AuthError, PasswordDigest};
use booking_test_utils::temp_file;

fn store() -> (tempfile::TempDir, AccountStore) {
    let (dir, path) = temp_file("users.csv");
    (dir, AccountStore::new(path))
}

/// Tenet: a reused username is rejected before any row is written.
#[test]
fn duplicate_username_is_rejected_without_append() {
    let (_dir, store) = store();
    store.register("alice", "a@x.com", "pw1").unwrap();
    let before = fs::read_to_string(store.path()).unwrap();

    let err = store.register("alice", "b@x.com", "pw2").unwrap_err();
    assert!(matches!(err, AuthError::Duplicate { field: "username" }));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    assert_eq!(store.accounts().unwrap().len(), 1);
}

/// Tenet: a reused email is rejected too.
#[test]
fn duplicate_email_is_rejected() {
    let (_dir, store) = store();
    store.register("alice", "a@x.com", "pw1").unwrap();

    let err = store.register("bob", "a@x.com", "pw2").unwrap_err();
    assert!(matches!(err, AuthError::Duplicate { field: "email" }));
    assert_eq!(err.user_message(), "Username or email already registered!");
}

/// Tenet: names differing only by surrounding whitespace are the same name.
#[test]
fn whitespace_padded_duplicate_is_rejected() {
    let (_dir, store) = store();
    let account = store.register("alice ", " a@x.com", " pw1 ").unwrap();
    assert_eq!(account.username, "alice");
    assert_eq!(account.email, "a@x.com");

    let err = store.register("alice", "b@x.com", "pw2").unwrap_err();
    assert!(matches!(err, AuthError::Duplicate { field: "username" }));
    let err = store.register("bob", "a@x.com ", "pw2").unwrap_err();
    assert!(matches!(err, AuthError::Duplicate { field: "email" }));

    let usernames: Vec<_> = store
        .accounts()
        .unwrap()
        .into_iter()
        .map(|account| account.username)
        .collect();
    assert_eq!(usernames, ["alice"]);
}

/// Tenet: sign-in trims its inputs the same way registration does.
#[test]
fn sign_in_trims_inputs() {
    let (_dir, store) = store();
    store.register("alice", "a@x.com", "pw1").unwrap();

    assert_eq!(store.sign_in(" alice", "pw1 ").unwrap().username, "alice");
    assert!(store.authenticate("a@x.com\t", "pw1"));
    assert!(matches!(
        store.sign_in("alice", "   "),
        Err(AuthError::MissingField { field: "password" })
    ));
}

/// Tenet: only the digest reaches disk.
#[test]
fn password_is_stored_as_digest() {
    let (_dir, store) = store();
    store.register("alice", "a@x.com", "s3cret").unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert!(text.starts_with("Username,Email,Password\n"));
    assert!(!text.contains("s3cret"));
    assert!(text.contains(PasswordDigest::of("s3cret").as_str()));
}

/// Tenet: sign-in works by username or email with the right password only.
#[test]
fn authenticate_by_username_or_email() {
    let (_dir, store) = store();
    store.register("alice", "a@x.com", "pw1").unwrap();

    assert!(store.authenticate("alice", "pw1"));
    assert!(store.authenticate("a@x.com", "pw1"));
    assert!(!store.authenticate("alice", "pw2"));
    assert!(!store.authenticate("bob", "pw1"));

    let account = store.sign_in("a@x.com", "pw1").unwrap();
    assert_eq!(account.username, "alice");
}

/// Tenet: signing in before anyone registered is a credential failure, not a crash.
#[test]
fn sign_in_without_account_file() {
    let (_dir, store) = store();
    assert!(matches!(
        store.sign_in("alice", "pw"),
        Err(AuthError::InvalidCredentials)
    ));
    assert!(!store.authenticate("alice", "pw"));
}

/// Tenet: blank inputs are refused.
#[test]
fn blank_fields_are_refused() {
    let (_dir, store) = store();
    assert!(matches!(
        store.register("alice", " ", "pw"),
        Err(AuthError::MissingField { field: "email" })
    ));
    assert!(matches!(
        store.sign_in("", "pw"),
        Err(AuthError::MissingField { .. })
    ));
    assert!(!store.path().exists());
}

/// Tenet: concurrent registrations of the same name produce one account.
#[test]
fn concurrent_registration_admits_one() {
    let (_dir, store) = store();
    let store = Arc::new(store);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.register("alice", &format!("a{i}@x.com"), "pw").is_ok())
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(store.accounts().unwrap().len(), 1);
    assert!(store.is_registered("alice", "nobody@x.com").unwrap());
}
