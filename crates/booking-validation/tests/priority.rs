//! Functional tests for the validation priority order.
//!
//! A valid record must pass; corrupting exactly one field must yield that
//! field's error; corrupting several must yield the highest-priority one.

use booking_model::BookingField;
use booking_test_utils::{test_catalog, valid_record, CHANEL, DIOR, DUBAI, MUSCAT};
use booking_validation::{FieldValidator, ValidationError};

/// Tenet: each field has its own error code.
#[test]
fn single_field_mutations_report_that_field() {
    let catalog = test_catalog();
    let validator = FieldValidator::new(&catalog);

    let cases = [
        (valid_record().with_email("alice.example.com"), ValidationError::InvalidEmail),
        (valid_record().with_phone("+971501234"), ValidationError::InvalidPhone),
        (valid_record().with_booking_time("10:00 am"), ValidationError::InvalidTime),
        (
            valid_record().with_shop_name("Corner Store"),
            ValidationError::EmptyField(BookingField::ShopName),
        ),
        (valid_record().with_location(MUSCAT), ValidationError::InvalidLocation),
    ];

    for (record, expected) in cases {
        assert_eq!(validator.validate_all_fields(&record), Err(expected), "{record:?}");
    }
}

/// Tenet: a shop missing from the catalog is reported like an empty shop field.
#[test]
fn unknown_shop_uses_empty_field_code() {
    let catalog = test_catalog();
    let validator = FieldValidator::new(&catalog);

    let err = validator
        .validate_all_fields(&valid_record().with_shop_name("Corner Store"))
        .unwrap_err();
    assert_eq!(err.code(), "empty_field");
    assert_eq!(err.field(), BookingField::ShopName);
    assert_eq!(err.to_string(), "All fields must be filled out.");
}

/// Tenet: earlier checks win when several fields are bad.
#[test]
fn precedence_is_email_phone_time_shop_location() {
    let catalog = test_catalog();
    let validator = FieldValidator::new(&catalog);

    let all_bad = valid_record()
        .with_email("x")
        .with_phone("1")
        .with_booking_time("25:00")
        .with_shop_name("Nope")
        .with_location("Nowhere");
    assert_eq!(validator.validate_all_fields(&all_bad), Err(ValidationError::InvalidEmail));

    let from_phone = all_bad.clone().with_email("ok@example.com");
    assert_eq!(validator.validate_all_fields(&from_phone), Err(ValidationError::InvalidPhone));

    let from_time = from_phone.with_phone("0501234567");
    assert_eq!(validator.validate_all_fields(&from_time), Err(ValidationError::InvalidTime));

    let from_shop = from_time.with_booking_time("10:00 AM");
    assert_eq!(
        validator.validate_all_fields(&from_shop),
        Err(ValidationError::EmptyField(BookingField::ShopName))
    );

    let from_location = from_shop.with_shop_name(CHANEL);
    assert_eq!(
        validator.validate_all_fields(&from_location),
        Err(ValidationError::InvalidLocation)
    );

    assert_eq!(validator.validate_all_fields(&from_location.with_location(DUBAI)), Ok(()));
}

/// Tenet: a location valid for another shop is still rejected.
#[test]
fn shop_location_pairing_is_per_shop() {
    let catalog = test_catalog();
    let validator = FieldValidator::new(&catalog);

    assert!(validator.validate_shop_location(CHANEL, DUBAI));
    assert!(!validator.validate_shop_location(CHANEL, MUSCAT));
    assert!(validator.validate_shop_location(DIOR, MUSCAT));

    let record = valid_record().with_shop_name(DIOR).with_location(MUSCAT);
    assert_eq!(validator.validate_all_fields(&record), Ok(()));
}

/// Tenet: blank values fail as empty, not as malformed.
#[test]
fn blank_fields_are_empty_field_errors() {
    let catalog = test_catalog();
    let validator = FieldValidator::new(&catalog);

    for field in [
        BookingField::Email,
        BookingField::Phone,
        BookingField::BookingTime,
        BookingField::ShopName,
        BookingField::Location,
    ] {
        let record = match field {
            BookingField::Email => valid_record().with_email(""),
            BookingField::Phone => valid_record().with_phone(""),
            BookingField::BookingTime => valid_record().with_booking_time(" "),
            BookingField::ShopName => valid_record().with_shop_name(""),
            _ => valid_record().with_location(""),
        };
        assert_eq!(
            validator.validate_all_fields(&record),
            Err(ValidationError::EmptyField(field))
        );
    }
}

/// Tenet: the builtin catalog keeps Chanel out of Muscat.
#[test]
fn builtin_catalog_pairing() {
    let catalog = booking_catalog::Catalog::builtin().unwrap();
    let validator = FieldValidator::new(&catalog);

    assert!(validator.validate_shop_location("Chanel Boutique", "Dubai, UAE"));
    assert!(!validator.validate_shop_location("Chanel Boutique", "Muscat, Oman"));
    assert!(!catalog.shops_at("Muscat, Oman").is_empty());
}
