//! In-memory search and sort over booking records
//!
//! Both functions work on an already-read record list and keep the input's
//! relative order wherever the query does not impose one.

use std::cmp::Ordering;

use booking_model::{BookingField, BookingRecord};
use chrono::NaiveTime;

/// Records whose `field` contains `query`, ignoring case
///
/// An empty query matches every record.
#[must_use]
pub fn filter_records(
    records: Vec<BookingRecord>,
    query: &str,
    field: BookingField,
) -> Vec<BookingRecord> {
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| field.value_of(record).to_lowercase().contains(&needle))
        .collect()
}

/// Sort records by `field`, stable in both directions
///
/// Booking times are compared as clock times, so `9:00 AM` comes before
/// `10:00 AM` and `11:00 AM` before `01:00 PM`. Values that are not
/// clock times sort after all that are. Every other field compares as
/// plain text.
pub fn sort_records(records: &mut [BookingRecord], field: BookingField, descending: bool) {
    records.sort_by(|a, b| {
        let ordering = compare(field, field.value_of(a), field.value_of(b));
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

fn compare(field: BookingField, a: &str, b: &str) -> Ordering {
    match field {
        BookingField::BookingTime => SortKey::time(a).cmp(&SortKey::time(b)),
        _ => a.cmp(b),
    }
}

// Variant order matters: parsed clock times rank before raw text.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey<'a> {
    Clock(NaiveTime),
    Text(&'a str),
}

impl<'a> SortKey<'a> {
    fn time(value: &'a str) -> Self {
        parse_clock(value).map_or(SortKey::Text(value), SortKey::Clock)
    }
}

/// Parse `H:MM AM|PM` with or without a leading zero on the hour
#[must_use]
pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%I:%M %p").ok()
}
