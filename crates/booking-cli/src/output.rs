//! Plain-text rendering for terminal output

use std::fmt::Write;

use booking_catalog::Catalog;
use booking_model::{BookingField, BookingRecord};

/// Aligned table with the file header as column titles
pub(crate) fn table(records: &[BookingRecord]) -> String {
    if records.is_empty() {
        return "No bookings found.\n".to_string();
    }

    let widths: Vec<usize> = BookingField::ALL
        .iter()
        .map(|field| {
            records
                .iter()
                .map(|record| field.value_of(record).chars().count())
                .chain(std::iter::once(field.header().len()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let mut out = String::new();
    let header: Vec<&str> = BookingField::ALL.iter().map(|field| field.header()).collect();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_row(
        &mut out,
        &rule.iter().map(String::as_str).collect::<Vec<_>>(),
        &widths,
    );
    for record in records {
        let cells: Vec<&str> = BookingField::ALL
            .iter()
            .map(|field| field.value_of(record))
            .collect();
        push_row(&mut out, &cells, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Shops with their locations and slots, optionally narrowed to one location
pub(crate) fn catalog(catalog: &Catalog, location: Option<&str>) -> String {
    let names: Vec<&str> = match location {
        Some(location) => catalog.shops_at(location),
        None => catalog.shop_names().collect(),
    };
    if names.is_empty() {
        return "No shops found.\n".to_string();
    }

    let mut out = String::new();
    for name in names {
        let _ = writeln!(out, "{name}");
        let _ = writeln!(out, "  Locations: {}", catalog.locations_for(name).join("; "));
        let _ = writeln!(out, "  Times:     {}", catalog.time_slots_for(name).join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_catalog::ShopEntry;

    #[test]
    fn empty_listing() {
        assert_eq!(table(&[]), "No bookings found.\n");
    }

    #[test]
    fn table_aligns_columns() {
        let records = [BookingRecord::new(
            "alice",
            "a@x.com",
            "0501234567",
            "Chanel Boutique",
            "10:00 AM",
            "Dubai, UAE",
        )];
        let text = table(&records);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("User Name  Email    Phone"));
        assert!(lines[2].starts_with("alice      a@x.com  0501234567"));
        assert!(lines[2].ends_with("Dubai, UAE"));
    }

    #[test]
    fn catalog_filters_by_location() {
        let shops = Catalog::from_shops([
            ("A", ShopEntry::new(["X"], ["10:00 AM"])),
            ("B", ShopEntry::new(["Y"], ["11:00 AM"])),
        ])
        .unwrap();
        let text = catalog(&shops, Some("Y"));
        assert!(text.starts_with("B\n"));
        assert!(!text.contains("A\n"));
        assert_eq!(catalog(&shops, Some("Z")), "No shops found.\n");
    }
}
