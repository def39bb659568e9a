//! Booking record store
//!
//! Append-only persistence for [`BookingRecord`]s. Every query re-reads the
//! whole file; there is no index and no cache.

use std::path::{Path, PathBuf};

use booking_model::{BookingField, BookingRecord, BOOKING_HEADER};

use crate::error::StoreError;
use crate::query::{filter_records, sort_records};
use crate::table::CsvTable;

/// Append-only booking file
///
/// States: *absent or empty* until [`RecordStore::initialize`] writes the
/// header, *initialized* afterwards. Rows are never rewritten or removed.
#[derive(Debug, Clone)]
pub struct RecordStore {
    table: CsvTable,
}

impl RecordStore {
    /// Store backed by the file at `path`
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            table: CsvTable::new(path, &BOOKING_HEADER),
        }
    }

    /// Backing file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        self.table.path()
    }

    /// Create the file with its header if it is absent or empty
    ///
    /// # Errors
    /// [`StoreError::Io`] if the file cannot be created or written.
    pub fn initialize(&self) -> Result<(), StoreError> {
        self.table.initialize().map(|_| ())
    }

    /// Append one booking as a single row
    ///
    /// # Errors
    /// [`StoreError`] if the store is not initialized or the write fails.
    pub fn append(&self, record: &BookingRecord) -> Result<(), StoreError> {
        self.table.append(record)?;
        tracing::debug!(
            shop = %record.shop_name,
            time = %record.booking_time,
            "Appended booking to {}",
            self.path().display()
        );
        Ok(())
    }

    /// Every booking, in file order
    ///
    /// # Errors
    /// [`StoreError`] if the file is missing, unreadable or has a foreign
    /// header.
    pub fn read_all(&self) -> Result<Vec<BookingRecord>, StoreError> {
        self.table.read_all()
    }

    /// Bookings whose `field` contains `query`, case-insensitively, in file order
    ///
    /// # Errors
    /// Same as [`RecordStore::read_all`]. No matches is `Ok(vec![])`.
    pub fn search(
        &self,
        query: &str,
        field: BookingField,
    ) -> Result<Vec<BookingRecord>, StoreError> {
        Ok(filter_records(self.read_all()?, query, field))
    }

    /// Every booking ordered by `field`
    ///
    /// See [`sort_records`] for how booking times compare.
    ///
    /// # Errors
    /// Same as [`RecordStore::read_all`].
    pub fn sort(
        &self,
        field: BookingField,
        descending: bool,
    ) -> Result<Vec<BookingRecord>, StoreError> {
        let mut records = self.read_all()?;
        sort_records(&mut records, field, descending);
        Ok(records)
    }
}
