//! Store errors

use std::path::PathBuf;

/// Message shown to users for any storage failure
pub const STORAGE_UNAVAILABLE: &str = "Error accessing the CSV file. Please try again later.";

/// Failure to read or write a CSV-backed store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error while {operation} at {path}: {source}")]
    Io {
        /// What the store was doing
        operation: &'static str,
        /// Store file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or decoding error outside a specific row
    #[error("CSV error while {operation} at {path}: {source}")]
    Csv {
        /// What the store was doing
        operation: &'static str,
        /// Store file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: csv::Error,
    },

    /// A data row could not be decoded
    #[error("failed to parse row {row} in {path}: {source}")]
    Row {
        /// Store file
        path: PathBuf,
        /// 1-based data row, header excluded
        row: usize,
        /// Underlying error
        #[source]
        source: csv::Error,
    },

    /// First row is not the expected header
    #[error("unexpected header in {path}: expected '{expected}', found '{found}'")]
    MalformedHeader {
        /// Store file
        path: PathBuf,
        /// Required header
        expected: String,
        /// Header actually present
        found: String,
    },

    /// Append attempted before `initialize` wrote the header
    #[error("store {path} has no header; initialize it before appending")]
    NotInitialized {
        /// Store file
        path: PathBuf,
    },
}

impl StoreError {
    /// Create an I/O error with operation and path context
    #[must_use]
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Create a CSV error with operation and path context
    #[must_use]
    pub fn csv(operation: &'static str, path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Create a row decoding error
    #[must_use]
    pub fn row(path: impl Into<PathBuf>, row: usize, source: csv::Error) -> Self {
        Self::Row {
            path: path.into(),
            row,
            source,
        }
    }

    /// Generic text for end users; details stay in logs
    #[inline]
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        STORAGE_UNAVAILABLE
    }

    /// Whether the file is missing, as opposed to unreadable or corrupt
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
