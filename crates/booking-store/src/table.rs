//! Headered CSV file
//!
//! [`CsvTable`] is the file-level plumbing shared by the booking store and
//! the account store: create-with-header, single-write row append, and a
//! full read that checks the header before decoding rows.
//!
//! Every call opens the file, does its work and closes it again. Nothing is
//! cached between calls.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// A comma-separated file with a fixed header row
#[derive(Debug, Clone)]
pub struct CsvTable {
    path: PathBuf,
    header: &'static [&'static str],
}

impl CsvTable {
    /// Describe a table at `path`; nothing is touched on disk
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, header: &'static [&'static str]) -> Self {
        Self {
            path: path.into(),
            header,
        }
    }

    /// Backing file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Expected header row
    #[inline]
    #[must_use]
    pub fn header(&self) -> &'static [&'static str] {
        self.header
    }

    /// Make sure the file exists and starts with the header
    ///
    /// Creates missing parent directories. Writes the header only when the
    /// file is zero-length, so repeated calls are no-ops.
    ///
    /// # Returns
    /// `true` if this call wrote the header.
    ///
    /// # Errors
    /// [`StoreError::Io`] if the directory or file cannot be created or
    /// written.
    pub fn initialize(&self) -> Result<bool, StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|source| StoreError::io("creating store directory", parent, source))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::io("opening store for initialize", &self.path, source))?;

        if file_len(&file, &self.path)? > 0 {
            return Ok(false);
        }

        let mut writer = row_writer();
        writer
            .write_record(self.header)
            .map_err(|source| StoreError::csv("encoding header", &self.path, source))?;
        let bytes = finish(writer, &self.path)?;

        file.write_all(&bytes)
            .map_err(|source| StoreError::io("writing header", &self.path, source))?;
        tracing::debug!("Initialized store {}", self.path.display());
        Ok(true)
    }

    /// Append one row
    ///
    /// The row is encoded in memory first and written with a single
    /// `write_all`, so a failed encode leaves the file untouched. A file
    /// whose last line lacks its newline (hand-edited) gets one before the
    /// row.
    ///
    /// # Errors
    /// [`StoreError::NotInitialized`] if the file is empty,
    /// [`StoreError::Io`] if it is missing or the write fails.
    pub fn append<T: Serialize>(&self, row: &T) -> Result<(), StoreError> {
        let mut writer = row_writer();
        writer
            .serialize(row)
            .map_err(|source| StoreError::csv("encoding row", &self.path, source))?;
        let encoded = finish(writer, &self.path)?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::io("opening store for append", &self.path, source))?;

        let len = file_len(&file, &self.path)?;
        if len == 0 {
            return Err(StoreError::NotInitialized {
                path: self.path.clone(),
            });
        }

        let mut bytes = Vec::with_capacity(encoded.len() + 1);
        if last_byte(&mut file, len, &self.path)? != b'\n' {
            bytes.push(b'\n');
        }
        bytes.extend_from_slice(&encoded);

        file.write_all(&bytes)
            .map_err(|source| StoreError::io("appending row", &self.path, source))
    }

    /// Decode every row after the header, in file order
    ///
    /// A zero-length file reads as no rows.
    ///
    /// # Errors
    /// [`StoreError::Io`] if the file is missing or unreadable,
    /// [`StoreError::MalformedHeader`] if the first row differs from the
    /// expected header, [`StoreError::Row`] for an undecodable row.
    pub fn read_all<T: DeserializeOwned>(&self) -> Result<Vec<T>, StoreError> {
        let file = File::open(&self.path)
            .map_err(|source| StoreError::io("opening store for read", &self.path, source))?;

        if file_len(&file, &self.path)? == 0 {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let found = reader
            .headers()
            .map_err(|source| StoreError::csv("reading header", &self.path, source))?;
        if found.iter().ne(self.header.iter().copied()) {
            return Err(StoreError::MalformedHeader {
                path: self.path.clone(),
                expected: self.header.join(","),
                found: found.iter().collect::<Vec<_>>().join(","),
            });
        }

        reader
            .deserialize()
            .enumerate()
            .map(|(index, row)| row.map_err(|source| StoreError::row(&self.path, index + 1, source)))
            .collect()
    }
}

fn row_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>, path: &Path) -> Result<Vec<u8>, StoreError> {
    writer
        .into_inner()
        .map_err(|err| StoreError::io("encoding row", path, std::io::Error::other(err.to_string())))
}

fn last_byte(file: &mut File, len: u64, path: &Path) -> Result<u8, StoreError> {
    let mut byte = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))
        .and_then(|_| file.read_exact(&mut byte))
        .map_err(|source| StoreError::io("reading store tail", path, source))?;
    Ok(byte[0])
}

fn file_len(file: &File, path: &Path) -> Result<u64, StoreError> {
    file.metadata()
        .map(|meta| meta.len())
        .map_err(|source| StoreError::io("reading store metadata", path, source))
}
