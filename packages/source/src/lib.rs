#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Line-list acquisition.
//!
//! A [`SourceDefinition`](source_def::SourceDefinition) describes where the
//! state publishes its CSV and how it is encoded. The bytes are read from a
//! local file or downloaded, decoded, and parsed into a [`RowSet`]: the
//! header plus every data row as plain strings. No normalization happens
//! here.

pub mod csv_rows;
pub mod download;
pub mod encoding;
pub mod registry;
pub mod source_def;

use covid_es_case_models::RawRow;
use covid_es_case_models::columns::COLUMN_COUNT;

/// Errors that can occur while acquiring line-list rows.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error (file read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A source definition could not be parsed.
    #[error("Invalid source definition: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file has no header row.
    #[error("CSV from {origin} contains no header row")]
    EmptyFile {
        /// Path or URL the bytes came from.
        origin: String,
    },
}

/// A decoded CSV: header and data rows, all as trimmed strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSet {
    /// Column names from the first line.
    pub header: Vec<String>,
    /// Every line after the header, in file order.
    pub rows: Vec<RawRow>,
}

impl RowSet {
    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the header has exactly the 27 columns of the line-list layout.
    #[must_use]
    pub fn has_expected_layout(&self) -> bool {
        self.header.len() == COLUMN_COUNT
    }
}
