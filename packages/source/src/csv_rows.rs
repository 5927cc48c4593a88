//! CSV parsing into a [`RowSet`].
//!
//! The first line is the header; every later line becomes one row of
//! trimmed strings. Rows are kept even when their length differs from the
//! header so that the normalizer can report them.

use covid_es_case_models::RawRow;

use crate::{RowSet, SourceError};

/// Picks `;` or `,` by counting both in the header line.
#[must_use]
pub fn sniff_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or_default();
    let semicolons = header.matches(';').count();
    let commas = header.matches(',').count();
    if semicolons > commas { b';' } else { b',' }
}

/// Parses decoded CSV text.
///
/// `delimiter` overrides sniffing when given. `origin` is only used in log
/// and error messages.
///
/// # Errors
///
/// Returns [`SourceError::Csv`] on malformed quoting, or
/// [`SourceError::EmptyFile`] if there is no header row.
pub fn parse_rows(text: &str, delimiter: Option<u8>, origin: &str) -> Result<RowSet, SourceError> {
    let delimiter = delimiter.unwrap_or_else(|| sniff_delimiter(text));

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let header: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();

    if header.iter().all(String::is_empty) {
        return Err(SourceError::EmptyFile {
            origin: origin.to_owned(),
        });
    }

    let mut rows: Vec<RawRow> = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|cell| cell.trim().to_owned()).collect());
    }

    let row_set = RowSet { header, rows };

    if !row_set.has_expected_layout() {
        log::warn!(
            "{origin}: header has {} columns, the line-list layout expects 27",
            row_set.header.len()
        );
    }

    log::info!("Parsed {} rows from {origin}", row_set.len());

    Ok(row_set)
}
