//! Date parsing for row dates and user-supplied filter dates.

use chrono::NaiveDate;

use crate::CaseError;

/// The only format accepted in the line-list's date column.
pub const ROW_DATE_FORMAT: &str = "%d/%m/%Y";

/// Formats accepted for filter targets, tried in order.
pub const TARGET_DATE_FORMATS: &[&str] =
    &["%d/%m/%Y", "%d-%m-%Y", "%d_%m_%Y", "%d.%m.%Y", "%d%m%Y"];

/// Parses a line-list date cell (`DD/MM/YYYY` only, zero-padded).
///
/// # Errors
///
/// Returns [`CaseError::InvalidDate`] if the text doesn't match.
pub fn parse_row_date(s: &str) -> Result<NaiveDate, CaseError> {
    let trimmed = s.trim();
    let invalid = || CaseError::InvalidDate {
        value: s.to_string(),
    };

    // chrono accepts "1/3/2020" for `%d/%m/%Y`
    if !is_padded_row_date(trimmed) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, ROW_DATE_FORMAT).map_err(|_| invalid())
}

fn is_padded_row_date(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            2 | 5 => b == b'/',
            _ => b.is_ascii_digit(),
        })
}

/// Parses a day-month-year date in any of the [`TARGET_DATE_FORMATS`].
///
/// # Errors
///
/// Returns [`CaseError::InvalidDate`] if no format matches.
pub fn parse_target_date(s: &str) -> Result<NaiveDate, CaseError> {
    let trimmed = s.trim();
    TARGET_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| CaseError::InvalidDate {
            value: s.to_string(),
        })
}
