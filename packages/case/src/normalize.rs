//! Field normalizer.
//!
//! Turns a raw row into a [`NormalizedRow`] of the same shape:
//!
//! 1. Column 0 is parsed as a `DD/MM/YYYY` date (fails the row otherwise).
//! 2. Text columns have their per-column sentinel placeholders replaced by
//!    [`Cell::Unknown`]. Empty text is always unknown.
//! 3. Every column from [`FIRST_FLAG_COLUMN`] onward is mapped through the
//!    yes/no vocabulary. Unrecognized values become unknown rather than
//!    failing the row.

use covid_es_case_models::columns::{
    CONFIRMATION_CRITERION, DATE, EDUCATION_LEVEL, FIRST_FLAG_COLUMN, MUNICIPALITY,
    NEIGHBORHOOD, OUTCOME, RACE_COLOR,
};
use covid_es_case_models::{Cell, NormalizedRow};

use crate::CaseError;
use crate::dates::parse_row_date;

/// Placeholder literals that mean "unknown", per text column.
///
/// Columns absent from this table only treat empty text as unknown.
pub const TEXT_SENTINELS: &[(usize, &[&str])] = &[
    (OUTCOME, &["Ignorado", "-"]),
    (CONFIRMATION_CRITERION, &["-"]),
    (MUNICIPALITY, &["-"]),
    (NEIGHBORHOOD, &["Não encontrado", "NULL"]),
    (RACE_COLOR, &["Ignorado"]),
    (EDUCATION_LEVEL, &["Ignorado"]),
];

/// Yes/no vocabulary for the flag columns. Values absent from the table
/// map to unknown.
pub const FLAG_VOCABULARY: &[(&str, Option<bool>)] = &[
    ("Sim", Some(true)),
    ("Não", Some(false)),
    ("1", Some(true)),
    ("2", None),
    ("-", None),
    ("Ignorado", None),
    ("", None),
];

/// Returns the sentinel set configured for `column`.
#[must_use]
pub fn sentinels_for(column: usize) -> &'static [&'static str] {
    TEXT_SENTINELS
        .iter()
        .find(|(c, _)| *c == column)
        .map(|&(_, values)| values)
        .unwrap_or_default()
}

/// Normalizes a text cell against a sentinel set.
#[must_use]
pub fn normalize_text(raw: &str, sentinels: &[&str]) -> Cell {
    if raw.is_empty() || sentinels.contains(&raw) {
        Cell::Unknown
    } else {
        Cell::Text(raw.to_string())
    }
}

/// Maps a raw flag value through [`FLAG_VOCABULARY`].
#[must_use]
pub fn normalize_flag(raw: &str) -> Cell {
    FLAG_VOCABULARY
        .iter()
        .find(|(literal, _)| *literal == raw)
        .and_then(|(_, value)| *value)
        .map_or(Cell::Unknown, Cell::Flag)
}

/// Normalizes one raw row.
///
/// The result has exactly as many cells as the input. Short rows are not
/// rejected here; record construction checks the length.
///
/// # Errors
///
/// Returns [`CaseError::InvalidDate`] if the date column doesn't parse, or
/// [`CaseError::MissingColumns`] if the row is empty.
pub fn normalize_row<S: AsRef<str>>(row: &[S]) -> Result<NormalizedRow, CaseError> {
    if row.is_empty() {
        return Err(CaseError::MissingColumns {
            expected: DATE + 1,
            found: 0,
        });
    }

    let cells = row
        .iter()
        .enumerate()
        .map(|(column, raw)| -> Result<Cell, CaseError> {
            let raw = raw.as_ref();
            Ok(match column {
                DATE => Cell::Date(parse_row_date(raw)?),
                c if c >= FIRST_FLAG_COLUMN => normalize_flag(raw),
                c => normalize_text(raw, sentinels_for(c)),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NormalizedRow(cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn flag_vocabulary() {
        assert_eq!(normalize_flag("Sim"), Cell::Flag(true));
        assert_eq!(normalize_flag("Não"), Cell::Flag(false));
        assert_eq!(normalize_flag(""), Cell::Unknown);
        assert_eq!(normalize_flag("-"), Cell::Unknown);
        assert_eq!(normalize_flag("1"), Cell::Flag(true));
        assert_eq!(normalize_flag("2"), Cell::Unknown);
        assert_eq!(normalize_flag("3"), Cell::Unknown);
        assert_eq!(normalize_flag("Talvez"), Cell::Unknown);
        assert_eq!(normalize_flag("sim"), Cell::Unknown);
    }

    #[test]
    fn strips_configured_sentinels_exactly() {
        let sentinels = sentinels_for(OUTCOME);
        assert_eq!(normalize_text("Ignorado", sentinels), Cell::Unknown);
        assert_eq!(normalize_text("-", sentinels), Cell::Unknown);
        assert_eq!(
            normalize_text("Cura", sentinels),
            Cell::Text("Cura".to_string())
        );
        assert_eq!(
            normalize_text("Ignorado pelo sistema", sentinels),
            Cell::Text("Ignorado pelo sistema".to_string())
        );
    }

    #[test]
    fn neighborhood_sentinels() {
        let sentinels = sentinels_for(NEIGHBORHOOD);
        assert_eq!(normalize_text("Não encontrado", sentinels), Cell::Unknown);
        assert_eq!(normalize_text("NULL", sentinels), Cell::Unknown);
        assert_eq!(
            normalize_text("-", sentinels),
            Cell::Text("-".to_string()),
            "'-' is only a sentinel for the columns that declare it"
        );
    }

    #[test]
    fn empty_text_is_unknown_everywhere() {
        assert_eq!(normalize_text("", &[]), Cell::Unknown);
    }

    #[test]
    fn normalizes_row_in_place() {
        let row = [
            "11/03/2020",
            "Confirmados",
            "Ignorado",
            "Laboratorial",
            "Encerrado",
            "VITORIA",
            "NULL",
            "20 a 29 anos",
            "F",
            "Ignorado",
            "Ignorado",
            "Sim",
            "Não",
            "-",
        ];
        let normalized = normalize_row(&row).unwrap();

        assert_eq!(normalized.len(), row.len());
        assert_eq!(
            normalized.get(DATE),
            Some(&Cell::Date(NaiveDate::from_ymd_opt(2020, 3, 11).unwrap()))
        );
        assert_eq!(normalized.get(OUTCOME), Some(&Cell::Unknown));
        assert_eq!(normalized.get(NEIGHBORHOOD), Some(&Cell::Unknown));
        assert_eq!(normalized.get(RACE_COLOR), Some(&Cell::Unknown));
        assert_eq!(
            normalized.get(MUNICIPALITY),
            Some(&Cell::Text("VITORIA".to_string()))
        );
        assert_eq!(normalized.get(11), Some(&Cell::Flag(true)));
        assert_eq!(normalized.get(12), Some(&Cell::Flag(false)));
        assert_eq!(normalized.get(13), Some(&Cell::Unknown));
    }

    #[test]
    fn rejects_bad_date() {
        let err = normalize_row(&["2020-03-11", "Confirmados"]).unwrap_err();
        assert_eq!(
            err,
            CaseError::InvalidDate {
                value: "2020-03-11".to_string()
            }
        );
    }

    #[test]
    fn rejects_empty_row() {
        let row: [&str; 0] = [];
        assert!(matches!(
            normalize_row(&row),
            Err(CaseError::MissingColumns { found: 0, .. })
        ));
    }
}
