//! Date-range filters over raw rows.
//!
//! Filters select rows by their date column and return the subset; the
//! caller re-aggregates it. Row dates are read with the lenient
//! [`parse_target_date`] so that any accepted separator works.

use chrono::NaiveDate;
use covid_es_case::CaseError;
use covid_es_case::dates::parse_target_date;
use covid_es_case_models::columns::{CLASSIFICATION, DATE};
use covid_es_case_models::{Classification, RawRow};

use crate::ReportError;

/// Keeps confirmed rows dated on or before `target`.
///
/// # Errors
///
/// Returns [`ReportError::Parse`] if any row's date is missing or
/// unparseable.
pub fn up_to(rows: &[RawRow], target: NaiveDate) -> Result<Vec<RawRow>, ReportError> {
    select(rows, |row, date| date <= target && is_confirmed(row))
}

/// Keeps rows dated exactly on `target`.
///
/// # Errors
///
/// Returns [`ReportError::Parse`] if any row's date is missing or
/// unparseable.
pub fn on(rows: &[RawRow], target: NaiveDate) -> Result<Vec<RawRow>, ReportError> {
    select(rows, |_, date| date == target)
}

fn is_confirmed(row: &RawRow) -> bool {
    row.get(CLASSIFICATION)
        .is_some_and(|raw| Classification::from_raw(raw).is_confirmed())
}

fn select(
    rows: &[RawRow],
    keep: impl Fn(&RawRow, NaiveDate) -> bool,
) -> Result<Vec<RawRow>, ReportError> {
    let mut selected = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let date = row_date(row).map_err(|source| ReportError::Parse {
            row: index + 1,
            source,
        })?;
        if keep(row, date) {
            selected.push(row.clone());
        }
    }

    log::debug!("Date filter kept {}/{} rows", selected.len(), rows.len());

    Ok(selected)
}

fn row_date(row: &RawRow) -> Result<NaiveDate, CaseError> {
    let raw = row.get(DATE).ok_or(CaseError::MissingColumns {
        expected: DATE + 1,
        found: 0,
    })?;
    parse_target_date(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, classification: &str) -> RawRow {
        vec![date.to_string(), classification.to_string()]
    }

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 3, day).unwrap()
    }

    fn dates(rows: &[RawRow]) -> Vec<&str> {
        rows.iter().map(|r| r[DATE].as_str()).collect()
    }

    fn three_days() -> Vec<RawRow> {
        vec![
            row("10/03/2020", "Confirmados"),
            row("11/03/2020", "Confirmados"),
            row("12/03/2020", "Confirmados"),
        ]
    }

    #[test]
    fn up_to_includes_target_day() {
        let kept = up_to(&three_days(), march(11)).unwrap();
        assert_eq!(dates(&kept), ["10/03/2020", "11/03/2020"]);
    }

    #[test]
    fn on_keeps_only_target_day() {
        let kept = on(&three_days(), march(11)).unwrap();
        assert_eq!(dates(&kept), ["11/03/2020"]);
    }

    #[test]
    fn up_to_drops_non_confirmed_rows() {
        let rows = vec![
            row("10/03/2020", "Descartados"),
            row("10/03/2020", "Confirmados"),
        ];
        assert_eq!(up_to(&rows, march(11)).unwrap().len(), 1);
    }

    #[test]
    fn on_keeps_every_classification() {
        let rows = vec![
            row("11/03/2020", "Descartados"),
            row("11/03/2020", "Confirmados"),
        ];
        assert_eq!(on(&rows, march(11)).unwrap().len(), 2);
    }

    #[test]
    fn accepts_alternative_row_separators() {
        let rows = vec![row("11-03-2020", "Confirmados"), row("11.03.2020", "Confirmados")];
        assert_eq!(on(&rows, march(11)).unwrap().len(), 2);
    }

    #[test]
    fn bad_row_date_fails() {
        let rows = vec![row("11/03/2020", "Confirmados"), row("amanhã", "Confirmados")];
        assert!(matches!(
            up_to(&rows, march(11)),
            Err(ReportError::Parse { row: 2, .. })
        ));
    }

    #[test]
    fn empty_row_fails() {
        let rows = vec![Vec::new()];
        assert!(matches!(
            on(&rows, march(11)),
            Err(ReportError::Parse {
                row: 1,
                source: CaseError::MissingColumns { .. }
            })
        ));
    }
}
