//! Case record construction from normalized rows.

use std::collections::BTreeMap;

use covid_es_case_models::columns::{
    AGE_RANGE, CLASSIFICATION, COLUMN_COUNT, CONFIRMATION_CRITERION, DATE, EDUCATION_LEVEL,
    MUNICIPALITY, NEIGHBORHOOD, NOTIFICATION_STATUS, OUTCOME, RACE_COLOR, SEX, TRAVEL_DOMESTIC,
    TRAVEL_INTERNATIONAL, WAS_HOSPITALIZED,
};
use covid_es_case_models::{
    CaseRecord, Cell, Classification, Comorbidity, NormalizedRow, Outcome, Symptom,
};
use strum::IntoEnumIterator as _;

use crate::CaseError;
use crate::normalize::normalize_row;

/// Normalizes a raw row and maps it onto a [`CaseRecord`].
///
/// # Errors
///
/// Returns [`CaseError`] if the date doesn't parse or the row is too short.
pub fn from_raw_row<S: AsRef<str>>(row: &[S]) -> Result<CaseRecord, CaseError> {
    from_normalized_row(&normalize_row(row)?)
}

/// Maps the positions of a normalized row onto named case fields.
///
/// # Errors
///
/// Returns [`CaseError::MissingColumns`] if the row has fewer than
/// [`COLUMN_COUNT`] cells, or [`CaseError::InvalidDate`] if the date
/// column doesn't hold a date.
pub fn from_normalized_row(row: &NormalizedRow) -> Result<CaseRecord, CaseError> {
    if row.len() < COLUMN_COUNT {
        return Err(CaseError::MissingColumns {
            expected: COLUMN_COUNT,
            found: row.len(),
        });
    }

    let date = row
        .get(DATE)
        .and_then(Cell::as_date)
        .ok_or_else(|| CaseError::InvalidDate {
            value: row.get(DATE).map(ToString::to_string).unwrap_or_default(),
        })?;

    let symptoms: BTreeMap<Symptom, Option<bool>> = Symptom::iter()
        .map(|symptom| (symptom, flag(row, symptom.column())))
        .collect();

    let comorbidities: BTreeMap<Comorbidity, Option<bool>> = Comorbidity::iter()
        .map(|comorbidity| (comorbidity, flag(row, comorbidity.column())))
        .collect();

    Ok(CaseRecord {
        date,
        classification: Classification::from_raw(text(row, CLASSIFICATION).unwrap_or_default()),
        outcome: text(row, OUTCOME).map(Outcome::from_raw),
        confirmation_criterion: owned(row, CONFIRMATION_CRITERION),
        notification_status: owned(row, NOTIFICATION_STATUS),
        municipality: owned(row, MUNICIPALITY),
        neighborhood: owned(row, NEIGHBORHOOD),
        age_range: owned(row, AGE_RANGE),
        sex: owned(row, SEX),
        race_color: owned(row, RACE_COLOR),
        education_level: owned(row, EDUCATION_LEVEL),
        symptoms,
        comorbidities,
        was_hospitalized: flag(row, WAS_HOSPITALIZED),
        travel_domestic: flag(row, TRAVEL_DOMESTIC),
        travel_international: flag(row, TRAVEL_INTERNATIONAL),
    })
}

fn text(row: &NormalizedRow, column: usize) -> Option<&str> {
    row.get(column).and_then(Cell::as_text)
}

fn owned(row: &NormalizedRow, column: usize) -> Option<String> {
    text(row, column).map(str::to_string)
}

fn flag(row: &NormalizedRow, column: usize) -> Option<bool> {
    row.get(column).and_then(Cell::as_flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn full_row() -> Vec<String> {
        let mut row: Vec<String> = [
            "11/03/2020",
            "Confirmados",
            "Óbito pelo COVID-19",
            "Laboratorial",
            "Encerrado",
            "VILA VELHA",
            "Não encontrado",
            "60 a 69 anos",
            "M",
            "Parda",
            "Ignorado",
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        // fever, breathing difficulty, cough, runny nose, sore throat, diarrhea, headache
        row.extend(["Sim", "Sim", "Não", "-", "", "2", "1"].map(String::from));
        // lung, cardiac, kidney, diabetes, smoking, obesity
        row.extend(["Não", "Sim", "Não", "Sim", "Ignorado", "Não"].map(String::from));
        // hospitalized, domestic travel, international travel
        row.extend(["Sim", "Não", ""].map(String::from));
        row
    }

    #[test]
    fn builds_record_from_full_row() {
        let case = from_raw_row(&full_row()).unwrap();

        assert_eq!(case.date, NaiveDate::from_ymd_opt(2020, 3, 11).unwrap());
        assert!(case.is_confirmed());
        assert!(case.is_covid_death());
        assert_eq!(case.municipality.as_deref(), Some("VILA VELHA"));
        assert_eq!(case.neighborhood, None);
        assert_eq!(case.race_color.as_deref(), Some("Parda"));
        assert_eq!(case.education_level, None);

        assert_eq!(case.symptoms.len(), 7);
        assert_eq!(case.symptoms[&Symptom::Fever], Some(true));
        assert_eq!(case.symptoms[&Symptom::Cough], Some(false));
        assert_eq!(case.symptoms[&Symptom::RunnyNose], None);
        assert_eq!(case.symptoms[&Symptom::Diarrhea], None);
        assert_eq!(case.symptoms[&Symptom::Headache], Some(true));

        assert_eq!(case.comorbidities.len(), 6);
        assert_eq!(case.comorbidities[&Comorbidity::Cardiac], Some(true));
        assert_eq!(case.comorbidities[&Comorbidity::Smoking], None);

        assert_eq!(case.was_hospitalized, Some(true));
        assert_eq!(case.travel_domestic, Some(false));
        assert_eq!(case.travel_international, None);
    }

    #[test]
    fn rejects_short_row() {
        let mut row = full_row();
        row.truncate(20);
        assert_eq!(
            from_raw_row(&row),
            Err(CaseError::MissingColumns {
                expected: COLUMN_COUNT,
                found: 20
            })
        );
    }

    #[test]
    fn non_date_cell_reports_its_text() {
        let mut row = normalize_row(&full_row()).unwrap();
        row.0[DATE] = Cell::Text("março".to_string());
        assert_eq!(
            from_normalized_row(&row),
            Err(CaseError::InvalidDate {
                value: "março".to_string()
            })
        );
    }

    #[test]
    fn unknown_outcome_is_not_a_death() {
        let mut row = full_row();
        row[OUTCOME] = "Ignorado".to_string();
        let case = from_raw_row(&row).unwrap();
        assert_eq!(case.outcome, None);
        assert!(!case.is_covid_death());
    }

    #[test]
    fn empty_municipality_is_unknown() {
        let mut row = full_row();
        row[MUNICIPALITY] = String::new();
        assert_eq!(from_raw_row(&row).unwrap().municipality, None);
    }
}
