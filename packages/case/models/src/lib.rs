#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canonical case record types for the Espírito Santo COVID-19 line-list.
//!
//! The state publishes one row per notified case with a fixed 27-column
//! layout. Rows are normalized into a [`NormalizedRow`] of typed [`Cell`]s
//! and then mapped onto a [`CaseRecord`], which is what the aggregation
//! layer consumes.

pub mod columns;

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// One decoded data row, one string per column position.
pub type RawRow = Vec<String>;

/// A single normalized cell.
///
/// Sentinel placeholders (`"Ignorado"`, `"-"`, `"NULL"`, empty, ...) never
/// survive normalization: they become [`Cell::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// A parsed calendar date.
    Date(NaiveDate),
    /// Free or enumerated text that is not a placeholder.
    Text(String),
    /// A yes/no flag.
    Flag(bool),
    /// An explicitly unknown value.
    Unknown,
}

impl Cell {
    /// Returns the text content, or `None` for anything that isn't text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the flag value, or `None` for anything that isn't a flag.
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the date value, or `None` for anything that isn't a date.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%d/%m/%Y")),
            Self::Text(text) => f.write_str(text),
            Self::Flag(true) => f.write_str("Sim"),
            Self::Flag(false) => f.write_str("Não"),
            Self::Unknown => Ok(()),
        }
    }
}

/// A row after field normalization. Same shape (length and column order)
/// as the [`RawRow`] it was produced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRow(pub Vec<Cell>);

impl NormalizedRow {
    /// Number of cells in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the cell at `column`, if the row is long enough.
    #[must_use]
    pub fn get(&self, column: usize) -> Option<&Cell> {
        self.0.get(column)
    }
}

/// Case classification as reported by the state panel.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// `"Confirmados"`: the only classification that is aggregated.
    Confirmed,
    /// `"Descartados"`
    Discarded,
    /// `"Suspeito"`
    Suspected,
    /// Any other literal, kept verbatim.
    Other(String),
}

impl Classification {
    /// Maps a raw classification literal onto the enum.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "Confirmados" => Self::Confirmed,
            "Descartados" => Self::Discarded,
            "Suspeito" => Self::Suspected,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the literal used in the source file.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Confirmed => "Confirmados",
            Self::Discarded => "Descartados",
            Self::Suspected => "Suspeito",
            Self::Other(s) => s,
        }
    }

    /// Whether this is a confirmed case.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patient outcome ("evolução").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// `"Óbito pelo COVID-19"`: counted as a death in every tally.
    DeathByCovid,
    /// `"Óbito por outras causas"`
    DeathOtherCauses,
    /// `"Cura"`
    Cured,
    /// Any other literal, kept verbatim.
    Other(String),
}

impl Outcome {
    /// Maps a raw outcome literal onto the enum.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "Óbito pelo COVID-19" => Self::DeathByCovid,
            "Óbito por outras causas" => Self::DeathOtherCauses,
            "Cura" => Self::Cured,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the literal used in the source file.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::DeathByCovid => "Óbito pelo COVID-19",
            Self::DeathOtherCauses => "Óbito por outras causas",
            Self::Cured => "Cura",
            Self::Other(s) => s,
        }
    }

    /// Whether this outcome is a death attributed to COVID-19.
    #[must_use]
    pub const fn is_covid_death(&self) -> bool {
        matches!(self, Self::DeathByCovid)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symptom flags recorded per case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Symptom {
    /// Febre
    Fever,
    /// Dificuldade respiratória
    BreathingDifficulty,
    /// Tosse
    Cough,
    /// Coriza
    RunnyNose,
    /// Dor de garganta
    SoreThroat,
    /// Diarreia
    Diarrhea,
    /// Cefaleia
    Headache,
}

impl Symptom {
    /// Column position of this symptom's flag in the line-list.
    #[must_use]
    pub const fn column(self) -> usize {
        match self {
            Self::Fever => 11,
            Self::BreathingDifficulty => 12,
            Self::Cough => 13,
            Self::RunnyNose => 14,
            Self::SoreThroat => 15,
            Self::Diarrhea => 16,
            Self::Headache => 17,
        }
    }
}

/// Comorbidity flags recorded per case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Comorbidity {
    /// Pulmonary disease
    Lung,
    /// Cardiovascular disease
    Cardiac,
    /// Kidney disease
    Kidney,
    /// Diabetes
    Diabetes,
    /// Smoking
    Smoking,
    /// Obesity
    Obesity,
}

impl Comorbidity {
    /// Column position of this comorbidity's flag in the line-list.
    #[must_use]
    pub const fn column(self) -> usize {
        match self {
            Self::Lung => 18,
            Self::Cardiac => 19,
            Self::Kidney => 20,
            Self::Diabetes => 21,
            Self::Smoking => 22,
            Self::Obesity => 23,
        }
    }
}

/// One normalized line-list observation.
///
/// Every `Option` field uses `None` for "unknown"; sentinel text from the
/// source never reaches this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    /// Notification date.
    pub date: NaiveDate,
    /// Case classification.
    pub classification: Classification,
    /// Patient outcome.
    pub outcome: Option<Outcome>,
    /// Criterion used to confirm the case (laboratory, clinical, ...).
    pub confirmation_criterion: Option<String>,
    /// Notification status (open, closed, ...).
    pub notification_status: Option<String>,
    /// Municipality of residence, as written in the source.
    pub municipality: Option<String>,
    /// Neighborhood of residence.
    pub neighborhood: Option<String>,
    /// Age bracket label.
    pub age_range: Option<String>,
    /// Sex.
    pub sex: Option<String>,
    /// Race/color.
    pub race_color: Option<String>,
    /// Education level.
    pub education_level: Option<String>,
    /// Symptom flags, one entry per [`Symptom`].
    pub symptoms: BTreeMap<Symptom, Option<bool>>,
    /// Comorbidity flags, one entry per [`Comorbidity`].
    pub comorbidities: BTreeMap<Comorbidity, Option<bool>>,
    /// Whether the patient was hospitalized.
    pub was_hospitalized: Option<bool>,
    /// Whether the patient travelled within Brazil.
    pub travel_domestic: Option<bool>,
    /// Whether the patient travelled abroad.
    pub travel_international: Option<bool>,
}

impl CaseRecord {
    /// Builds a synthetic confirmed case with every optional field unknown.
    ///
    /// Bypasses row normalization entirely; callers can set further fields
    /// directly on the returned value.
    #[must_use]
    pub const fn confirmed(date: NaiveDate, municipality: Option<String>) -> Self {
        Self {
            date,
            classification: Classification::Confirmed,
            outcome: None,
            confirmation_criterion: None,
            notification_status: None,
            municipality,
            neighborhood: None,
            age_range: None,
            sex: None,
            race_color: None,
            education_level: None,
            symptoms: BTreeMap::new(),
            comorbidities: BTreeMap::new(),
            was_hospitalized: None,
            travel_domestic: None,
            travel_international: None,
        }
    }

    /// Whether the record counts towards confirmed totals.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        self.classification.is_confirmed()
    }

    /// Whether the record is a death attributed to COVID-19.
    #[must_use]
    pub fn is_covid_death(&self) -> bool {
        self.outcome.as_ref().is_some_and(Outcome::is_covid_death)
    }
}

impl fmt::Display for CaseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Caso de {} - {} em {}",
            self.date.format("%d/%m/%Y"),
            self.classification,
            self.municipality.as_deref().unwrap_or("-")
        )
    }
}
