//! Column positions of the 27-column line-list layout.
//!
//! The order is fixed by the state panel's export and must match exactly.

/// Notification date (`DD/MM/YYYY`).
pub const DATE: usize = 0;
/// Case classification.
pub const CLASSIFICATION: usize = 1;
/// Patient outcome.
pub const OUTCOME: usize = 2;
/// Confirmation criterion.
pub const CONFIRMATION_CRITERION: usize = 3;
/// Notification status.
pub const NOTIFICATION_STATUS: usize = 4;
/// Municipality of residence.
pub const MUNICIPALITY: usize = 5;
/// Neighborhood of residence.
pub const NEIGHBORHOOD: usize = 6;
/// Age bracket.
pub const AGE_RANGE: usize = 7;
/// Sex.
pub const SEX: usize = 8;
/// Race/color.
pub const RACE_COLOR: usize = 9;
/// Education level.
pub const EDUCATION_LEVEL: usize = 10;
/// First of the yes/no flag columns (symptoms, comorbidities, hospitalization, travel).
pub const FIRST_FLAG_COLUMN: usize = 11;
/// Hospitalization flag.
pub const WAS_HOSPITALIZED: usize = 24;
/// Domestic travel flag.
pub const TRAVEL_DOMESTIC: usize = 25;
/// International travel flag.
pub const TRAVEL_INTERNATIONAL: usize = 26;
/// Number of columns a complete row carries.
pub const COLUMN_COUNT: usize = 27;
