//! Municipality lookup by free-text name.

use covid_es_registry::normalize_name;
use covid_es_report_models::{Municipality, Report};

use crate::ReportError;

/// Finds the municipality bucket `name` refers to.
///
/// The input is normalized (uppercase, diacritics and punctuation stripped,
/// trimmed) before the lookup, so `"vitória"` finds `VITORIA`.
///
/// # Errors
///
/// Returns [`ReportError::MunicipalityNotFound`] carrying `name` verbatim
/// if no bucket matches.
pub fn find_municipality<'a>(
    report: &'a Report,
    name: &str,
) -> Result<&'a Municipality, ReportError> {
    report
        .municipalities
        .get(&normalize_name(name))
        .ok_or_else(|| ReportError::MunicipalityNotFound {
            name: name.to_string(),
        })
}
