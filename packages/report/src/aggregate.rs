//! Folds case records into per-municipality and statewide counters.
//!
//! Only confirmed cases are tallied. Every row is still normalized, so a
//! malformed row fails the whole pass even when it isn't a confirmed case.

use std::sync::Arc;

use covid_es_case::from_raw_row;
use covid_es_case_models::{CaseRecord, RawRow};
use covid_es_registry::Registry;
use covid_es_report_models::Report;

use crate::ReportError;

/// Aggregates `rows` (header excluded) into a fresh [`Report`].
///
/// Rows are processed in input order, so each municipality's case list
/// preserves that order.
///
/// # Errors
///
/// Returns [`ReportError::Parse`] for the first row that fails
/// normalization. No partial report is returned.
pub fn aggregate(
    source: &str,
    rows: impl Into<Arc<[RawRow]>>,
    registry: &Registry,
) -> Result<Report, ReportError> {
    let rows = rows.into();
    let mut report = Report::empty(source, registry.names());
    tally_rows(&mut report, &rows, registry)?;
    report.rows = rows;
    Ok(report)
}

/// In-place re-aggregation of a report from the rows it holds.
pub trait Repopulate {
    /// Clears every counter and bucket, then aggregates the held rows
    /// again. On error the report is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Parse`] for the first malformed row.
    fn repopulate(&mut self, registry: &Registry) -> Result<(), ReportError>;
}

impl Repopulate for Report {
    fn repopulate(&mut self, registry: &Registry) -> Result<(), ReportError> {
        let mut fresh = Report::empty(self.source.as_str(), registry.names());
        tally_rows(&mut fresh, &self.rows, registry)?;
        fresh.rows = std::mem::take(&mut self.rows);
        *self = fresh;
        Ok(())
    }
}

fn tally_rows(
    report: &mut Report,
    rows: &[RawRow],
    registry: &Registry,
) -> Result<(), ReportError> {
    for (index, row) in rows.iter().enumerate() {
        let case = from_raw_row(row).map_err(|source| ReportError::Parse {
            row: index + 1,
            source,
        })?;

        if case.is_confirmed() {
            tally(report, registry, case);
        }
    }

    log::debug!(
        "Aggregated {} rows from {}: {} confirmed, {} deaths, {} unclassified, {} municipalities infected",
        rows.len(),
        report.source,
        report.totals.confirmed,
        report.totals.deaths,
        report.unclassified.confirmed,
        report.newly_infected
    );

    Ok(())
}

fn tally(report: &mut Report, registry: &Registry, case: CaseRecord) {
    let is_death = case.is_covid_death();
    report.totals.record(is_death);

    let bucket = case
        .municipality
        .as_deref()
        .and_then(|raw| registry.classify(raw))
        .and_then(|name| report.municipalities.get_mut(name));

    if let Some(municipality) = bucket {
        if !municipality.is_infected() {
            report.newly_infected += 1;
        }
        municipality.counters.record(is_death);
        municipality.cases.push(case);
    } else {
        log::trace!(
            "Unclassified municipality {:?} on {}",
            case.municipality,
            case.date
        );
        report.unclassified.record(is_death);
    }
}
