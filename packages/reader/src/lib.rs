#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Report reader: loads a line-list, keeps the full row set, and rebuilds
//! the [`Report`] whenever a date filter is applied.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use covid_es_case_models::RawRow;
use covid_es_report::filter;
use covid_es_report::lookup::find_municipality;
use covid_es_report::{Registry, Repopulate, ReportError, aggregate};
use covid_es_report_models::{Municipality, Report};
use covid_es_source::registry::default_source;
use covid_es_source::source_def::SourceDefinition;
use covid_es_source::{RowSet, SourceError, download};

pub use covid_es_case::dates::parse_target_date;

/// Errors that can occur in the reader.
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// Rows could not be acquired.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Rows could not be aggregated or queried.
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Loaded line-list plus the report currently built from it.
#[derive(Debug)]
pub struct ReportReader {
    registry: Registry,
    source: Option<String>,
    header: Vec<String>,
    rows: Option<Arc<[RawRow]>>,
    report: Report,
}

impl ReportReader {
    /// Creates a reader with no data loaded.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        let report = Report::empty("", registry.names());
        Self {
            registry,
            source: None,
            header: Vec::new(),
            rows: None,
            report,
        }
    }

    /// Creates a reader from a local CSV laid out like the default source.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError`] if the file can't be read or any row fails
    /// to aggregate.
    pub fn from_path(path: &Path, registry: Registry) -> Result<Self, ReaderError> {
        let mut reader = Self::new(registry);
        reader.load_file(path, &default_source())?;
        Ok(reader)
    }

    /// Loads a local CSV using `definition`'s encoding and delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError`] if the file can't be read or any row fails
    /// to aggregate.
    pub fn load_file(
        &mut self,
        path: &Path,
        definition: &SourceDefinition,
    ) -> Result<(), ReaderError> {
        let rows = download::read_file(path, definition)?;
        self.load_rows(path.display().to_string(), rows)?;
        Ok(())
    }

    /// Downloads the latest line-list for `definition` and aggregates it.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError`] if the download fails or any row fails to
    /// aggregate.
    pub async fn load_latest(&mut self, definition: &SourceDefinition) -> Result<(), ReaderError> {
        let (url, rows) = download::download(definition).await?;
        self.load_rows(url, rows)?;
        Ok(())
    }

    /// Aggregates an already-parsed row set and keeps it for later filters.
    ///
    /// The report and the reader share the rows. Nothing is replaced when
    /// aggregation fails.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Parse`] for the first malformed row.
    pub fn load_rows(
        &mut self,
        source: impl Into<String>,
        rows: RowSet,
    ) -> Result<&Report, ReportError> {
        let source = source.into();
        let RowSet { header, rows } = rows;
        let rows: Arc<[RawRow]> = rows.into();
        let report = aggregate(&source, Arc::clone(&rows), &self.registry)?;

        log::info!("{source}: {report}");

        self.source = Some(source);
        self.header = header;
        self.rows = Some(rows);
        self.report = report;
        Ok(&self.report)
    }

    /// Drops any date filter, re-aggregating the full rows in place.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NotLoaded`] before any load.
    pub fn clear_filter(&mut self) -> Result<&Report, ReportError> {
        let Some(rows) = &self.rows else {
            return Err(ReportError::NotLoaded);
        };

        let filtered = std::mem::replace(&mut self.report.rows, Arc::clone(rows));
        if let Err(e) = self.report.repopulate(&self.registry) {
            self.report.rows = filtered;
            return Err(e);
        }
        Ok(&self.report)
    }

    /// Rebuilds the report from confirmed rows dated on or before `date`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NotLoaded`] before any load,
    /// [`ReportError::InvalidDate`] if `date` can't be parsed, or
    /// [`ReportError::Parse`] if a row can't be.
    pub fn filter_up_to(&mut self, date: &str) -> Result<&Report, ReportError> {
        self.refilter(date, filter::up_to)
    }

    /// Rebuilds the report from rows dated exactly `date`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::filter_up_to`].
    pub fn filter_on(&mut self, date: &str) -> Result<&Report, ReportError> {
        self.refilter(date, filter::on)
    }

    fn refilter(
        &mut self,
        date: &str,
        select: fn(&[RawRow], NaiveDate) -> Result<Vec<RawRow>, ReportError>,
    ) -> Result<&Report, ReportError> {
        let (Some(source), Some(rows)) = (&self.source, &self.rows) else {
            return Err(ReportError::NotLoaded);
        };

        let target = parse_target_date(date)?;
        let selected = select(rows, target)?;

        log::debug!(
            "Filter {target}: kept {} of {} rows",
            selected.len(),
            rows.len()
        );

        self.report = aggregate(source, selected, &self.registry)?;
        Ok(&self.report)
    }

    /// Looks up a municipality in the current report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MunicipalityNotFound`] carrying `name` as given.
    pub fn municipality(&self, name: &str) -> Result<&Municipality, ReportError> {
        find_municipality(&self.report, name)
    }

    /// The report built by the last load or filter.
    #[must_use]
    pub const fn report(&self) -> &Report {
        &self.report
    }

    /// The full, unfiltered rows, if loaded.
    #[must_use]
    pub fn rows(&self) -> Option<&[RawRow]> {
        self.rows.as_deref()
    }

    /// Column names of the loaded file. Empty before any load.
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Where the loaded rows came from.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl Default for ReportReader {
    fn default() -> Self {
        Self::new(Registry::espirito_santo())
    }
}

impl fmt::Display for ReportReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "Leitor de relatórios carregado com {source}."),
            None => f.write_str("Leitor de relatórios sem dados para ler."),
        }
    }
}
