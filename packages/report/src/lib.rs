#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation of line-list rows into a [`Report`].
//!
//! [`aggregate`] is a pure function from rows and a [`Registry`] to a fresh
//! report. [`Repopulate`] layers the in-place re-aggregation used by the
//! reader on top of it. [`filter`] holds the date filters and [`lookup`]
//! the municipality search.

pub mod aggregate;
pub mod filter;
pub mod lookup;

pub use aggregate::{Repopulate, aggregate};
pub use covid_es_registry::Registry;
pub use covid_es_report_models::{Counters, Municipality, Report};

use covid_es_case::CaseError;

/// Errors that can occur while building or querying a report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    /// A row could not be normalized into a case record.
    #[error("Row {row}: {source}")]
    Parse {
        /// One-based data row number (header excluded).
        row: usize,
        /// What was wrong with the row.
        source: CaseError,
    },

    /// A user-supplied date could not be parsed.
    #[error(transparent)]
    InvalidDate(#[from] CaseError),

    /// The requested municipality is not in the report.
    #[error(
        "Municipality '{name}' was not found in the report. It may be misspelled or may not have registered any COVID-19 cases."
    )]
    MunicipalityNotFound {
        /// The name exactly as requested.
        name: String,
    },

    /// A filter was requested before any rows were loaded.
    #[error("Cannot filter an empty report; load rows first")]
    NotLoaded,
}
