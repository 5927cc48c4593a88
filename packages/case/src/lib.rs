#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Field normalization and case record construction.
//!
//! Raw line-list rows go through [`normalize::normalize_row`], which
//! replaces sentinel placeholders with [`Cell::Unknown`](covid_es_case_models::Cell)
//! and parses the date and flag columns, and then through
//! [`record::from_normalized_row`], which maps positions onto the named
//! fields of a [`CaseRecord`](covid_es_case_models::CaseRecord).

pub mod dates;
pub mod normalize;
pub mod record;

pub use record::from_raw_row;

/// Errors that can occur while turning a raw row into a case record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    /// A date cell did not match any accepted format.
    #[error("Invalid date: '{value}'")]
    InvalidDate {
        /// The offending text.
        value: String,
    },

    /// The row is shorter than the column layout requires.
    #[error("Row has {found} columns, expected at least {expected}")]
    MissingColumns {
        /// Columns required by the layout.
        expected: usize,
        /// Columns actually present.
        found: usize,
    },
}
