#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation result types.
//!
//! A [`Report`] holds one [`Municipality`] bucket per registry entry plus
//! the statewide and unclassified [`Counters`]. The aggregation itself
//! lives in `covid_es_report`.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use covid_es_case_models::{CaseRecord, RawRow};
use serde::{Deserialize, Serialize};

/// Confirmed-case and death tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counters {
    /// Confirmed cases.
    pub confirmed: u64,
    /// Confirmed cases whose outcome is a COVID-19 death.
    pub deaths: u64,
}

impl Counters {
    /// Counts one confirmed case.
    pub const fn record(&mut self, is_death: bool) {
        self.confirmed += 1;
        if is_death {
            self.deaths += 1;
        }
    }
}

impl std::ops::Add for Counters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            confirmed: self.confirmed + rhs.confirmed,
            deaths: self.deaths + rhs.deaths,
        }
    }
}

/// Aggregation bucket for one registered municipality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Municipality {
    /// Canonical registry name.
    pub name: String,
    /// Confirmed cases, in input order.
    pub cases: Vec<CaseRecord>,
    /// Confirmed-case and death tallies.
    pub counters: Counters,
}

impl Municipality {
    /// Creates an empty bucket.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
            counters: Counters::default(),
        }
    }

    /// Number of confirmed cases.
    #[must_use]
    pub const fn confirmed(&self) -> u64 {
        self.counters.confirmed
    }

    /// Number of COVID-19 deaths among confirmed cases.
    #[must_use]
    pub const fn deaths(&self) -> u64 {
        self.counters.deaths
    }

    /// Whether at least one confirmed case was recorded.
    #[must_use]
    pub const fn is_infected(&self) -> bool {
        self.counters.confirmed > 0
    }
}

impl fmt::Display for Municipality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Município {}:\n{} casos confirmados.\n{} óbitos.",
            self.name, self.counters.confirmed, self.counters.deaths
        )
    }
}

/// Case-insensitive ordering of municipality names.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// The aggregation result for one data set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Where the rows came from (path or URL). Informational only.
    pub source: String,
    /// Data rows (header excluded) the report was aggregated from. Shared,
    /// not copied, with whoever holds the loaded line-list.
    pub rows: Arc<[RawRow]>,
    /// One bucket per registry name, keyed by that name.
    pub municipalities: BTreeMap<String, Municipality>,
    /// Confirmed cases whose municipality is missing or unregistered.
    pub unclassified: Counters,
    /// Every confirmed case, classified or not.
    pub totals: Counters,
    /// Municipalities whose confirmed count went from zero to nonzero
    /// during the pass.
    pub newly_infected: u64,
}

impl Report {
    /// Creates an empty report with one zeroed bucket per name.
    #[must_use]
    pub fn empty<'a>(source: impl Into<String>, names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            source: source.into(),
            rows: Arc::default(),
            municipalities: names
                .into_iter()
                .map(|name| (name.to_string(), Municipality::new(name)))
                .collect(),
            unclassified: Counters::default(),
            totals: Counters::default(),
            newly_infected: 0,
        }
    }

    /// Municipality buckets ordered by [`compare_names`].
    #[must_use]
    pub fn sorted_municipalities(&self) -> Vec<&Municipality> {
        let mut list: Vec<&Municipality> = self.municipalities.values().collect();
        list.sort_by(|a, b| compare_names(&a.name, &b.name));
        list
    }

    /// Sum of every municipality's counters.
    #[must_use]
    pub fn classified(&self) -> Counters {
        self.municipalities
            .values()
            .fold(Counters::default(), |acc, m| acc + m.counters)
    }

    /// Whether `totals == unclassified + sum(municipalities)` for both
    /// confirmed cases and deaths.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.totals == self.unclassified + self.classified()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Relatório do arquivo {}:\nTotal geral: {} casos confirmados, {} óbitos\n{} municípios infectados.",
            self.source, self.totals.confirmed, self.totals.deaths, self.newly_infected
        )
    }
}
