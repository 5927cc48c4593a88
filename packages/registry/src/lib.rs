#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Municipality registry.
//!
//! A fixed set of canonical municipality names with a membership test that
//! ignores case, diacritics and punctuation. The aggregation layer uses it
//! to decide whether a case belongs to a municipality bucket or to the
//! unclassified tally.

pub mod municipalities;
pub mod normalize;

use std::collections::BTreeSet;

pub use municipalities::ES_MUNICIPALITIES;
pub use normalize::normalize_name;

/// A set of canonical municipality names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    names: BTreeSet<String>,
}

impl Registry {
    /// The registry of the 78 Espírito Santo municipalities.
    #[must_use]
    pub fn espirito_santo() -> Self {
        Self::from_names(ES_MUNICIPALITIES.iter().copied())
    }

    /// Builds a registry from arbitrary names. Each name is normalized
    /// first; empty names are dropped.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| normalize_name(name.as_ref()))
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }

    /// Canonical names, in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of registered municipalities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the canonical name `raw` refers to, if it is registered.
    #[must_use]
    pub fn classify(&self, raw: &str) -> Option<&str> {
        let key = normalize_name(raw);
        self.names.get(&key).map(String::as_str)
    }

    /// Whether `raw` refers to a registered municipality.
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.classify(raw).is_some()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::espirito_santo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn espirito_santo_has_every_municipality() {
        let registry = Registry::espirito_santo();
        assert_eq!(registry.len(), ES_MUNICIPALITIES.len());
        assert!(registry.names().eq(ES_MUNICIPALITIES.iter().copied()));
    }

    #[test]
    fn classifies_accented_input() {
        let registry = Registry::espirito_santo();
        assert_eq!(registry.classify("Vitória"), Some("VITORIA"));
        assert_eq!(registry.classify("cachoeiro de itapemirim"), Some("CACHOEIRO DE ITAPEMIRIM"));
        assert_eq!(registry.classify(" Fundão "), Some("FUNDAO"));
    }

    #[test]
    fn rejects_unknown_names() {
        let registry = Registry::espirito_santo();
        assert_eq!(registry.classify("RIO DE JANEIRO"), None);
        assert!(!registry.contains(""));
        assert!(!registry.contains("VITORI"));
    }

    #[test]
    fn custom_registry_normalizes_names() {
        let registry = Registry::from_names(["Alegre", "São Mateus", " "]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names().collect::<Vec<_>>(), ["ALEGRE", "SAO MATEUS"]);
    }
}
