//! Source registry. Loads every source definition from embedded TOML configs.
//!
//! Each `.toml` file in `packages/source/sources/` is baked into the binary
//! at compile time via [`include_str!`].

use crate::source_def::{SourceDefinition, parse_source_toml};

/// TOML configs embedded at compile time.
const SOURCE_TOMLS: &[(&str, &str)] = &[(
    "es_microdados",
    include_str!("../sources/es_microdados.toml"),
)];

/// Identifier of the source used when none is requested.
pub const DEFAULT_SOURCE_ID: &str = "es_microdados";

/// Returns all configured source definitions, parsed from embedded TOML.
///
/// # Panics
///
/// Panics if any TOML config is malformed (the configs are embedded, so
/// this is caught by the tests below).
#[must_use]
pub fn all_sources() -> Vec<SourceDefinition> {
    SOURCE_TOMLS
        .iter()
        .map(|(name, toml)| {
            parse_source_toml(toml).unwrap_or_else(|e| panic!("Failed to parse {name}.toml: {e}"))
        })
        .collect()
}

/// Returns the source with the given id.
#[must_use]
pub fn find_source(id: &str) -> Option<SourceDefinition> {
    all_sources().into_iter().find(|s| s.id() == id)
}

/// Returns the default state line-list source.
///
/// # Panics
///
/// Panics if the embedded default definition is missing.
#[must_use]
pub fn default_source() -> SourceDefinition {
    find_source(DEFAULT_SOURCE_ID)
        .unwrap_or_else(|| panic!("Embedded source '{DEFAULT_SOURCE_ID}' is missing"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_all_sources() {
        assert_eq!(all_sources().len(), SOURCE_TOMLS.len());
    }

    #[test]
    fn file_names_match_ids() {
        for (name, toml) in SOURCE_TOMLS {
            assert_eq!(parse_source_toml(toml).unwrap().id(), *name);
        }
    }

    #[test]
    fn default_source_exists() {
        assert_eq!(default_source().id(), DEFAULT_SOURCE_ID);
        assert!(find_source("nope").is_none());
    }
}
