//! Config-driven line-list source definition.
//!
//! [`SourceDefinition`] captures everything about where a line-list is
//! published in a serializable config struct, loaded from TOML files
//! embedded at compile time (see [`crate::registry`]).

use serde::Deserialize;

use crate::SourceError;
use crate::encoding::Encoding;

/// Environment variable that overrides the download URL of every source.
pub const URL_ENV_VAR: &str = "COVID_ES_CSV_URL";

/// A complete, config-driven line-list source definition.
#[derive(Debug, Deserialize)]
pub struct SourceDefinition {
    /// Unique identifier (e.g., `"es_microdados"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Two-letter state abbreviation.
    pub state: String,
    /// Direct URL of the CSV file.
    pub url: String,
    /// Encoding used when the bytes are not valid UTF-8.
    #[serde(default)]
    pub encoding: Encoding,
    /// Field delimiter. Sniffed from the header line when omitted.
    pub delimiter: Option<String>,
    /// Licensing and usage metadata for this data source.
    pub license: LicenseInfo,
    /// Optional URL of the human-readable dashboard.
    #[serde(default)]
    pub portal_url: Option<String>,
}

/// Licensing and usage restrictions for a data source.
#[derive(Debug, Deserialize)]
pub struct LicenseInfo {
    /// License type identifier (`"open_data"`, `"public_domain"`, ...).
    pub license_type: String,
    /// Whether attribution is required when using this data.
    pub attribution_required: bool,
    /// Verbatim attribution text to display when required.
    pub attribution_text: Option<String>,
}

impl SourceDefinition {
    /// Returns the unique source identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable source name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the URL to download from, honoring [`URL_ENV_VAR`].
    #[must_use]
    pub fn csv_url(&self) -> String {
        std::env::var(URL_ENV_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.url.clone())
    }

    /// Returns the text that must accompany anything built from this
    /// source, or `None` when attribution isn't required.
    #[must_use]
    pub fn attribution(&self) -> Option<&str> {
        if !self.license.attribution_required {
            return None;
        }
        Some(self.license.attribution_text.as_deref().unwrap_or(&self.name))
    }

    /// Returns the configured delimiter byte, if any.
    #[must_use]
    pub fn delimiter_byte(&self) -> Option<u8> {
        self.delimiter
            .as_deref()
            .and_then(|d| d.as_bytes().first().copied())
    }
}

/// Parses a source definition from TOML.
///
/// # Errors
///
/// Returns [`SourceError::Toml`] if the TOML is malformed or missing
/// required fields.
pub fn parse_source_toml(toml_str: &str) -> Result<SourceDefinition, SourceError> {
    Ok(toml::de::from_str(toml_str)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
id = "teste"
name = "Teste"
state = "ES"
url = "https://example.com/dados.csv"
delimiter = ";"

[license]
license_type = "open_data"
attribution_required = false
"#;

    #[test]
    fn parses_minimal_toml() {
        let def = parse_source_toml(MINIMAL).unwrap();
        assert_eq!(def.id(), "teste");
        assert_eq!(def.encoding, Encoding::Utf8);
        assert_eq!(def.delimiter_byte(), Some(b';'));
        assert!(def.portal_url.is_none());
        assert!(!def.license.attribution_required);
    }

    #[test]
    fn parses_embedded_definition() {
        let def = parse_source_toml(include_str!("../sources/es_microdados.toml")).unwrap();
        assert_eq!(def.id(), "es_microdados");
        assert_eq!(def.state, "ES");
        assert_eq!(def.encoding, Encoding::Windows1252);
        assert_eq!(def.delimiter_byte(), None);
        assert!(def.url.ends_with("MICRODADOS.csv"));
    }

    #[test]
    fn attribution_only_when_required() {
        let def = parse_source_toml(MINIMAL).unwrap();
        assert_eq!(def.attribution(), None);

        let required = MINIMAL.replace(
            "attribution_required = false",
            "attribution_required = true",
        );
        let def = parse_source_toml(&required).unwrap();
        assert_eq!(def.attribution(), Some("Teste"));

        let def = parse_source_toml(include_str!("../sources/es_microdados.toml")).unwrap();
        assert_eq!(
            def.attribution(),
            Some("Secretaria da Saúde do Espírito Santo (SESA)")
        );
    }

    #[test]
    fn rejects_missing_license() {
        let toml_str = "id = \"x\"\nname = \"x\"\nstate = \"ES\"\nurl = \"u\"\n";
        assert!(matches!(
            parse_source_toml(toml_str),
            Err(SourceError::Toml(_))
        ));
    }
}
