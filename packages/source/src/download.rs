//! Row acquisition from a local file or the state's download URL.

use std::path::Path;

use crate::csv_rows::parse_rows;
use crate::encoding::decode;
use crate::source_def::SourceDefinition;
use crate::{RowSet, SourceError};

/// User agent sent with download requests.
const USER_AGENT: &str = "covid-es/1.0";

/// Reads and parses a local CSV using the source's encoding and delimiter.
///
/// # Errors
///
/// Returns [`SourceError`] if the file can't be read or parsed.
pub fn read_file(path: &Path, definition: &SourceDefinition) -> Result<RowSet, SourceError> {
    let origin = path.display().to_string();
    log::info!("Reading line-list from {origin}");

    let bytes = std::fs::read(path)?;
    log::debug!("Read {} bytes from {origin}", bytes.len());

    parse_bytes(&bytes, definition, &origin)
}

/// Downloads the latest line-list for `definition`.
///
/// Returns the URL actually used (after the environment override) along
/// with the parsed rows.
///
/// # Errors
///
/// Returns [`SourceError`] if the request fails, the server answers with an
/// error status, or the body can't be parsed.
pub async fn download(definition: &SourceDefinition) -> Result<(String, RowSet), SourceError> {
    let url = definition.csv_url();
    log::info!("[{}] Downloading {url}", definition.id());

    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    let response = client.get(&url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;

    log::debug!("Downloaded {} bytes from {url}", bytes.len());

    let rows = parse_bytes(&bytes, definition, &url)?;
    Ok((url, rows))
}

/// Decodes and parses raw CSV bytes.
///
/// # Errors
///
/// Returns [`SourceError`] if the CSV can't be parsed.
pub fn parse_bytes(
    bytes: &[u8],
    definition: &SourceDefinition,
    origin: &str,
) -> Result<RowSet, SourceError> {
    let text = decode(bytes, definition.encoding);
    parse_rows(&text, definition.delimiter_byte(), origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::default_source;

    #[test]
    fn parses_windows_1252_bytes() {
        let mut bytes = b"Data;Classificacao;Evolucao\n11/03/2020;Confirmados;".to_vec();
        // "Óbito pelo COVID-19" with Ó as a single Windows-1252 byte
        bytes.push(0xD3);
        bytes.extend_from_slice(b"bito pelo COVID-19\n");

        let rows = parse_bytes(&bytes, &default_source(), "teste.csv").unwrap();
        assert_eq!(rows.rows[0][2], "Óbito pelo COVID-19");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_file(Path::new("/nonexistent/MICRODADOS.csv"), &default_source())
            .unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }
}
