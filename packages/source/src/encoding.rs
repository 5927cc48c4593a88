//! Byte decoding for published CSV files.
//!
//! The state panel has published its line-list both as UTF-8 and as
//! Windows-1252 ("ANSI"). Bytes are decoded as UTF-8 when valid, otherwise
//! with the source's declared fallback encoding.

use serde::Deserialize;

/// Fallback encoding for a source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Encoding {
    /// UTF-8; invalid sequences are replaced with U+FFFD.
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
    /// Windows-1252 (a superset of ISO-8859-1).
    #[serde(rename = "windows-1252")]
    Windows1252,
}

impl Encoding {
    /// The matching `encoding_rs` codec.
    #[must_use]
    pub fn codec(self) -> &'static encoding_rs::Encoding {
        match self {
            Self::Utf8 => encoding_rs::UTF_8,
            Self::Windows1252 => encoding_rs::WINDOWS_1252,
        }
    }
}

/// Decodes `bytes`, trying UTF-8 first and then `fallback`.
///
/// A leading byte-order mark is dropped.
#[must_use]
pub fn decode(bytes: &[u8], fallback: Encoding) -> String {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if !had_errors || fallback == Encoding::Utf8 {
        return text.into_owned();
    }

    let codec = fallback.codec();
    log::debug!("Input is not valid UTF-8, decoding as {}", codec.name());
    let (text, _) = codec.decode_without_bom_handling(bytes);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_valid_utf8() {
        let bytes = "Não encontrado".as_bytes();
        assert_eq!(decode(bytes, Encoding::Windows1252), "Não encontrado");
    }

    #[test]
    fn falls_back_to_windows_1252() {
        // "Óbito" in Windows-1252
        let bytes = [0xD3, b'b', b'i', b't', b'o'];
        assert_eq!(decode(&bytes, Encoding::Windows1252), "Óbito");
    }

    #[test]
    fn maps_windows_1252_specials() {
        // "€ – ç"; 0x80 and 0x96 differ from Latin-1
        let bytes = [0x80, b' ', 0x96, b' ', 0xE7];
        assert_eq!(decode(&bytes, Encoding::Windows1252), "€ – ç");
    }

    #[test]
    fn lossy_utf8_fallback() {
        let bytes = [b'a', 0xFF, b'b'];
        assert_eq!(decode(&bytes, Encoding::Utf8), "a\u{FFFD}b");
    }

    #[test]
    fn strips_bom() {
        let bytes = "\u{FEFF}Data;Classificacao".as_bytes();
        assert_eq!(decode(bytes, Encoding::Utf8), "Data;Classificacao");
    }

    #[test]
    fn codecs_match_names() {
        assert_eq!(Encoding::Utf8.codec().name(), "UTF-8");
        assert_eq!(Encoding::Windows1252.codec().name(), "windows-1252");
    }
}
