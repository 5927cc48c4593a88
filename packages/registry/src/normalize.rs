//! Municipality name normalization.
//!
//! Applied to registry entries and to free-text input alike, so that
//! `"Vitória"`, `"vitoria "` and `"VITÓRIA"` all compare equal.

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is not an uppercase ASCII letter, digit or space.
static NON_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Z0-9 ]+").expect("valid regex"));

/// Folds a Portuguese accented letter to its ASCII base letter.
///
/// Characters without a mapping are returned unchanged.
#[must_use]
pub const fn fold_diacritic(c: char) -> char {
    match c {
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ç' => 'C',
        'ç' => 'c',
        'Ñ' => 'N',
        'ñ' => 'n',
        other => other,
    }
}

/// Strips diacritics from every character of `input`.
#[must_use]
pub fn strip_diacritics(input: &str) -> String {
    input.chars().map(fold_diacritic).collect()
}

/// Normalizes a municipality name for registry comparison.
///
/// The pipeline:
/// 1. Strip diacritics
/// 2. Uppercase
/// 3. Replace punctuation and other symbols with spaces
/// 4. Collapse whitespace and trim
#[must_use]
pub fn normalize_name(input: &str) -> String {
    let upper = strip_diacritics(input).to_uppercase();
    let cleaned = NON_NAME_RE.replace_all(&upper, " ");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
