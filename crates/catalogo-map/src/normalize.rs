//! Header normalization for comparison.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalizes a header for comparison: trim, NFD decomposition, strip
/// combining marks, lowercase.
///
/// Internal whitespace is kept as-is. A header that differs only by internal
/// spacing is a different header and must not match.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}
