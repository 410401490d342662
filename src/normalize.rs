use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical comparison form: lowercase, diacritics stripped, trimmed.
///
/// Lowercasing happens before decomposition because a few lowercase forms
/// reintroduce combining marks (`İ` becomes `i` plus a combining dot);
/// doing it first keeps the function idempotent.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}
