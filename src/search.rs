//! Text normalization shared by the search pipeline.
//!
//! Both storage backends match a query term against the same normalized
//! haystack, so the normalization applied here is the single definition of
//! what "free-text search" means for the whole service.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: NFKD decomposition, combining marks
/// stripped (so é/ñ match their ASCII base letters), lowercased, trimmed.
pub fn normalize(value: &str) -> String {
    value
        .nfkd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}
