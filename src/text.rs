//! Text normalization for catalog matching.
//!
//! Search criteria and record fields are compared by case-folded substring
//! containment. Folding goes through `str::to_lowercase`, so it is
//! Unicode-aware rather than ASCII-only.

/// True when the input is empty or whitespace-only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Trim and case-fold a search term.
///
/// Returns `None` when the input has no usable content, which callers treat
/// as an absent criterion.
pub fn normalize_term(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Case-insensitive substring containment.
///
/// `needle` must already be normalized via [`normalize_term`]; the haystack
/// is folded here, per comparison.
pub fn contains_fold(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
