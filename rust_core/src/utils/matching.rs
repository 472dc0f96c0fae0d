//! Case-insensitive text matching shared by every resolver stage.
//!
//! All keyword and code comparisons go through [`normalize`] so that stages
//! agree on what "matches" means regardless of upstream casing.

/// Normalize text for comparison (Unicode lowercase).
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}

/// True when `needle` occurs anywhere in `haystack`, ignoring case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}

/// True when `haystack` contains any of `needles`, ignoring case.
pub fn contains_any_ignore_case(haystack: &str, needles: &[&str]) -> bool {
    let haystack = normalize(haystack);
    needles
        .iter()
        .any(|needle| haystack.contains(&normalize(needle)))
}

/// Exact equality, ignoring case.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
