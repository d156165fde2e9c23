//! Whitespace normalization and the small string helpers shared by the roles.

/// Trims and collapses every maximal whitespace run into a single ASCII space.
///
/// Idempotent; whitespace-only input collapses to the empty string.
pub fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `n` whitespace-separated words of `s`, space-joined.
pub fn first_words(s: &str, n: usize) -> String {
    s.split_whitespace().take(n).collect::<Vec<_>>().join(" ")
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lower-cased slug: every run of non-word characters becomes one hyphen.
///
/// Leading and trailing runs are kept as hyphens rather than trimmed.
pub fn slug(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_gap = false;
    for c in s.chars() {
        if is_word_char(c) {
            in_gap = false;
            out.push(c.to_ascii_lowercase());
        } else if !in_gap {
            in_gap = true;
            out.push('-');
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
