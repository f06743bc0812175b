// ABOUTME: Text cleanup for quote candidates: quotation marks, non-breaking spaces, surrounding whitespace.
// ABOUTME: Also strips the dangling dash left when an inline credit follows a quote.

use once_cell::sync::Lazy;
use regex::Regex;

// Straight, angled and curly double quotes
static QUOTE_MARKS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[«»"“”]"#).unwrap());

const NBSP: char = '\u{a0}';

/// Remove quotation marks and non-breaking spaces, then trim.
pub fn clean_text(text: &str) -> String {
    QUOTE_MARKS_RE
        .replace_all(text, "")
        .replace(NBSP, "")
        .trim()
        .to_string()
}

/// Collapse every run of whitespace into a single space.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop one trailing `-` or `–` and the whitespace before it.
pub fn remove_credit(quote: &str) -> String {
    match quote.strip_suffix(|c| c == '-' || c == '–') {
        Some(rest) => rest.trim_end().to_string(),
        None => quote.to_string(),
    }
}
