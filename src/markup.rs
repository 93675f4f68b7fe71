//! Lightweight pattern matching over extracted text.
//!
//! The "section" convention in semi-structured text documents is a regex
//! convention, deliberately not a markup parser. Every tag pattern lives
//! behind this narrow interface so a real parser could replace it without
//! touching the matching logic.

use regex::Regex;
use std::sync::LazyLock;

static SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<section.*?>(.*?)</section>").expect("valid regex"));
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1.*?>(.*?)</h1>").expect("valid regex"));
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--(.*?)-->").expect("valid regex"));
static STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<strong>(.*?)</strong>").expect("valid regex"));

/// Inner text of every `<section>...</section>` span, case-insensitive,
/// spanning newlines, in document order.
pub fn split_sections(text: &str) -> Vec<&str> {
    capture_all(&SECTION, text)
}

/// Inner text of every `<h1>` span inside a section.
pub fn find_headings(section: &str) -> Vec<&str> {
    capture_all(&HEADING, section)
}

/// Inner text of every HTML-style comment inside a section.
pub fn find_comments(section: &str) -> Vec<&str> {
    capture_all(&COMMENT, section)
}

/// Inner text of every `<strong>` span within a single line.
pub fn emphasized_spans(line: &str) -> Vec<&str> {
    capture_all(&STRONG, line)
}

fn capture_all<'t>(pattern: &Regex, text: &'t str) -> Vec<&'t str> {
    pattern
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|group| group.as_str())
        .collect()
}
