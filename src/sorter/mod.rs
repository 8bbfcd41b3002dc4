//! Rule sorting - pure text transforms with no I/O dependencies
//!
//! A filter list sorts by the content behind the syntax markers, so
//! `||example.com^`, `@@||example.net^` and `*example.org###ad` all group
//! under "example". Keys are derived per line:
//!
//! - Comment lines (`!`) keep their full text as the key.
//! - Other lines drop at most one leading marker, first match wins.
//! - Keys are lowercased; comparisons are case-insensitive.
//!
//! Every function here is total: any input string yields a defined output.

use std::sync::LazyLock;

use regex::Regex;

/// Leading markers stripped when deriving a sort key, in match priority
/// order. First match wins; later rules are not tried.
///
/// `||` sits ahead of `@@||` as in the original rule set. A line starting
/// with `@@||` can never match `^\|\|`, so the order is currently inert,
/// but it is part of the table's contract - keep it when adding rules.
static PREFIX_RULES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"^\*+").expect("valid prefix pattern"),
        Regex::new(r"^\|\|").expect("valid prefix pattern"),
        Regex::new(r"^@@\|\|").expect("valid prefix pattern"),
        Regex::new(r"^@@").expect("valid prefix pattern"),
    ]
});

/// Derive the sort key for a single trimmed rule line.
///
/// The key is used only for ordering comparisons and is never displayed;
/// the original line is untouched.
///
/// # Examples
///
/// ```
/// use rulesort::sorter::sort_key;
///
/// assert_eq!(sort_key("||Example.com^"), "example.com^");
/// assert_eq!(sort_key("@@||allow.com^"), "allow.com^");
/// assert_eq!(sort_key("! A comment"), "! a comment");
/// assert_eq!(sort_key("plain.com"), "plain.com");
/// ```
#[must_use]
pub fn sort_key(line: &str) -> String {
    // Comments sort by their literal text, including the '!'
    if line.starts_with('!') {
        return line.to_lowercase();
    }

    for rule in &*PREFIX_RULES {
        if let Some(m) = rule.find(line) {
            return line[m.end()..].to_lowercase();
        }
    }

    line.to_lowercase()
}

/// Sort a block of filter-list rules.
///
/// Splits on newlines, drops lines that are empty after trimming, then
/// stable-sorts the rest by [`sort_key`]. Lines with equal keys keep their
/// relative input order. The result joins lines with single newlines and
/// carries no trailing newline; empty or whitespace-only input yields an
/// empty string.
#[must_use]
pub fn sort_rules(text: &str) -> String {
    let mut lines: Vec<&str> = trimmed_lines(text).collect();

    if lines.is_empty() {
        return String::new();
    }

    lines.sort_by_cached_key(|line| sort_key(line));

    lines.join("\n")
}

/// Count the non-empty trimmed lines in a block of text.
#[must_use]
pub fn line_count(text: &str) -> usize {
    trimmed_lines(text).count()
}

/// Find the first out-of-order line in a block of rules.
///
/// Returns the zero-based index (among non-empty trimmed lines) of the
/// first line whose key sorts before its predecessor's, or `None` when the
/// text is already in sorted order. A stable sort leaves the input
/// untouched exactly when adjacent keys are non-decreasing, so this is the
/// check behind [`is_sorted`].
#[must_use]
pub fn first_unsorted(text: &str) -> Option<usize> {
    let keys: Vec<String> = trimmed_lines(text).map(sort_key).collect();

    keys.windows(2).position(|pair| pair[0] > pair[1]).map(|i| i + 1)
}

/// Check whether a block of rules is already sorted.
#[must_use]
pub fn is_sorted(text: &str) -> bool {
    first_unsorted(text).is_none()
}

/// Non-empty trimmed lines of the input, in order.
fn trimmed_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(str::trim).filter(|line| !line.is_empty())
}
