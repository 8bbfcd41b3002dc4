//! Tests for the sorter module
//!
//! The sorter is a pure, total transform; these tests pin its contract:
//! key derivation, stable ordering, whitespace handling, and the
//! sortedness checks behind the `check` command.

use rulesort::sorter::{first_unsorted, is_sorted, line_count, sort_key, sort_rules};

// =============================================================================
// Sort-key derivation
// =============================================================================

#[test]
fn key_strips_each_marker() {
    assert_eq!(sort_key("*sohu.com###ad"), "sohu.com###ad");
    assert_eq!(sort_key("||example.com##.banner"), "example.com##.banner");
    assert_eq!(sort_key("@@||allow.com^"), "allow.com^");
    assert_eq!(sort_key("@@whitelist.com^"), "whitelist.com^");
}

#[test]
fn key_is_lowercased() {
    assert_eq!(sort_key("||Example.COM^"), "example.com^");
    assert_eq!(sort_key("Plain.Org"), "plain.org");
}

#[test]
fn key_comment_uses_full_line() {
    // Comments are never prefix-stripped, even when markers follow the '!'
    assert_eq!(sort_key("!||not-a-rule.com"), "!||not-a-rule.com");
    assert_eq!(sort_key("! Section Header"), "! section header");
}

#[test]
fn key_unrecognized_line_is_itself() {
    assert_eq!(sort_key("#%#//scriptlet('abort-on-property-read')"), "#%#//scriptlet('abort-on-property-read')");
    assert_eq!(sort_key("|single-pipe.com"), "|single-pipe.com");
}

// =============================================================================
// Document sort
// =============================================================================

#[test]
fn sorts_rules_by_stripped_content() {
    let input = "||example.com##.banner\n*sohu.com###ad\n@@||allow.com^\n@@whitelist.com^";
    let expected = "@@||allow.com^\n||example.com##.banner\n*sohu.com###ad\n@@whitelist.com^";

    assert_eq!(sort_rules(input), expected);
}

#[test]
fn sorts_comments_by_literal_text() {
    assert_eq!(sort_rules("! b comment\n! a comment"), "! a comment\n! b comment");
}

#[test]
fn sort_is_case_insensitive() {
    assert_eq!(sort_rules("||Example.com\n||apple.com"), "||apple.com\n||Example.com");
}

#[test]
fn sort_is_stable_for_equal_keys() {
    // Same key "ads.com" from three different markers: input order survives
    let input = "||ads.com\n*ads.com\n@@ads.com";

    assert_eq!(sort_rules(input), input);
}

#[test]
fn sort_is_idempotent() {
    let input = "||zeta.com\n! comment\n@@||alpha.com\n*midway.net###ad";
    let once = sort_rules(input);
    let twice = sort_rules(&once);

    assert_eq!(once, twice);
}

#[test]
fn empty_input_gives_empty_output() {
    assert_eq!(sort_rules(""), "");
    assert_eq!(sort_rules("\n\n   \n\t\n"), "");
}

#[test]
fn blank_lines_are_dropped_not_preserved() {
    assert_eq!(sort_rules("||b.com\n\n\n||a.com\n"), "||a.com\n||b.com");
}

#[test]
fn lines_are_trimmed() {
    assert_eq!(sort_rules("  ||b.com  \n\t||a.com"), "||a.com\n||b.com");
}

#[test]
fn single_line_passes_through() {
    assert_eq!(sort_rules("||only.com^"), "||only.com^");
}

#[test]
fn no_trailing_newline_in_output() {
    let output = sort_rules("||b.com\n||a.com\n");

    assert!(!output.ends_with('\n'));
}

#[test]
fn line_count_is_preserved() {
    let input = "||c.com\n\n*a.com\n! note\n   \n@@b.com\n";
    let output = sort_rules(input);

    assert_eq!(line_count(input), 4);
    assert_eq!(line_count(&output), line_count(input));
}

#[test]
fn comments_interleave_with_rules() {
    // '! b' sorts between rule keys "a.com" and "c.com" by its literal text
    let input = "||c.com\n! b\n||a.com";

    assert_eq!(sort_rules(input), "! b\n||a.com\n||c.com");
}

// =============================================================================
// Sortedness checks
// =============================================================================

#[test]
fn sorted_input_reports_sorted() {
    assert!(is_sorted("@@||allow.com^\n||example.com^\n*zebra.com###ad"));
    assert_eq!(first_unsorted("||a.com\n||b.com"), None);
}

#[test]
fn unsorted_input_reports_first_offender() {
    // Keys: b.com, a.com -> index 1 is out of order
    assert_eq!(first_unsorted("||b.com\n||a.com"), Some(1));
    assert!(!is_sorted("||b.com\n||a.com"));
}

#[test]
fn first_unsorted_skips_blank_lines() {
    // Index counts non-empty lines only
    assert_eq!(first_unsorted("||b.com\n\n\n||a.com"), Some(1));
}

#[test]
fn empty_input_is_sorted() {
    assert!(is_sorted(""));
    assert!(is_sorted("  \n\n"));
}

#[test]
fn sort_output_always_checks_as_sorted() {
    let input = "||delta.com\n@@alpha.com\n*Charlie.net\n! bravo";

    assert!(is_sorted(&sort_rules(input)));
}
