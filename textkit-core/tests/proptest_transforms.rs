//! Property-based tests for the text transformations
//!
//! Uses proptest to check invariants that must hold for every input.

use proptest::prelude::*;
use textkit_core::{abbreviate, initials, swap_case, wrap, wrap_with, CompiledPattern, WrapOptions};

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary printable Unicode text
fn utf8_string() -> impl Strategy<Value = String> {
    "\\PC{0,80}"
}

/// Cased letters mixed with ASCII whitespace
fn letters_and_whitespace() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'B', 'c', 'D', 'é', 'Ü', 'σ', 'Ж', ' ', '\t', '\n']),
        0..60,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Words of 1..=8 ASCII letters joined by single spaces
fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z]{1,8}", 1..20).prop_map(|words| words.join(" "))
}

/// Break patterns, including several that can match the empty string
fn break_pattern() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", ",", "[aeiou]", r"\s+", r"\b", "(?:)", "$", "x*"])
}

// ============================================================================
// Abbreviate
// ============================================================================

proptest! {
    /// Valid bounds never fail; invalid ones always do.
    #[test]
    fn abbreviate_error_contract(text in utf8_string(), lower in 0usize..100, upper in -5isize..100) {
        let result = abbreviate(&text, lower, upper, Some("..."));
        let invalid = upper < -1 || (upper != -1 && (upper as usize) < lower);
        prop_assert_eq!(result.is_err(), invalid);
    }

    /// The result never exceeds the upper bound plus the marker.
    #[test]
    fn abbreviate_respects_upper_bound(text in utf8_string(), upper in 0isize..100) {
        let result = abbreviate(&text, 0, upper, Some("...")).unwrap();
        prop_assert!(result.chars().count() <= upper as usize + 3);
    }

    /// Without a marker the result is always a prefix of the input.
    #[test]
    fn abbreviate_is_prefix(text in utf8_string(), lower in 0usize..50, extra in 0usize..50) {
        let upper = (lower + extra) as isize;
        let result = abbreviate(&text, lower, upper, None).unwrap();
        prop_assert!(text.starts_with(&result));
    }
}

// ============================================================================
// Initials and case
// ============================================================================

proptest! {
    /// One initial per whitespace-separated word.
    #[test]
    fn initials_match_word_count(text in sentence()) {
        let result = initials(&text, None);
        prop_assert_eq!(result.chars().count(), text.split(' ').count());
    }

    /// An explicit empty delimiter list always yields nothing.
    #[test]
    fn initials_empty_list(text in utf8_string()) {
        prop_assert_eq!(initials(&text, Some(&[])), "");
    }

    /// Swapping twice restores letter-and-whitespace text.
    #[test]
    fn swap_case_is_involution(text in letters_and_whitespace()) {
        let once = swap_case(&text);
        prop_assert_eq!(swap_case(&once), text);
    }

    /// Case swapping never changes the number of codepoints.
    #[test]
    fn swap_case_preserves_length(text in utf8_string()) {
        prop_assert_eq!(swap_case(&text).chars().count(), text.chars().count());
    }
}

// ============================================================================
// Wrap
// ============================================================================

proptest! {
    /// Wrapping terminates for every pattern, including empty-matching ones.
    #[test]
    fn wrap_terminates(
        text in utf8_string(),
        width in 0usize..20,
        long_words in any::<bool>(),
        pattern in break_pattern(),
    ) {
        let compiled = CompiledPattern::compile(pattern).unwrap();
        let options = WrapOptions::new(width).line_separator("\n").wrap_long_words(long_words);
        let _ = wrap_with(&text, &options, &compiled);
    }

    /// With forced splits, no line exceeds the width.
    #[test]
    fn wrap_lines_fit(text in sentence(), width in 1usize..15) {
        let wrapped = wrap(Some(text.as_str()), width, Some("\n"), true, None).unwrap().unwrap();
        for line in wrapped.split('\n') {
            prop_assert!(line.chars().count() <= width, "{:?} wider than {}", line, width);
        }
    }

    /// Without forced splits, breaks only replace single spaces.
    #[test]
    fn wrap_is_lossless_on_single_spaces(text in sentence(), width in 1usize..15) {
        let wrapped = wrap(Some(text.as_str()), width, Some("\n"), false, None).unwrap().unwrap();
        prop_assert_eq!(wrapped.replace('\n', " "), text);
    }
}
