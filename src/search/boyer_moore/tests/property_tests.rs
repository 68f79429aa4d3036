// Copyright (c) 2025 bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for Boyer-Moore Pattern Matcher.

use proptest::prelude::*;

use crate::search::boyer_moore::{BoyerMoore, BoyerMooreMatcher, MatcherOptions};
use crate::search::SearchAlgorithm;
use crate::tests::reference_positions;

// Small alphabets make repeated substrings and partial matches common
fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{1,6}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,200}").unwrap()
}

fn wide_pattern_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_\\-]{1,50}").unwrap()
}

fn wide_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_\\- ,.!?]{10,500}").unwrap()
}

proptest! {
    // Property: every reported position holds the pattern
    #[test]
    fn prop_find_all_is_sound(pattern in pattern_strategy(), text in text_strategy()) {
        let matcher = BoyerMooreMatcher::new(&pattern).unwrap();

        for pos in matcher.find_all(&text) {
            prop_assert_eq!(&text[pos..pos + pattern.len()], pattern.as_str());
        }
    }

    // Property: non-overlapping results agree with the brute force oracle
    #[test]
    fn prop_find_all_matches_reference(pattern in pattern_strategy(), text in text_strategy()) {
        let matcher = BoyerMooreMatcher::new(&pattern).unwrap();
        let found: Vec<usize> = matcher.find_all(&text).collect();

        prop_assert_eq!(found, reference_positions(text.as_bytes(), pattern.as_bytes(), false));
    }

    // Property: overlapping results agree with the brute force oracle
    #[test]
    fn prop_find_all_overlapping_matches_reference(pattern in pattern_strategy(), text in text_strategy()) {
        let options = MatcherOptions::new().allow_overlapping(true);
        let matcher = BoyerMooreMatcher::with_options(&pattern, options).unwrap();
        let found: Vec<usize> = matcher.find_all(&text).collect();

        prop_assert_eq!(found, reference_positions(text.as_bytes(), pattern.as_bytes(), true));
    }

    // Property: offsets strictly increase by at least the pattern length
    #[test]
    fn prop_find_all_never_overlaps(pattern in pattern_strategy(), text in text_strategy()) {
        let matcher = BoyerMooreMatcher::new(&pattern).unwrap();
        let found: Vec<usize> = matcher.find_all(&text).collect();

        for pair in found.windows(2) {
            prop_assert!(pair[1] >= pair[0] + pattern.len());
        }
    }

    // Property: find_first agrees with the standard library
    #[test]
    fn prop_find_first_matches_standard_library(
        pattern in wide_pattern_strategy(),
        text in wide_text_strategy()
    ) {
        let matcher = BoyerMooreMatcher::new(&pattern).unwrap();
        prop_assert_eq!(matcher.find_first(&text), text.find(&pattern));
    }

    // Property: patterns spliced between fragments are all found
    #[test]
    fn prop_find_all_finds_spliced_occurrences(
        pattern in wide_pattern_strategy(),
        text_fragments in prop::collection::vec(wide_text_strategy(), 1..10)
    ) {
        let text = text_fragments.join(&pattern);
        let options = MatcherOptions::new().allow_overlapping(true);
        let matcher = BoyerMooreMatcher::with_options(&pattern, options).unwrap();
        let found: Vec<usize> = matcher.find_all(&text).collect();

        let mut pos = 0;
        for fragment in &text_fragments[..text_fragments.len() - 1] {
            pos += fragment.len();
            prop_assert!(found.contains(&pos));
            pos += pattern.len();
        }
    }

    // Property: the stateless strategy and the compiled matcher agree
    #[test]
    fn prop_stateless_agrees_with_compiled(
        pattern in pattern_strategy(),
        text in text_strategy(),
        from in 0usize..200
    ) {
        let matcher = BoyerMooreMatcher::new(&pattern).unwrap();
        let from = from.min(text.len());

        let stateless = BoyerMoore
            .find(&text.as_bytes()[from..], pattern.as_bytes())
            .map(|pos| pos + from);
        prop_assert_eq!(stateless, matcher.find_from(&text, from));
    }
}
