//! Cross-strategy tests for the search driver.
//!
//! Every strategy must report exactly the occurrences a brute force scan
//! finds, for arbitrary byte input including bytes outside ASCII.

use proptest::prelude::*;

use crate::search::{
    find_all, find_all_patterns_with, find_all_with, BoyerMoore, KnuthMorrisPratt, NaiveSearch,
    PatternSet, SearchAlgorithm,
};
use crate::tests::{byte_text_strategy, reference_positions};

const SMALL_ALPHABET: &[u8] = b"ab";
const BINARY_ALPHABET: &[u8] = &[0x00, 0x7f, 0x80, 0xfe, 0xff];

fn strategies() -> [&'static dyn SearchAlgorithm; 3] {
    [&BoyerMoore, &KnuthMorrisPratt, &NaiveSearch]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn every_strategy_agrees_with_brute_force(
        text in byte_text_strategy(SMALL_ALPHABET, 120),
        pattern in byte_text_strategy(SMALL_ALPHABET, 6),
        overlapping in any::<bool>(),
    ) {
        let expected = reference_positions(&text, &pattern, overlapping);
        for algorithm in strategies() {
            let offsets: Vec<usize> = find_all_with(algorithm, &text, &pattern)
                .allow_overlapping(overlapping)
                .collect();
            prop_assert_eq!(&offsets, &expected, "algorithm {}", algorithm.name());
        }
    }

    #[test]
    fn high_bytes_are_ordinary_symbols(
        text in byte_text_strategy(BINARY_ALPHABET, 200),
        pattern in byte_text_strategy(BINARY_ALPHABET, 4),
    ) {
        let offsets: Vec<usize> = find_all(&text, &pattern).collect();
        prop_assert_eq!(offsets, reference_positions(&text, &pattern, false));
    }

    #[test]
    fn pattern_set_matches_driver(
        text in byte_text_strategy(SMALL_ALPHABET, 80),
        patterns in proptest::collection::vec(
            byte_text_strategy(SMALL_ALPHABET, 5).prop_filter("non-empty", |p| !p.is_empty()),
            0..4,
        ),
    ) {
        let set = PatternSet::new(&patterns).unwrap();
        let from_set: Vec<(&[u8], usize)> = set.find_all(&text).collect();
        let from_driver: Vec<(&[u8], usize)> = find_all_patterns_with(&BoyerMoore, &text, &patterns)
            .map(|(pattern, offset)| (pattern.as_slice(), offset))
            .collect();
        prop_assert_eq!(from_set, from_driver);
    }
}

#[test]
fn test_long_periodic_input() {
    let text = "ab".repeat(10_000);
    let offsets: Vec<usize> = find_all(&text, "abab").collect();

    assert_eq!(offsets.len(), 5_000);
    assert!(offsets.iter().enumerate().all(|(i, offset)| *offset == i * 4));
}
