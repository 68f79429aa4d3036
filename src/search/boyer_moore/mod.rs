// Copyright (c) 2025 bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore Pattern Matcher for efficient byte-string searching.
//!
//! This module provides an implementation of the Boyer-Moore string search
//! algorithm using both the bad character rule and the strong good suffix rule.
//! Comparisons are exact byte equality; there is no case folding or Unicode
//! normalization.
//!
//! # Features
//!
//! - Sublinear average-case search; linear when the pattern is absent
//! - Non-overlapping matches by default, overlapping on request
//! - Compiled matchers that keep their tables across searches
//! - A stateless [`BoyerMoore`] strategy for one-off searches
//!
//! # Example
//!
//! ```
//! use bmsearch_lib::search::boyer_moore::{BoyerMooreMatcher, MatcherOptions};
//!
//! let matcher = BoyerMooreMatcher::new("needle").unwrap();
//!
//! let text = "Finding a needle in a haystack is hard, but finding another needle is easier.";
//! let matches = matcher.find_all(text).collect::<Vec<_>>();
//! assert_eq!(matches, vec![10, 60]);
//!
//! let options = MatcherOptions::new().allow_overlapping(true);
//! let matcher = BoyerMooreMatcher::with_options("aa", options).unwrap();
//! assert_eq!(matcher.find_all("aaaa").count(), 3);
//! ```
//!
//! # Table conventions
//!
//! The bad character table stores the rightmost index of every byte in the
//! whole pattern, with `-1` for absent bytes. On a mismatch at index `j`
//! against byte `c` its shift is `j - table[c]`, clamped to at least 1. The good
//! suffix table is indexed by the mismatch position and the scanner advances by
//! the larger of the two shifts.
//!
//! # Performance Characteristics
//!
//! - Preprocessing time: O(m + σ) where m is the pattern length and σ = 256
//! - Space complexity: O(m + σ)
//! - Best case: O(n/m) comparisons (where n is the text length)
//! - Pattern absent: O(n + m) comparisons

mod error;
mod matcher;
mod preprocess;
mod tables;

#[cfg(test)]
mod tests;

#[cfg(test)]
pub(crate) use matcher::comparisons;

// Re-exports
pub use error::{BoyerMooreError, Result};
pub use matcher::{BoyerMoore, BoyerMooreMatcher, MatchIterator, MatcherOptions};
pub use preprocess::{PreprocessedPattern, DEFAULT_MAX_PATTERN_LENGTH};
pub use tables::{BadCharTable, GoodSuffixTable, ALPHABET_SIZE};
