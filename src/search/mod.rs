// Copyright (c) 2025 bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Substring search over in-memory byte buffers.
//!
//! The entry points are [`find_all`] for a single pattern and
//! [`find_all_patterns`] for an ordered list of patterns. Both return lazy
//! iterators that re-run a [`SearchAlgorithm`] over the unscanned remainder of
//! the text, so a caller can stop between any two matches by dropping the
//! iterator.
//!
//! ```
//! use bmsearch_lib::search::{find_all, find_all_patterns};
//!
//! let offsets: Vec<usize> = find_all("abcabcabc", "abc").collect();
//! assert_eq!(offsets, vec![0, 3, 6]);
//!
//! let pairs: Vec<(&&str, usize)> = find_all_patterns("a-b-a", &["a", "b"]).collect();
//! assert_eq!(pairs, vec![(&"a", 0), (&"a", 4), (&"b", 2)]);
//! ```

pub mod boyer_moore;
mod driver;
mod kmp;
mod naive;
pub mod pattern_set;

pub use boyer_moore::{BoyerMoore, BoyerMooreMatcher, MatcherOptions};
pub use driver::{Matches, PatternMatches};
pub use kmp::KnuthMorrisPratt;
pub use naive::NaiveSearch;
pub use pattern_set::{PatternSet, SharedPatternSet};

/// A substring search strategy.
///
/// Implementations return the offset of the leftmost occurrence of `pattern`
/// in `text`, or `None` when there is none. An empty pattern or an empty text
/// never matches.
#[cfg_attr(test, mockall::automock)]
pub trait SearchAlgorithm {
    /// Short human readable name of the strategy.
    fn name(&self) -> &'static str;

    /// Finds the leftmost occurrence of `pattern` in `text`.
    fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize>;
}

static BOYER_MOORE: BoyerMoore = BoyerMoore;

/// Returns an iterator over the non-overlapping occurrences of `pattern` in `text`
/// using the Boyer-Moore strategy.
pub fn find_all<'a, T, P>(text: &'a T, pattern: &'a P) -> Matches<'a, BoyerMoore>
where
    T: AsRef<[u8]> + ?Sized,
    P: AsRef<[u8]> + ?Sized,
{
    find_all_with(&BOYER_MOORE, text, pattern)
}

/// Returns an iterator over the non-overlapping occurrences of `pattern` in `text`
/// using the given strategy.
pub fn find_all_with<'a, A, T, P>(algorithm: &'a A, text: &'a T, pattern: &'a P) -> Matches<'a, A>
where
    A: SearchAlgorithm + ?Sized,
    T: AsRef<[u8]> + ?Sized,
    P: AsRef<[u8]> + ?Sized,
{
    Matches::new(algorithm, text.as_ref(), pattern.as_ref())
}

/// Returns an iterator over `(pattern, offset)` pairs for every pattern in
/// order, using the Boyer-Moore strategy.
///
/// Each pattern is searched to exhaustion before the next one starts.
pub fn find_all_patterns<'a, T, P>(text: &'a T, patterns: &'a [P]) -> PatternMatches<'a, P, BoyerMoore>
where
    T: AsRef<[u8]> + ?Sized,
    P: AsRef<[u8]>,
{
    find_all_patterns_with(&BOYER_MOORE, text, patterns)
}

/// Returns an iterator over `(pattern, offset)` pairs for every pattern in
/// order, using the given strategy.
pub fn find_all_patterns_with<'a, A, T, P>(
    algorithm: &'a A,
    text: &'a T,
    patterns: &'a [P],
) -> PatternMatches<'a, P, A>
where
    A: SearchAlgorithm + ?Sized,
    T: AsRef<[u8]> + ?Sized,
    P: AsRef<[u8]>,
{
    PatternMatches::new(algorithm, text.as_ref(), patterns)
}
