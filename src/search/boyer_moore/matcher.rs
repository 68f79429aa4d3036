// Copyright (c) 2025 bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore string matching algorithm implementation.
//!
//! This module contains the scanner at the heart of the algorithm, the
//! compiled [`BoyerMooreMatcher`] that keeps its tables across searches, and
//! the stateless [`BoyerMoore`] strategy that rebuilds them on every call.

use std::iter::FusedIterator;

use super::error::Result;
use super::preprocess::{PreprocessedPattern, DEFAULT_MAX_PATTERN_LENGTH};
use super::tables::{BadCharTable, GoodSuffixTable};
use crate::search::SearchAlgorithm;

/// Finds the leftmost alignment at or after `from` where `pattern` matches `text`.
///
/// The window is compared right to left. On a mismatch at pattern index `j`
/// the window advances by the larger of the bad character and good suffix
/// shifts, both of which are at least 1.
pub(crate) fn scan(
    text: &[u8],
    pattern: &[u8],
    bad_char_table: &BadCharTable,
    good_suffix_table: &GoodSuffixTable,
    from: usize,
) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 || m > n {
        return None;
    }

    let mut shift = from;
    while shift <= n - m {
        let window = &text[shift..shift + m];

        let mismatch = (0..m).rev().find(|&j| pattern[j] != window[j]);

        #[cfg(test)]
        comparisons::record(m - mismatch.unwrap_or(0));

        match mismatch {
            None => return Some(shift),
            Some(j) => {
                let bad_char_shift = bad_char_table.shift(window[j], j);
                let good_suffix_shift = good_suffix_table.shift(j);
                shift += bad_char_shift.max(good_suffix_shift);
            }
        }
    }

    None
}


/// Options for configuring the Boyer-Moore matcher behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherOptions {
    /// Whether to allow overlapping matches
    pub allow_overlapping: bool,

    /// Longest pattern accepted, in bytes
    pub max_pattern_len: usize,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            allow_overlapping: false,
            max_pattern_len: DEFAULT_MAX_PATTERN_LENGTH,
        }
    }
}

impl MatcherOptions {
    /// Creates a new options object with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to allow overlapping matches.
    ///
    /// # Arguments
    ///
    /// * `value` - `true` to allow overlapping matches, `false` otherwise.
    pub fn allow_overlapping(mut self, value: bool) -> Self {
        self.allow_overlapping = value;
        self
    }

    /// Sets the longest pattern accepted, in bytes.
    pub fn max_pattern_len(mut self, value: usize) -> Self {
        self.max_pattern_len = value;
        self
    }
}

/// Iterator over match positions of a compiled matcher.
///
/// Yields byte offsets in strictly increasing order and keeps returning
/// `None` once exhausted.
#[derive(Debug)]
pub struct MatchIterator<'a> {
    /// The matcher instance
    matcher: &'a BoyerMooreMatcher,

    /// The text being searched
    text: &'a [u8],

    /// Left edge of the next alignment window
    position: usize,

    /// Whether the iterator is exhausted
    exhausted: bool,
}

impl<'a> Iterator for MatchIterator<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.matcher.find_from(self.text, self.position) {
            Some(pos) => {
                // The period is the smallest safe step past a match
                let step = if self.matcher.options.allow_overlapping {
                    self.matcher.pattern.good_suffix_table.match_shift()
                } else {
                    self.matcher.len()
                };
                self.position = pos + step;
                Some(pos)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}

impl<'a> FusedIterator for MatchIterator<'a> {}

/// Boyer-Moore pattern matcher compiled for a single pattern.
///
/// The tables are built once in the constructor and reused by every search,
/// so one matcher can be shared across threads and texts.
#[derive(Debug, Clone)]
pub struct BoyerMooreMatcher {
    /// The preprocessed pattern
    pattern: PreprocessedPattern,

    /// Matcher options
    options: MatcherOptions,
}

impl BoyerMooreMatcher {
    /// Creates a new Boyer-Moore matcher with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or too long.
    pub fn new(pattern: impl AsRef<[u8]>) -> Result<Self> {
        Self::with_options(pattern, MatcherOptions::default())
    }

    /// Creates a new Boyer-Moore matcher with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or longer than
    /// `options.max_pattern_len`.
    pub fn with_options(pattern: impl AsRef<[u8]>, options: MatcherOptions) -> Result<Self> {
        let pattern = PreprocessedPattern::new(pattern.as_ref(), options.max_pattern_len)?;
        Ok(Self { pattern, options })
    }

    /// The pattern this matcher searches for.
    pub fn pattern(&self) -> &[u8] {
        &self.pattern.pattern
    }

    /// The length of the pattern in bytes.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Always `false`; a matcher is never built for an empty pattern.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// The options this matcher was built with.
    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    /// Finds the first occurrence of the pattern in the text.
    pub fn find_first(&self, text: impl AsRef<[u8]>) -> Option<usize> {
        self.find_from(text, 0)
    }

    /// Finds the first occurrence of the pattern starting at or after `from`.
    ///
    /// The returned position is an offset into the whole `text`.
    pub fn find_from(&self, text: impl AsRef<[u8]>, from: usize) -> Option<usize> {
        scan(
            text.as_ref(),
            &self.pattern.pattern,
            &self.pattern.bad_char_table,
            &self.pattern.good_suffix_table,
            from,
        )
    }

    /// Returns an iterator over all occurrences of the pattern in the text.
    ///
    /// Matches do not overlap unless the matcher was built with
    /// `allow_overlapping`.
    pub fn find_all<'a, T>(&'a self, text: &'a T) -> MatchIterator<'a>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        MatchIterator {
            matcher: self,
            text: text.as_ref(),
            position: 0,
            exhausted: false,
        }
    }
}

/// Stateless Boyer-Moore search strategy.
///
/// Builds fresh tables for every call; use [`BoyerMooreMatcher`] to keep them
/// across searches for the same pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoyerMoore;

impl SearchAlgorithm for BoyerMoore {
    fn name(&self) -> &'static str {
        "boyer-moore"
    }

    fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        if pattern.is_empty() || text.len() < pattern.len() {
            return None;
        }

        let bad_char_table = BadCharTable::new(pattern);
        let good_suffix_table = GoodSuffixTable::new(pattern);
        scan(text, pattern, &bad_char_table, &good_suffix_table, 0)
    }
}
