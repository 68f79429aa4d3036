// Copyright (c) 2025 bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tables for the Boyer-Moore string matching algorithm.
//!
//! This module contains the data structures for the lookup tables used by
//! the Boyer-Moore algorithm to achieve efficient string matching:
//!
//! 1. Bad Character Table: Used to skip alignments where the byte
//!    at the mismatch position in the text doesn't appear in the pattern,
//!    or appears only further left than the mismatch.
//!
//! 2. Good Suffix Table: Used to skip alignments when a suffix of the
//!    pattern matches but there's a mismatch earlier.
//!
//! Both tables are derived solely from the pattern and are read-only once built.

/// Number of distinct symbols in the byte alphabet.
pub const ALPHABET_SIZE: usize = 256;

/// Sentinel marking a byte that does not occur in the pattern.
const ABSENT: isize = -1;

/// Represents the bad character table for the Boyer-Moore algorithm.
///
/// Every byte value maps to the rightmost index at which it occurs in the
/// pattern, or to `-1` when it does not occur at all. The final byte of the
/// pattern is recorded like any other.
#[derive(Debug, Clone)]
pub struct BadCharTable {
    last_occurrence: [isize; ALPHABET_SIZE],
}

impl BadCharTable {
    /// Creates a new bad character table for the given pattern.
    ///
    /// Later occurrences overwrite earlier ones, which leaves the rightmost
    /// index for each byte.
    pub fn new(pattern: &[u8]) -> Self {
        let mut last_occurrence = [ABSENT; ALPHABET_SIZE];

        for (i, &byte) in pattern.iter().enumerate() {
            last_occurrence[usize::from(byte)] = i as isize;
        }

        Self { last_occurrence }
    }

    /// Returns the rightmost index of `byte` in the pattern, if it occurs.
    pub fn last_occurrence(&self, byte: u8) -> Option<usize> {
        usize::try_from(self.last_occurrence[usize::from(byte)]).ok()
    }

    /// Gets the shift distance for a mismatch against `byte` at pattern index
    /// `mismatch_index`.
    ///
    /// The shift aligns the rightmost occurrence of `byte` with the mismatch
    /// position. An occurrence at or right of the mismatch would move the
    /// window backward, so the result is clamped to 1.
    pub fn shift(&self, byte: u8, mismatch_index: usize) -> usize {
        let shift = mismatch_index as isize - self.last_occurrence[usize::from(byte)];
        if shift > 0 {
            shift as usize
        } else {
            1
        }
    }
}

/// Represents the good suffix table for the Boyer-Moore algorithm.
///
/// Entry `j + 1` holds the shift for a mismatch at pattern index `j`; entry 0
/// holds the shift after a full match, which is the period of the pattern.
#[derive(Debug, Clone)]
pub struct GoodSuffixTable {
    shift: Vec<usize>,
}

impl GoodSuffixTable {
    /// Creates a new good suffix table for the given pattern.
    pub fn new(pattern: &[u8]) -> Self {
        if pattern.is_empty() {
            return Self { shift: vec![1] };
        }

        let (mut shift, border) = Self::compute_border(pattern);
        Self::fill_from_widest_border(&mut shift, &border);

        Self { shift }
    }

    /// Computes the border positions for every suffix of the pattern.
    ///
    /// `border[i]` is the starting position of the widest border of the suffix
    /// `pattern[i..]`. While walking the borders, every interior recurrence of
    /// a matched suffix that is preceded by a different byte than the suffix
    /// itself records its shift.
    fn compute_border(pattern: &[u8]) -> (Vec<usize>, Vec<usize>) {
        let m = pattern.len();
        let mut shift = vec![0; m + 1];
        let mut border = vec![0; m + 1];

        let mut i = m;
        let mut j = m + 1;
        border[i] = j;

        while i > 0 {
            while j <= m && pattern[i - 1] != pattern[j - 1] {
                if shift[j] == 0 {
                    shift[j] = j - i;
                }
                j = border[j];
            }
            i -= 1;
            j -= 1;
            border[i] = j;
        }

        (shift, border)
    }

    /// Fills every entry left unset by the recurrence phase.
    ///
    /// Those mismatch positions have no interior recurrence of their matched
    /// suffix, so the shift aligns the widest prefix of the pattern that is
    /// also a suffix of the matched portion.
    fn fill_from_widest_border(shift: &mut [usize], border: &[usize]) {
        let m = shift.len() - 1;
        let mut j = border[0];

        for i in 0..=m {
            if shift[i] == 0 {
                shift[i] = j;
            }
            if i == j {
                j = border[j];
            }
        }
    }

    /// Gets the shift distance for a mismatch at pattern index `mismatch_index`.
    ///
    /// # Panics
    ///
    /// Panics if `mismatch_index` is not an index into the pattern.
    pub fn shift(&self, mismatch_index: usize) -> usize {
        debug_assert!(mismatch_index < self.len(), "mismatch index out of range");
        self.shift[mismatch_index + 1]
    }

    /// Gets the shift distance after a full match.
    pub fn match_shift(&self) -> usize {
        self.shift[0]
    }

    /// Number of mismatch positions covered by the table.
    pub fn len(&self) -> usize {
        self.shift.len() - 1
    }

    /// Returns `true` if the table was built for an empty pattern.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
