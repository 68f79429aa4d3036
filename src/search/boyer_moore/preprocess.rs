// Copyright (c) 2025 bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Pattern preprocessing for the Boyer-Moore algorithm.
//!
//! This module contains functions for preprocessing the pattern before searching,
//! which is a key part of the Boyer-Moore algorithm's efficiency. The preprocessing
//! step analyzes the pattern to generate lookup tables that enable fast skipping
//! during the search phase.

use super::error::{BoyerMooreError, Result};
use super::tables::{BadCharTable, GoodSuffixTable};

/// Default maximum pattern length to prevent excessive memory usage
pub const DEFAULT_MAX_PATTERN_LENGTH: usize = 1024 * 32; // 32KiB

/// Result of the preprocessing step containing all necessary lookup tables.
#[derive(Debug, Clone)]
pub struct PreprocessedPattern {
    /// The pattern being searched for
    pub pattern: Vec<u8>,

    /// Bad character rule table
    pub bad_char_table: BadCharTable,

    /// Good suffix rule table
    pub good_suffix_table: GoodSuffixTable,
}

impl PreprocessedPattern {
    /// Preprocesses a pattern for use in the Boyer-Moore algorithm.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The pattern to preprocess.
    /// * `max_len` - The longest pattern accepted, in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or exceeds `max_len`.
    pub fn new(pattern: &[u8], max_len: usize) -> Result<Self> {
        if pattern.is_empty() {
            return Err(BoyerMooreError::EmptyPattern);
        }

        if pattern.len() > max_len {
            return Err(BoyerMooreError::PatternTooLarge {
                len: pattern.len(),
                max: max_len,
            });
        }

        let bad_char_table = BadCharTable::new(pattern);
        let good_suffix_table = GoodSuffixTable::new(pattern);

        tracing::debug!(
            pattern_len = pattern.len(),
            period = good_suffix_table.match_shift(),
            "Built Boyer-Moore tables"
        );

        Ok(Self {
            pattern: pattern.to_vec(),
            bad_char_table,
            good_suffix_table,
        })
    }

    /// The length of the pattern in bytes.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Always `false`; empty patterns are rejected during preprocessing.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}
