// Copyright (c) 2025 bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Knuth-Morris-Pratt search.

use super::SearchAlgorithm;

/// Knuth-Morris-Pratt search strategy.
///
/// Scans the text left to right without ever moving backward, using the
/// longest proper prefix that is also a suffix of each pattern prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnuthMorrisPratt;

impl KnuthMorrisPratt {
    /// Builds the failure table: `lps[i]` is the length of the longest proper
    /// prefix of `pattern[..=i]` that is also its suffix.
    fn longest_prefix_suffix(pattern: &[u8]) -> Vec<usize> {
        let mut lps = vec![0; pattern.len()];
        let mut len = 0;
        let mut i = 1;

        while i < pattern.len() {
            if pattern[i] == pattern[len] {
                len += 1;
                lps[i] = len;
                i += 1;
            } else if len != 0 {
                len = lps[len - 1];
            } else {
                i += 1;
            }
        }

        lps
    }
}

impl SearchAlgorithm for KnuthMorrisPratt {
    fn name(&self) -> &'static str {
        "knuth-morris-pratt"
    }

    fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        let m = pattern.len();
        if m == 0 || text.len() < m {
            return None;
        }

        let lps = Self::longest_prefix_suffix(pattern);
        let mut i = 0;
        let mut j = 0;

        while i < text.len() {
            if text[i] == pattern[j] {
                i += 1;
                j += 1;
                if j == m {
                    return Some(i - m);
                }
            } else if j != 0 {
                j = lps[j - 1];
            } else {
                i += 1;
            }
        }

        None
    }
}
