// Copyright (c) 2025 bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Brute force search, checking every alignment left to right.

use super::SearchAlgorithm;

/// Brute force search strategy.
///
/// O(n * m) in the worst case. Useful as a reference when checking the
/// other strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveSearch;

impl SearchAlgorithm for NaiveSearch {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        if pattern.is_empty() || text.len() < pattern.len() {
            return None;
        }

        text.windows(pattern.len()).position(|window| window == pattern)
    }
}
