// Copyright (c) 2025 bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Boyer-Moore Pattern Matcher.

/// Error types for Boyer-Moore Pattern Matcher construction
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum BoyerMooreError {
    /// Empty pattern provided
    #[error("Pattern cannot be empty")]
    EmptyPattern,

    /// Pattern is longer than the configured maximum
    #[error("Pattern length {len} exceeds maximum allowed length {max}")]
    PatternTooLarge {
        /// Length of the rejected pattern in bytes
        len: usize,
        /// Configured maximum pattern length in bytes
        max: usize,
    },
}

/// Result type for Boyer-Moore Pattern Matcher operations
pub type Result<T> = std::result::Result<T, BoyerMooreError>;
