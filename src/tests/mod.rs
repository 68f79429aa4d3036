//! Test modules for bmsearch.
//!
//! This module contains the crate-level testing infrastructure:
//! - Configuration loading and validation tests
//! - Error reporting tests
//! - Cross-strategy property tests for the search driver
//! - Test fixtures and proptest strategies shared between them

pub mod error_tests;
pub mod search_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{byte_text_strategy, create_test_dir, reference_positions, TestFixture};
