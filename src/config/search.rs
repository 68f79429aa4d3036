//! Search configuration module.
//!
//! This module defines which search strategy the CLI uses and the limits and
//! match policy applied to every pattern.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use crate::search::boyer_moore::{MatcherOptions, DEFAULT_MAX_PATTERN_LENGTH};
use crate::search::{BoyerMoore, KnuthMorrisPratt, NaiveSearch, SearchAlgorithm};
use serde::{Deserialize, Serialize};

/// Search strategy selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// Boyer-Moore with bad character and good suffix rules
    #[default]
    BoyerMoore,
    /// Knuth-Morris-Pratt
    Kmp,
    /// Brute force
    Naive,
}

impl AlgorithmKind {
    /// Resolves the selection to a search strategy.
    pub fn algorithm(self) -> &'static dyn SearchAlgorithm {
        match self {
            Self::BoyerMoore => &BoyerMoore,
            Self::Kmp => &KnuthMorrisPratt,
            Self::Naive => &NaiveSearch,
        }
    }
}

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Search strategy
    pub algorithm: AlgorithmKind,

    /// Whether a match may start inside the previous match
    pub allow_overlapping: bool,

    /// Longest pattern accepted, in bytes
    pub max_pattern_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmKind::default(),
            allow_overlapping: false,
            max_pattern_len: DEFAULT_MAX_PATTERN_LENGTH,
        }
    }
}

impl SearchConfig {
    /// Matcher options equivalent to this configuration.
    pub fn matcher_options(&self) -> MatcherOptions {
        MatcherOptions::new()
            .allow_overlapping(self.allow_overlapping)
            .max_pattern_len(self.max_pattern_len)
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_pattern_len == 0 {
            return Err(ConfigError::ValidationError(
                "max_pattern_len must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
