//! bmsearch library
//!
//! Boyer-Moore substring search over in-memory byte buffers, with pluggable
//! alternative strategies and atomically replaceable pattern collections.
//! The library is used by the `bmsearch` binary but can also be used as a
//! dependency by other projects.
//!
//! # Architecture
//!
//! - [`search::boyer_moore`] builds the bad character and good suffix tables
//!   and scans a text for one pattern.
//! - [`search`] defines the [`search::SearchAlgorithm`] trait and the lazy
//!   iterators that enumerate every non-overlapping match.
//! - [`search::pattern_set`] compiles pattern collections once and shares them
//!   between readers as immutable snapshots.
//! - [`config`] and [`error`] carry the configuration and error types used by
//!   the command line driver.
//!
//! ```
//! let offsets: Vec<usize> = bmsearch_lib::search::find_all("aaaaaa", "aa").collect();
//! assert_eq!(offsets, vec![0, 2, 4]);
//! ```

pub mod config;
pub mod error;
pub mod search;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use search::{find_all, find_all_patterns, SearchAlgorithm};

/// Version information for bmsearch.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
