// Copyright (c) 2025 bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Immutable pattern collections and a handle for replacing them atomically.
//!
//! A [`PatternSet`] compiles every pattern once and is never mutated after
//! construction. A [`SharedPatternSet`] holds the current set behind an
//! `Arc`; readers take a snapshot and keep it for the whole search while
//! writers publish a complete replacement.
//!
//! ```
//! use bmsearch_lib::search::{PatternSet, SharedPatternSet};
//!
//! let shared = SharedPatternSet::new(PatternSet::new(["cat"]).unwrap());
//! let snapshot = shared.snapshot();
//!
//! shared.replace_patterns(["dog"]).unwrap();
//!
//! // The old snapshot still sees the patterns it was taken with
//! assert_eq!(snapshot.find_all("cat dog").count(), 1);
//! assert_eq!(shared.snapshot().find_all("cat dog").next(), Some((&b"dog"[..], 4)));
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

use super::boyer_moore::{BoyerMooreMatcher, MatcherOptions, Result};

/// An immutable, ordered collection of compiled patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    matchers: Vec<BoyerMooreMatcher>,
    generation: u64,
}

impl PatternSet {
    /// Compiles the given patterns with default matcher options.
    ///
    /// Empty patterns never match and are left out of the set.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is too long.
    pub fn new<I, P>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        Self::with_options(patterns, &MatcherOptions::default())
    }

    /// Compiles the given patterns with custom matcher options.
    ///
    /// Empty patterns never match and are left out of the set.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is longer than
    /// `options.max_pattern_len`.
    pub fn with_options<I, P>(patterns: I, options: &MatcherOptions) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let matchers = patterns
            .into_iter()
            .filter(|pattern| !pattern.as_ref().is_empty())
            .map(|pattern| BoyerMooreMatcher::with_options(pattern, options.clone()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            matchers,
            generation: 0,
        })
    }

    /// Number of patterns in the set.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Returns `true` if the set holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Publication counter assigned by [`SharedPatternSet`]; 0 if never published.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The patterns in insertion order.
    pub fn patterns(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.matchers.iter().map(BoyerMooreMatcher::pattern)
    }

    /// Returns `(pattern, offset)` pairs for every pattern in order.
    ///
    /// Each pattern is searched to exhaustion before the next one starts.
    pub fn find_all<'a, T>(&'a self, text: &'a T) -> impl Iterator<Item = (&'a [u8], usize)> + 'a
    where
        T: AsRef<[u8]> + ?Sized,
    {
        let text = text.as_ref();
        self.matchers
            .iter()
            .flat_map(move |matcher| matcher.find_all(text).map(move |offset| (matcher.pattern(), offset)))
    }
}

/// Shared handle to the current [`PatternSet`].
///
/// Snapshots are never modified in place; [`publish`](Self::publish) swaps in
/// a whole new set, so a reader observes either the old set or the new one.
#[derive(Debug)]
pub struct SharedPatternSet {
    current: RwLock<Arc<PatternSet>>,
    options: MatcherOptions,
}

impl SharedPatternSet {
    /// Creates a handle publishing `initial` as the first generation.
    pub fn new(initial: PatternSet) -> Self {
        Self::with_options(initial, MatcherOptions::default())
    }

    /// Creates a handle that compiles replacement patterns with `options`.
    pub fn with_options(mut initial: PatternSet, options: MatcherOptions) -> Self {
        initial.generation = 1;
        Self {
            current: RwLock::new(Arc::new(initial)),
            options,
        }
    }

    /// Returns the current set. The snapshot stays valid after later publishes.
    pub fn snapshot(&self) -> Arc<PatternSet> {
        Arc::clone(&*self.current.read())
    }

    /// Replaces the current set and returns the previous one.
    pub fn publish(&self, set: PatternSet) -> Arc<PatternSet> {
        let (_, previous) = self.swap(set);
        previous
    }

    /// Compiles `patterns` and publishes them as the new set.
    ///
    /// Returns the published set.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the current set in place, if any pattern is
    /// too long.
    pub fn replace_patterns<I, P>(&self, patterns: I) -> Result<Arc<PatternSet>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let set = PatternSet::with_options(patterns, &self.options)?;
        let (published, _) = self.swap(set);
        Ok(published)
    }

    /// Installs `set` as the next generation; returns `(published, previous)`.
    fn swap(&self, mut set: PatternSet) -> (Arc<PatternSet>, Arc<PatternSet>) {
        let mut current = self.current.write();
        set.generation = current.generation + 1;

        let published = Arc::new(set);
        let previous = std::mem::replace(&mut *current, Arc::clone(&published));
        drop(current);

        tracing::debug!(
            generation = published.generation,
            patterns = published.len(),
            "Published pattern set"
        );
        (published, previous)
    }
}

impl Default for SharedPatternSet {
    fn default() -> Self {
        Self::new(PatternSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::boyer_moore::BoyerMooreError;

    #[test]
    fn test_pattern_set_find_all_in_order() {
        let set = PatternSet::new(["at", "the"]).unwrap();
        let pairs: Vec<(&[u8], usize)> = set.find_all("the cat sat on the mat").collect();

        assert_eq!(
            pairs,
            vec![
                (&b"at"[..], 5),
                (&b"at"[..], 9),
                (&b"at"[..], 20),
                (&b"the"[..], 0),
                (&b"the"[..], 15),
            ]
        );
    }

    #[test]
    fn test_pattern_set_skips_empty_pattern() {
        let set = PatternSet::new(["", "ok", ""]).unwrap();

        assert_eq!(set.patterns().collect::<Vec<_>>(), vec![&b"ok"[..]]);
        assert_eq!(set.find_all("ok, not ok").collect::<Vec<_>>(), vec![(&b"ok"[..], 0), (&b"ok"[..], 8)]);
        assert!(PatternSet::new([""]).unwrap().is_empty());
    }

    #[test]
    fn test_pattern_set_rejects_long_pattern() {
        let options = MatcherOptions::new().max_pattern_len(2);
        let result = PatternSet::with_options(["ab", "abc"], &options);
        assert_eq!(result.unwrap_err(), BoyerMooreError::PatternTooLarge { len: 3, max: 2 });
    }

    #[test]
    fn test_pattern_set_accessors() {
        let set = PatternSet::new(vec!["a".to_string(), "bc".to_string()]).unwrap();

        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.generation(), 0);
        assert_eq!(set.patterns().collect::<Vec<_>>(), vec![&b"a"[..], &b"bc"[..]]);
        assert!(PatternSet::default().is_empty());
    }

    #[test]
    fn test_shared_publish_keeps_old_snapshot() {
        let shared = SharedPatternSet::new(PatternSet::new(["old"]).unwrap());
        let before = shared.snapshot();
        assert_eq!(before.generation(), 1);

        let previous = shared.publish(PatternSet::new(["new"]).unwrap());
        let after = shared.snapshot();

        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(after.generation(), 2);
        assert_eq!(before.patterns().collect::<Vec<_>>(), vec![&b"old"[..]]);
        assert_eq!(after.patterns().collect::<Vec<_>>(), vec![&b"new"[..]]);
    }

    #[test]
    fn test_shared_replace_failure_keeps_current() {
        let options = MatcherOptions::new().max_pattern_len(4);
        let shared = SharedPatternSet::with_options(PatternSet::new(["keep"]).unwrap(), options);

        assert!(shared.replace_patterns(["fine", "too long"]).is_err());
        assert_eq!(shared.snapshot().generation(), 1);
        assert_eq!(shared.snapshot().patterns().collect::<Vec<_>>(), vec![&b"keep"[..]]);
    }

    #[test]
    fn test_shared_uses_options_for_replacements() {
        let options = MatcherOptions::new().allow_overlapping(true).max_pattern_len(4);
        let shared = SharedPatternSet::with_options(PatternSet::default(), options);

        let set = shared.replace_patterns(["aa"]).unwrap();
        assert_eq!(set.find_all("aaaa").count(), 3);
        assert!(shared.replace_patterns(["aaaaa"]).is_err());
    }
}
