// Copyright (c) 2025 bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazy iterators that enumerate every match of one or more patterns.

use std::fmt;
use std::iter::FusedIterator;

use super::SearchAlgorithm;

/// Iterator over the occurrences of a single pattern.
///
/// Each call to `next` runs the search algorithm over the text that follows
/// the previous match and translates the result back into an offset into the
/// whole text. Offsets are strictly increasing; without overlapping enabled,
/// consecutive offsets differ by at least the pattern length.
pub struct Matches<'a, A: SearchAlgorithm + ?Sized> {
    algorithm: &'a A,
    text: &'a [u8],
    pattern: &'a [u8],
    cursor: usize,
    allow_overlapping: bool,
    exhausted: bool,
}

impl<'a, A: SearchAlgorithm + ?Sized> Matches<'a, A> {
    pub(crate) fn new(algorithm: &'a A, text: &'a [u8], pattern: &'a [u8]) -> Self {
        Self {
            algorithm,
            text,
            pattern,
            cursor: 0,
            allow_overlapping: false,
            exhausted: text.is_empty() || pattern.is_empty(),
        }
    }

    /// Sets whether a match may start inside the previous one.
    pub fn allow_overlapping(mut self, value: bool) -> Self {
        self.allow_overlapping = value;
        self
    }

    /// The pattern being searched for.
    pub fn pattern(&self) -> &'a [u8] {
        self.pattern
    }
}

impl<'a, A: SearchAlgorithm + ?Sized> Iterator for Matches<'a, A> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let remaining = match self.text.get(self.cursor..) {
            Some(remaining) if remaining.len() >= self.pattern.len() => remaining,
            _ => {
                self.exhausted = true;
                return None;
            }
        };

        match self.algorithm.find(remaining, self.pattern) {
            Some(relative) => {
                debug_assert!(
                    relative + self.pattern.len() <= remaining.len(),
                    "{} reported a match past the end of the text",
                    std::any::type_name::<A>()
                );
                let offset = self.cursor + relative;
                let step = if self.allow_overlapping {
                    1
                } else {
                    self.pattern.len()
                };
                self.cursor = offset + step;

                tracing::trace!(offset, pattern_len = self.pattern.len(), "Match found");
                Some(offset)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}

impl<'a, A: SearchAlgorithm + ?Sized> FusedIterator for Matches<'a, A> {}

impl<'a, A: SearchAlgorithm + ?Sized> fmt::Debug for Matches<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matches")
            .field("text_len", &self.text.len())
            .field("pattern_len", &self.pattern.len())
            .field("cursor", &self.cursor)
            .field("allow_overlapping", &self.allow_overlapping)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

/// Iterator over `(pattern, offset)` pairs for an ordered list of patterns.
///
/// Patterns are searched one after another; all matches of a pattern are
/// yielded before the first match of the next one.
pub struct PatternMatches<'a, P, A: SearchAlgorithm + ?Sized> {
    algorithm: &'a A,
    text: &'a [u8],
    patterns: std::slice::Iter<'a, P>,
    current: Option<(&'a P, Matches<'a, A>)>,
    allow_overlapping: bool,
}

impl<'a, P, A> PatternMatches<'a, P, A>
where
    P: AsRef<[u8]>,
    A: SearchAlgorithm + ?Sized,
{
    pub(crate) fn new(algorithm: &'a A, text: &'a [u8], patterns: &'a [P]) -> Self {
        Self {
            algorithm,
            text,
            patterns: patterns.iter(),
            current: None,
            allow_overlapping: false,
        }
    }

    /// Sets whether a match may start inside the previous match of the same pattern.
    pub fn allow_overlapping(mut self, value: bool) -> Self {
        self.allow_overlapping = value;
        self
    }
}

impl<'a, P, A> Iterator for PatternMatches<'a, P, A>
where
    P: AsRef<[u8]>,
    A: SearchAlgorithm + ?Sized,
{
    type Item = (&'a P, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((pattern, matches)) = &mut self.current {
                if let Some(offset) = matches.next() {
                    return Some((*pattern, offset));
                }
            }

            let pattern = self.patterns.next()?;
            let matches = Matches::new(self.algorithm, self.text, pattern.as_ref())
                .allow_overlapping(self.allow_overlapping);
            self.current = Some((pattern, matches));
        }
    }
}

impl<'a, P, A> FusedIterator for PatternMatches<'a, P, A>
where
    P: AsRef<[u8]>,
    A: SearchAlgorithm + ?Sized,
{
}

impl<'a, P, A: SearchAlgorithm + ?Sized> fmt::Debug for PatternMatches<'a, P, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternMatches")
            .field("text_len", &self.text.len())
            .field("patterns_left", &self.patterns.len())
            .field("current", &self.current.as_ref().map(|(_, matches)| matches))
            .finish_non_exhaustive()
    }
}
