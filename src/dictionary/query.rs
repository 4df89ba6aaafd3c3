//! Query traversal
//!
//! Walks the sorted entries, following jump targets whenever a requirement fails.

use super::Dictionary;
use crate::core::{Entry, LetterCounts};
use std::iter::FusedIterator;

/// Work done by a single traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Entries examined
    pub visited: usize,
    /// Requirement checks performed
    pub comparisons: usize,
    /// Entries passed over by jumps without being examined
    pub skipped: usize,
    /// Entries emitted
    pub matched: usize,
}

/// Lazily produced matches for one query, in dictionary order
///
/// Each call to [`Dictionary::query`] starts a fresh traversal; dropping the
/// iterator early needs no cleanup.
#[derive(Debug, Clone)]
pub struct Matches<'d> {
    entries: &'d [Entry],
    available: LetterCounts,
    cursor: usize,
    stats: QueryStats,
}

impl<'d> Matches<'d> {
    pub(super) fn new(dictionary: &'d Dictionary, available: LetterCounts) -> Self {
        Self {
            entries: dictionary.entries(),
            available,
            cursor: 0,
            stats: QueryStats::default(),
        }
    }

    /// Counters accumulated so far
    #[must_use]
    pub const fn stats(&self) -> QueryStats {
        self.stats
    }
}

impl<'d> Iterator for Matches<'d> {
    type Item = &'d Entry;

    fn next(&mut self) -> Option<&'d Entry> {
        while let Some(entry) = self.entries.get(self.cursor) {
            self.stats.visited += 1;

            match entry.first_unmet(&self.available, &mut self.stats.comparisons) {
                Some(failed) => {
                    let target = entry.jumps()[failed];
                    debug_assert!(target > self.cursor, "jump targets must point forward");
                    self.stats.skipped += target - self.cursor - 1;
                    self.cursor = target;
                }
                None => {
                    self.cursor += 1;
                    self.stats.matched += 1;
                    return Some(entry);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.entries.len().saturating_sub(self.cursor)))
    }
}

impl FusedIterator for Matches<'_> {}
