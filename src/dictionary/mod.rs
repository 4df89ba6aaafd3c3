//! Frozen lookup dictionary
//!
//! Words go into a [`DictionaryBuilder`]; [`DictionaryBuilder::build`] prepares the
//! entries, sorts them into canonical order and fills in the jump table, returning
//! an immutable [`Dictionary`] that any number of readers may query concurrently.

mod jump;
mod query;

pub use query::{Matches, QueryStats};

use crate::core::{Entry, LetterCounts};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::TryReserveError;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Error type for dictionary construction
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to allocate storage for {entries} dictionary entries")]
    Allocation {
        entries: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Collects words before the dictionary is frozen
#[derive(Debug, Clone, Default)]
pub struct DictionaryBuilder {
    words: Vec<String>,
}

impl DictionaryBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity),
        }
    }

    /// Add a normalized uppercase word
    ///
    /// Words are not re-validated here; see [`crate::wordlists::normalize_word`].
    pub fn push(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Prepare, sort and index all words
    ///
    /// Entries that compare equal (anagrams, duplicates) keep their insertion order.
    ///
    /// # Errors
    /// Returns `BuildError::Allocation` if the entry arena cannot be allocated.
    /// No partially built dictionary is ever returned.
    pub fn build(self) -> Result<Dictionary, BuildError> {
        let total = self.words.len();
        let start = Instant::now();

        let mut entries: Vec<Entry> = Vec::new();
        entries
            .try_reserve_exact(total)
            .map_err(|source| BuildError::Allocation {
                entries: total,
                source,
            })?;

        entries.par_extend(self.words.into_par_iter().map(Entry::new));
        debug!(entries = total, elapsed = ?start.elapsed(), "prepared entries");

        // Stable sort keeps insertion order among equal entries
        entries.par_sort_by(Entry::canonical_cmp);
        debug!(elapsed = ?start.elapsed(), "sorted entries");

        let jumps = jump::build_jumps(&entries);
        for (entry, targets) in entries.iter_mut().zip(jumps) {
            entry.set_jumps(targets);
        }

        info!(entries = total, elapsed = ?start.elapsed(), "built dictionary");

        Ok(Dictionary {
            entries: entries.into_boxed_slice(),
        })
    }
}

impl<S: Into<String>> Extend<S> for DictionaryBuilder {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for DictionaryBuilder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}

/// Sorted, immutable word entries with their jump table
///
/// # Examples
/// ```
/// use countdown_solver::core::LetterCounts;
/// use countdown_solver::dictionary::Dictionary;
///
/// let dictionary = Dictionary::from_words(["CAT", "CATS", "AT", "TA"]).unwrap();
/// let letters = LetterCounts::parse_query("AT", None).unwrap();
///
/// let words: Vec<&str> = dictionary.query(&letters).map(|e| e.word()).collect();
/// assert_eq!(words, ["AT", "TA"]);
/// ```
#[derive(Debug)]
pub struct Dictionary {
    entries: Box<[Entry]>,
}

impl Dictionary {
    /// Build a dictionary straight from normalized words
    ///
    /// # Errors
    /// Returns `BuildError` if the entry arena cannot be allocated.
    pub fn from_words<I, S>(words: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        words.into_iter().collect::<DictionaryBuilder>().build()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in canonical order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Where a traversal continues when requirement `requirement` of entry `index`
    /// fails; `None` means no later entry can match
    #[must_use]
    pub fn jump_target(&self, index: usize, requirement: usize) -> Option<usize> {
        self.entries
            .get(index)?
            .jumps()
            .get(requirement)
            .copied()
            .filter(|&target| target < self.entries.len())
    }

    /// Every entry that can be spelled from `available`, in dictionary order
    #[must_use]
    pub fn query(&self, available: &LetterCounts) -> Matches<'_> {
        Matches::new(self, *available)
    }

    /// Linear scan with the same results as [`Dictionary::query`]
    pub fn brute_force<'d>(
        &'d self,
        available: &'d LetterCounts,
    ) -> impl Iterator<Item = &'d Entry> + 'd {
        self.entries
            .iter()
            .filter(move |entry| available.covers(entry.counts()))
    }

    /// Number of entries per word length, longest first
    #[must_use]
    pub fn length_histogram(&self) -> Vec<(usize, usize)> {
        let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
        for entry in self.entries.iter() {
            *counts.entry(entry.len()).or_insert(0) += 1;
        }

        let mut histogram: Vec<(usize, usize)> = counts.into_iter().collect();
        histogram.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_sorts_canonically() {
        let dictionary = Dictionary::from_words(["AT", "CAT", "TA", "CATS"]).unwrap();
        let words: Vec<&str> = dictionary.entries().iter().map(Entry::word).collect();
        assert_eq!(words, vec!["CATS", "CAT", "AT", "TA"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let forward = Dictionary::from_words(["TA", "AT"]).unwrap();
        let backward = Dictionary::from_words(["AT", "TA"]).unwrap();
        assert_eq!(forward.entries()[0].word(), "TA");
        assert_eq!(backward.entries()[0].word(), "AT");
    }

    #[test]
    fn every_entry_gets_jumps() {
        let dictionary = Dictionary::from_words(["STRANGERS", "GARNETS", "RANGE", "ERA"]).unwrap();
        for entry in dictionary.entries() {
            assert_eq!(entry.jumps().len(), entry.requirements().len());
        }
    }

    #[test]
    fn single_entry_has_no_jump_targets() {
        let dictionary = Dictionary::from_words(["QUIZ"]).unwrap();
        assert_eq!(dictionary.len(), 1);
        for k in 0..dictionary.entries()[0].requirements().len() {
            assert_eq!(dictionary.jump_target(0, k), None);
        }
        assert_eq!(dictionary.entries()[0].jumps(), &[1, 1, 1, 1]);
    }

    #[test]
    fn jump_target_out_of_range() {
        let dictionary = Dictionary::from_words(["CAT", "AT"]).unwrap();
        assert_eq!(dictionary.jump_target(5, 0), None);
        assert_eq!(dictionary.jump_target(0, 9), None);
        // CAT requirements: T, A, C; AT lacks C
        assert_eq!(dictionary.jump_target(0, 2), Some(1));
    }

    #[test]
    fn empty_builder() {
        let builder = DictionaryBuilder::new();
        assert!(builder.is_empty());
        let dictionary = builder.build().unwrap();
        assert!(dictionary.is_empty());
        assert!(dictionary.length_histogram().is_empty());
    }

    #[test]
    fn builder_collects_words() {
        let mut builder = DictionaryBuilder::with_capacity(4);
        builder.push("ONE");
        builder.extend(["TWO", "THREE"]);
        assert_eq!(builder.len(), 3);

        let dictionary = builder.build().unwrap();
        assert_eq!(dictionary.entries()[0].word(), "THREE");
    }

    #[test]
    fn length_histogram_longest_first() {
        let dictionary = Dictionary::from_words(["A", "AT", "TA", "CAT", "I"]).unwrap();
        assert_eq!(dictionary.length_histogram(), vec![(3, 1), (2, 2), (1, 2)]);
    }

    #[test]
    fn dictionary_is_shareable() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Dictionary>();
    }
}
