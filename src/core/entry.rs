//! Dictionary entry representation
//!
//! An `Entry` holds one word, its letter counts, and the word's distinct letters
//! ordered by frequency rank. Jump targets are attached once the dictionary order
//! is final.

use super::letters::{FREQUENCY_ORDER, LetterCounts};
use std::cmp::Ordering;
use std::fmt;

/// One distinct letter of a word and how many times the word uses it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub letter: u8,
    pub count: u8,
}

/// A dictionary word prepared for lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    word: String,
    counts: LetterCounts,
    requirements: Box<[Requirement]>,
    jumps: Box<[usize]>,
}

impl Entry {
    /// Prepare a normalized uppercase word
    ///
    /// The word is trusted to be non-empty and made only of `A..=Z`.
    ///
    /// # Examples
    /// ```
    /// use countdown_solver::core::Entry;
    ///
    /// let entry = Entry::new("TOAST");
    /// let letters: Vec<u8> = entry.requirements().iter().map(|r| r.letter).collect();
    /// assert_eq!(letters, b"TAOS");
    /// assert_eq!(entry.requirements()[0].count, 2);
    /// ```
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        let counts = LetterCounts::from_word(&word);

        // Walking the rank order yields requirements already sorted by rank
        let requirements: Box<[Requirement]> = counts
            .ranked()
            .filter(|&(_, count)| count > 0)
            .map(|(letter, count)| Requirement { letter, count })
            .collect();

        Self {
            word,
            counts,
            requirements,
            jumps: Box::default(),
        }
    }

    /// The word text
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Whether the word is empty (never true for loader output)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Occurrences of each letter in the word
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &LetterCounts {
        &self.counts
    }

    /// Distinct letters in frequency-rank order
    #[inline]
    #[must_use]
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Jump targets, one per requirement
    ///
    /// Empty until the entry is placed in a built dictionary.
    #[inline]
    #[must_use]
    pub fn jumps(&self) -> &[usize] {
        &self.jumps
    }

    pub(crate) fn set_jumps(&mut self, jumps: Box<[usize]>) {
        debug_assert_eq!(jumps.len(), self.requirements.len());
        self.jumps = jumps;
    }

    /// Index of the first requirement `available` cannot meet
    ///
    /// `comparisons` is incremented once per requirement checked.
    #[inline]
    pub(crate) fn first_unmet(
        &self,
        available: &LetterCounts,
        comparisons: &mut usize,
    ) -> Option<usize> {
        self.requirements.iter().position(|req| {
            *comparisons += 1;
            available.get(req.letter) < req.count
        })
    }

    /// Canonical dictionary order
    ///
    /// Longer words first; equal lengths compare letter by letter in frequency
    /// rank, higher count first. Anagrams compare equal.
    #[must_use]
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        other.len().cmp(&self.len()).then_with(|| {
            FREQUENCY_ORDER
                .iter()
                .map(|&letter| other.counts.get(letter).cmp(&self.counts.get(letter)))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
