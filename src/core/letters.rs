//! Letter alphabet and multiset counts
//!
//! `LetterCounts` is used both for dictionary words and for the letters a player
//! has available, so "can this word be spelled?" is a per-letter comparison.

use std::fmt;
use thiserror::Error;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Letters ordered by typical frequency in English text, most frequent first
///
/// Both the dictionary ordering and each entry's requirement list follow this rank.
pub const FREQUENCY_ORDER: [u8; ALPHABET_LEN] = *b"ETAOINSRHDLUCMFYWGPBVKXQJZ";

/// Zero-based index of an uppercase ASCII letter (`A` = 0)
///
/// Returns `None` for anything outside `A..=Z`.
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter - b'A') as usize)
    } else {
        None
    }
}

/// Error type for query letters that cannot be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LettersError {
    #[error("Expected exactly {expected} letters, got {got}")]
    WrongLength { expected: usize, got: usize },
    #[error("'{0}' is not a letter")]
    InvalidCharacter(char),
}

/// Occurrence count of each of the 26 letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts([u8; ALPHABET_LEN]);

impl LetterCounts {
    /// All-zero multiset
    pub const EMPTY: Self = Self([0; ALPHABET_LEN]);

    /// Count the letters of an already-normalized uppercase word
    ///
    /// Bytes outside `A..=Z` are ignored; the loader never lets them through.
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = [0u8; ALPHABET_LEN];
        for index in word.bytes().filter_map(letter_index) {
            counts[index] = counts[index].saturating_add(1);
        }
        Self(counts)
    }

    /// Parse the letters a player has available
    ///
    /// Case is ignored. When `expected_len` is given, the text must contain exactly
    /// that many letters.
    ///
    /// # Errors
    /// Returns `LettersError` if a character is not an ASCII letter or the
    /// number of letters differs from `expected_len`.
    ///
    /// # Examples
    /// ```
    /// use countdown_solver::core::LetterCounts;
    ///
    /// let letters = LetterCounts::parse_query("stRaNgeRs", Some(9)).unwrap();
    /// assert_eq!(letters.get(b'R'), 2);
    ///
    /// assert!(LetterCounts::parse_query("abc", Some(9)).is_err());
    /// assert!(LetterCounts::parse_query("ab3", None).is_err());
    /// ```
    pub fn parse_query(text: &str, expected_len: Option<usize>) -> Result<Self, LettersError> {
        let mut counts = [0u8; ALPHABET_LEN];
        let mut total = 0;

        for ch in text.chars() {
            let upper = ch.to_ascii_uppercase();
            let index = u8::try_from(upper)
                .ok()
                .and_then(letter_index)
                .ok_or(LettersError::InvalidCharacter(ch))?;
            counts[index] = counts[index].saturating_add(1);
            total += 1;
        }

        if let Some(expected) = expected_len {
            if total != expected {
                return Err(LettersError::WrongLength {
                    expected,
                    got: total,
                });
            }
        }

        Ok(Self(counts))
    }

    /// Build counts directly from a 26-entry table (`A` first)
    #[inline]
    #[must_use]
    pub const fn from_array(counts: [u8; ALPHABET_LEN]) -> Self {
        Self(counts)
    }

    /// Count for an uppercase letter (0 for anything that is not a letter)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> u8 {
        letter_index(letter).map_or(0, |index| self.0[index])
    }

    /// Count by zero-based alphabet index
    #[inline]
    #[must_use]
    pub const fn at(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Total number of letters in the multiset
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| usize::from(c)).sum()
    }

    /// Largest single-letter count
    #[must_use]
    pub fn max_count(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Whether every letter of `other` is available here in sufficient number
    ///
    /// This is the ground-truth match rule the jump table must agree with.
    #[inline]
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(have, need)| have >= need)
    }

    /// Counts in frequency-rank order
    pub fn ranked(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        FREQUENCY_ORDER
            .iter()
            .map(move |&letter| (letter, self.0[(letter - b'A') as usize]))
    }
}

impl fmt::Display for LetterCounts {
    /// Letters in alphabetical order, repeated by count
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, &count) in self.0.iter().enumerate() {
            let letter = char::from(b'A' + index as u8);
            for _ in 0..count {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_order_is_a_permutation() {
        let mut sorted = FREQUENCY_ORDER;
        sorted.sort_unstable();
        assert_eq!(&sorted, b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn letter_index_bounds() {
        assert_eq!(letter_index(b'A'), Some(0));
        assert_eq!(letter_index(b'Z'), Some(25));
        assert_eq!(letter_index(b'a'), None);
        assert_eq!(letter_index(b'@'), None);
    }

    #[test]
    fn from_word_counts_duplicates() {
        let counts = LetterCounts::from_word("BANANA");
        assert_eq!(counts.get(b'A'), 3);
        assert_eq!(counts.get(b'N'), 2);
        assert_eq!(counts.get(b'B'), 1);
        assert_eq!(counts.get(b'Z'), 0);
        assert_eq!(counts.total(), 6);
        assert_eq!(counts.max_count(), 3);
    }

    #[test]
    fn parse_query_normalizes_case() {
        let lower = LetterCounts::parse_query("countdown", Some(9)).unwrap();
        let upper = LetterCounts::parse_query("COUNTDOWN", Some(9)).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.get(b'O'), 2);
        assert_eq!(lower.get(b'N'), 2);
    }

    #[test]
    fn parse_query_wrong_length() {
        assert_eq!(
            LetterCounts::parse_query("abcdefgh", Some(9)),
            Err(LettersError::WrongLength {
                expected: 9,
                got: 8
            })
        );
        assert!(LetterCounts::parse_query("abcdefghij", Some(9)).is_err());
        assert!(LetterCounts::parse_query("abcdefghij", None).is_ok());
    }

    #[test]
    fn parse_query_invalid_characters() {
        assert_eq!(
            LetterCounts::parse_query("abc1", None),
            Err(LettersError::InvalidCharacter('1'))
        );
        assert_eq!(
            LetterCounts::parse_query("ab c", None),
            Err(LettersError::InvalidCharacter(' '))
        );
        assert!(LetterCounts::parse_query("abcé", None).is_err());
    }

    #[test]
    fn covers_is_per_letter() {
        let available = LetterCounts::parse_query("CATS", None).unwrap();
        assert!(available.covers(&LetterCounts::from_word("CAT")));
        assert!(available.covers(&LetterCounts::from_word("ACTS")));
        assert!(!available.covers(&LetterCounts::from_word("TACT")));
        assert!(available.covers(&LetterCounts::EMPTY));
        assert!(!LetterCounts::EMPTY.covers(&available));
    }

    #[test]
    fn ranked_follows_frequency_order() {
        let counts = LetterCounts::from_word("ZEE");
        let ranked: Vec<(u8, u8)> = counts.ranked().filter(|&(_, c)| c > 0).collect();
        assert_eq!(ranked, vec![(b'E', 2), (b'Z', 1)]);
    }

    #[test]
    fn display_is_alphabetical() {
        let counts = LetterCounts::from_word("TEAS");
        assert_eq!(counts.to_string(), "AEST");
    }
}
