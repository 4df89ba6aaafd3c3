//! Solve command
//!
//! Answers a single letters query against a built dictionary.

use crate::core::{LetterCounts, LettersError};
use crate::dictionary::{Dictionary, QueryStats};
use std::time::{Duration, Instant};

/// Configuration for solving one set of letters
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub letters: String,
    /// Required number of letters; `None` accepts any amount
    pub expected_len: Option<usize>,
    /// Stop after this many words
    pub limit: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(letters: String) -> Self {
        Self {
            letters,
            expected_len: None,
            limit: None,
        }
    }

    #[must_use]
    pub const fn with_expected_len(mut self, expected_len: Option<usize>) -> Self {
        self.expected_len = expected_len;
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// Words found for one query
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub letters: LetterCounts,
    /// Matches in dictionary order, longest first
    pub words: Vec<String>,
    pub stats: QueryStats,
    pub duration: Duration,
}

impl SolveResult {
    /// Length of the longest word found
    #[must_use]
    pub fn best_length(&self) -> Option<usize> {
        self.words.first().map(String::len)
    }
}

/// Run a query and collect its matches
///
/// # Errors
/// Returns `LettersError` if the letters are not all alphabetic or their number
/// differs from `expected_len`.
///
/// # Examples
/// ```
/// use countdown_solver::commands::{SolveConfig, solve_letters};
/// use countdown_solver::dictionary::Dictionary;
///
/// let dictionary = Dictionary::from_words(["CAT", "CATS", "AT", "TA"]).unwrap();
/// let result = solve_letters(&SolveConfig::new("stac".to_string()), &dictionary).unwrap();
/// assert_eq!(result.words, ["CATS", "CAT", "AT", "TA"]);
/// ```
pub fn solve_letters(
    config: &SolveConfig,
    dictionary: &Dictionary,
) -> Result<SolveResult, LettersError> {
    let letters = LetterCounts::parse_query(&config.letters, config.expected_len)?;

    let start = Instant::now();
    let mut matches = dictionary.query(&letters);
    let words: Vec<String> = matches
        .by_ref()
        .take(config.limit.unwrap_or(usize::MAX))
        .map(|entry| entry.word().to_string())
        .collect();
    let duration = start.elapsed();

    Ok(SolveResult {
        letters,
        words,
        stats: matches.stats(),
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{MAX_WORD_LENGTH, WORDS, words_from_slice};

    fn embedded() -> Dictionary {
        Dictionary::from_words(words_from_slice(WORDS, MAX_WORD_LENGTH)).unwrap()
    }

    #[test]
    fn solve_finds_longest_first() {
        let dictionary = embedded();
        let config = SolveConfig::new("strangers".to_string()).with_expected_len(Some(9));
        let result = solve_letters(&config, &dictionary).unwrap();

        assert_eq!(result.best_length(), Some(9));
        assert_eq!(result.words[0], "STRANGERS");
        assert!(result.words.iter().any(|w| w == "GARNETS"));
        assert!(result.words.iter().any(|w| w == "RANGE"));
        assert_eq!(result.stats.matched, result.words.len());
    }

    #[test]
    fn solve_respects_limit() {
        let dictionary = embedded();
        let config = SolveConfig::new("strangers".to_string()).with_limit(Some(3));
        let result = solve_letters(&config, &dictionary).unwrap();
        assert_eq!(result.words.len(), 3);
        assert_eq!(result.words[0], "STRANGERS");
    }

    #[test]
    fn solve_rejects_bad_letters() {
        let dictionary = embedded();
        let config = SolveConfig::new("abc".to_string()).with_expected_len(Some(9));
        assert!(matches!(
            solve_letters(&config, &dictionary),
            Err(LettersError::WrongLength { expected: 9, got: 3 })
        ));

        let config = SolveConfig::new("abc!".to_string());
        assert!(solve_letters(&config, &dictionary).is_err());
    }

    #[test]
    fn solve_with_no_matches() {
        let dictionary = embedded();
        let result = solve_letters(&SolveConfig::new("qqq".to_string()), &dictionary).unwrap();
        assert!(result.words.is_empty());
        assert_eq!(result.best_length(), None);
    }
}
