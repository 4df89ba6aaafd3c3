//! Word list loading utilities
//!
//! Turns raw dictionary lines into normalized uppercase words the dictionary
//! builder can trust.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Longest word the letters game can produce
pub const MAX_WORD_LENGTH: usize = 9;

/// Longest word any dictionary can hold
///
/// Letter counts are stored as `u8`, so no word may repeat a letter more often.
pub const LONGEST_SUPPORTED_WORD: usize = u8::MAX as usize;

/// Dictionary file read when no other source is configured
pub const DEFAULT_DICTIONARY_FILE: &str = "dictionary.txt";

/// Error type for lines that cannot become dictionary words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Empty line")]
    Empty,
    #[error("Word is longer than {max} letters, got {len}")]
    TooLong { len: usize, max: usize },
    #[error("Word contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// Error type for word list sources
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open word list {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read line {line} of word list")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Accepted words plus a tally of rejected lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Normalized words in input order
    pub words: Vec<String>,
    pub blank: usize,
    pub too_long: usize,
    pub invalid: usize,
}

impl LoadReport {
    /// Total number of lines that did not produce a word
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.blank + self.too_long + self.invalid
    }

    fn record(&mut self, result: Result<String, WordError>) {
        match result {
            Ok(word) => self.words.push(word),
            Err(WordError::Empty) => self.blank += 1,
            Err(WordError::TooLong { .. }) => self.too_long += 1,
            Err(WordError::InvalidCharacter(_)) => self.invalid += 1,
        }
    }
}

/// Normalize one raw dictionary line
///
/// Strips line terminators and surrounding whitespace and uppercases ASCII letters.
/// `max_len` is capped at [`LONGEST_SUPPORTED_WORD`].
///
/// # Errors
/// Returns `WordError` if the line is blank, longer than `max_len` letters, or
/// contains anything other than ASCII letters.
///
/// # Examples
/// ```
/// use countdown_solver::wordlists::loader::normalize_word;
///
/// assert_eq!(normalize_word("Rattle\r\n", 9).unwrap(), "RATTLE");
/// assert!(normalize_word("cat's", 9).is_err());
/// assert!(normalize_word("countdowns", 9).is_err());
/// ```
pub fn normalize_word(raw: &str, max_len: usize) -> Result<String, WordError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WordError::Empty);
    }

    if let Some(bad) = trimmed.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(WordError::InvalidCharacter(bad));
    }

    let max = max_len.min(LONGEST_SUPPORTED_WORD);
    if trimmed.len() > max {
        return Err(WordError::TooLong {
            len: trimmed.len(),
            max,
        });
    }

    Ok(trimmed.to_ascii_uppercase())
}

/// Load words from any reader, one word per line
///
/// # Errors
/// Returns `LoadError::Read` if the underlying reader fails or yields invalid UTF-8.
pub fn load_from_reader<R: Read>(reader: R, max_len: usize) -> Result<LoadReport, LoadError> {
    let mut report = LoadReport::default();

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|source| LoadError::Read {
            line: index + 1,
            source,
        })?;
        report.record(normalize_word(&line, max_len));
    }

    if report.invalid > 0 {
        warn!(lines = report.invalid, "skipped lines with non-letter characters");
    }
    info!(
        words = report.words.len(),
        too_long = report.too_long,
        skipped = report.skipped(),
        "loaded word list"
    );

    Ok(report)
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use countdown_solver::wordlists::loader::{MAX_WORD_LENGTH, load_from_file};
///
/// let report = load_from_file("dictionary.txt", MAX_WORD_LENGTH).unwrap();
/// println!("Loaded {} words", report.words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, max_len: usize) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file, max_len)
}

/// Normalize an embedded string slice, dropping unusable entries
///
/// # Examples
/// ```
/// use countdown_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "cats", "cat's"], 9);
/// assert_eq!(words, ["CAT", "CATS"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], max_len: usize) -> Vec<String> {
    slice
        .iter()
        .filter_map(|&s| normalize_word(s, max_len).ok())
        .collect()
}
