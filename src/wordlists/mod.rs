//! Word lists for the letters game
//!
//! Loads dictionary files and provides an embedded fallback list compiled into
//! the binary.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{
    DEFAULT_DICTIONARY_FILE, LONGEST_SUPPORTED_WORD, LoadError, LoadReport, MAX_WORD_LENGTH,
    WordError, load_from_file, load_from_reader, normalize_word, words_from_slice,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_loadable() {
        for &word in WORDS {
            assert!(
                normalize_word(word, MAX_WORD_LENGTH).is_ok(),
                "Word '{word}' would be rejected by the loader"
            );
        }
        assert_eq!(words_from_slice(WORDS, MAX_WORD_LENGTH).len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_have_no_duplicates() {
        let unique: rustc_hash::FxHashSet<&str> = WORDS.iter().copied().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
