//! Core domain types for the letters game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and independent of how words are loaded.

mod entry;
mod letters;

pub use entry::{Entry, Requirement};
pub use letters::{ALPHABET_LEN, FREQUENCY_ORDER, LetterCounts, LettersError, letter_index};
