//! Countdown Solver
//!
//! Finds every dictionary word that can be spelled from a selection of letters, using a
//! frequency-ordered dictionary and a per-letter jump table to skip hopeless entries.
//!
//! # Quick Start
//!
//! ```rust
//! use countdown_solver::core::LetterCounts;
//! use countdown_solver::dictionary::Dictionary;
//!
//! // Build once
//! let dictionary = Dictionary::from_words(["STRANGE", "RANGE", "ANGER", "GNAT"]).unwrap();
//!
//! // Query many times
//! let letters = LetterCounts::parse_query("NRGEAXSTB", Some(9)).unwrap();
//! let words: Vec<&str> = dictionary.query(&letters).map(|e| e.word()).collect();
//! assert_eq!(words, ["STRANGE", "RANGE", "ANGER", "GNAT"]);
//! ```

// Core domain types
pub mod core;

// Sorted dictionary, jump table and query engine
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
