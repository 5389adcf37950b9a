//! Wordle Pattern Counter
//!
//! For a guess word, enumerates every feedback pattern and counts how many
//! candidate words remain consistent with each one, handling repeated letters
//! the way Wordle actually scores them.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_patterns::core::{Word, generate_patterns};
//! use wordle_patterns::counting::count_all;
//!
//! let guess = Word::new("weary").unwrap();
//! let candidates = vec![Word::new("early").unwrap(), Word::new("glass").unwrap()];
//!
//! let counts = count_all(&guess, &generate_patterns(5), &candidates).unwrap();
//! let total: usize = counts.iter().map(|c| c.count).sum();
//! assert_eq!(total, candidates.len());
//! ```

// Core domain types
pub mod core;

// Per-pattern counting and statistics
pub mod counting;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
