//! Wordle word representation
//!
//! A Word stores a lowercase ASCII word along with per-letter occurrence counts,
//! which the matcher consults for repeated-letter handling.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Word length used by the standard game
pub const WORD_LENGTH: usize = 5;

/// A Wordle word with letter occurrence tracking
///
/// Any length is representable (including zero); callers that need the
/// standard game length use [`Word::with_length`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letter_counts: FxHashMap<u8, usize>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string of any length
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the text contains non-ASCII or non-alphabetic
    /// characters.
    ///
    /// # Examples
    /// ```
    /// use wordle_patterns::core::Word;
    ///
    /// let word = Word::new("WEARY").unwrap();
    /// assert_eq!(word.text(), "weary");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letter_counts: FxHashMap<u8, usize> = FxHashMap::default();
        for &letter in text.as_bytes() {
            *letter_counts.entry(letter).or_insert(0) += 1;
        }

        Ok(Self {
            text,
            letter_counts,
        })
    }

    /// Create a new Word, requiring exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error
    /// from [`Word::new`].
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes, one per letter
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letter_counts.contains_key(&letter)
    }

    /// Number of times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letter_counts.get(&letter).copied().unwrap_or(0)
    }

    /// Whether any letter occurs more than once
    #[must_use]
    pub fn has_repeated_letters(&self) -> bool {
        self.letter_counts.values().any(|&count| count > 1)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
