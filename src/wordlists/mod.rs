//! Word lists for pattern counting
//!
//! Two lists are in play: the allowed guesses (a superset) and the possible
//! answers. Both are read once from disk before any counting starts.

pub mod loader;

use crate::core::Word;
use loader::{LoadError, load_from_file};
use std::path::{Path, PathBuf};

/// Default location of the possible answers list
pub const POSSIBLE_WORDS_FILE: &str = "./data/possible_words.txt";

/// Default location of the allowed guesses list
pub const ALLOWED_WORDS_FILE: &str = "./data/allowed_words.txt";

/// Which word list to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSource {
    /// Every word accepted as a guess
    Allowed,
    /// Words that can be the secret answer
    Possible,
}

impl WordSource {
    /// `true` selects the allowed list, `false` the possible answers
    #[must_use]
    pub const fn from_all_flag(all: bool) -> Self {
        if all { Self::Allowed } else { Self::Possible }
    }
}

/// File locations of both word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListPaths {
    pub allowed: PathBuf,
    pub possible: PathBuf,
}

impl Default for WordListPaths {
    fn default() -> Self {
        Self {
            allowed: PathBuf::from(ALLOWED_WORDS_FILE),
            possible: PathBuf::from(POSSIBLE_WORDS_FILE),
        }
    }
}

impl WordListPaths {
    #[must_use]
    pub fn path_for(&self, source: WordSource) -> &Path {
        match source {
            WordSource::Allowed => &self.allowed,
            WordSource::Possible => &self.possible,
        }
    }

    /// Load the list for `source`, keeping words of `length` letters
    ///
    /// # Errors
    /// Returns `LoadError` if the file cannot be read or has no valid words.
    pub fn load(&self, source: WordSource, length: usize) -> Result<Vec<Word>, LoadError> {
        load_from_file(self.path_for(source), length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_flag_selects_source() {
        assert_eq!(WordSource::from_all_flag(true), WordSource::Allowed);
        assert_eq!(WordSource::from_all_flag(false), WordSource::Possible);
    }

    #[test]
    fn default_paths() {
        let paths = WordListPaths::default();
        assert_eq!(
            paths.path_for(WordSource::Allowed),
            Path::new(ALLOWED_WORDS_FILE)
        );
        assert_eq!(
            paths.path_for(WordSource::Possible),
            Path::new(POSSIBLE_WORDS_FILE)
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let paths = WordListPaths {
            allowed: PathBuf::from("missing/allowed.txt"),
            possible: PathBuf::from("missing/possible.txt"),
        };
        let err = paths.load(WordSource::Possible, 5).unwrap_err();
        assert!(err.to_string().contains("missing/possible.txt"));
    }
}
