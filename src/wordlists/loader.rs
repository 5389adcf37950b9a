//! Word list loading utilities
//!
//! Word lists are plain text, one word per line. Lines are trimmed, blank
//! lines ignored, and entries that are not valid words of the expected length
//! are skipped with a warning.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} contains no valid words", .path.display())]
    Empty { path: PathBuf },
}

/// Parse words from text, one per line
///
/// Returns the valid words in input order and the number of skipped lines.
///
/// # Examples
/// ```
/// use wordle_patterns::wordlists::loader::parse_words;
///
/// let (words, skipped) = parse_words("weary\n  Glass \n\nsh0rt\n", 5);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "glass");
/// assert_eq!(skipped, 1);
/// ```
#[must_use]
pub fn parse_words(content: &str, length: usize) -> (Vec<Word>, usize) {
    let mut skipped = 0;

    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::with_length(line, length) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!(entry = line, error = %e, "skipping invalid word list entry");
                skipped += 1;
                None
            }
        })
        .collect();

    (words, skipped)
}

/// Load words of `length` letters from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Empty`
/// if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_patterns::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/possible_words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (words, skipped) = parse_words(&content, length);
    debug!(
        path = %path.display(),
        loaded = words.len(),
        skipped,
        "loaded word list"
    );

    if words.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;

    #[test]
    fn parse_words_trims_and_skips() {
        let (words, skipped) = parse_words("weary\r\n glass\n\n toolong\nab1de\nRAYON\n", WORD_LENGTH);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["weary", "glass", "rayon"]);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn parse_words_empty_input() {
        let (words, skipped) = parse_words("", WORD_LENGTH);
        assert!(words.is_empty());
        assert_eq!(skipped, 0);
    }

    #[test]
    fn parse_words_other_length() {
        let (words, skipped) = parse_words("cat\ndog\nhorse\n", 3);
        assert_eq!(words.len(), 2);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here.txt", WORD_LENGTH);
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("wordle_patterns_{}.txt", std::process::id()));
        fs::write(&path, "weary\nglass\n").unwrap();

        let words = load_from_file(&path, WORD_LENGTH).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "weary");
    }

    #[test]
    fn load_file_without_valid_words_is_empty_error() {
        let path =
            std::env::temp_dir().join(format!("wordle_patterns_empty_{}.txt", std::process::id()));
        fs::write(&path, "\n\nnope\n").unwrap();

        let result = load_from_file(&path, WORD_LENGTH);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(LoadError::Empty { .. })));
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["weary", "n0pe", "glass"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "glass");
    }
}
