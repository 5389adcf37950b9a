//! Wordle feedback patterns: representation, enumeration and scoring
//!
//! A pattern is one [`Feedback`] per letter position. Patterns of length L
//! are enumerated lexicographically over `Absent < Present < Correct`, which
//! makes a pattern's position in the enumeration equal to its base-3 value
//! read with position 0 as the most significant digit.

use super::{Feedback, MatchError, Word};
use std::fmt;
use thiserror::Error;

/// Feedback pattern for a guess
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(Vec<Feedback>);

/// Error type for pattern text that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("invalid feedback symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("pattern is empty")]
    EmptyPattern,
}

impl Pattern {
    #[must_use]
    pub const fn new(feedbacks: Vec<Feedback>) -> Self {
        Self(feedbacks)
    }

    /// A pattern of `length` copies of one symbol
    #[must_use]
    pub fn uniform(length: usize, feedback: Feedback) -> Self {
        Self(vec![feedback; length])
    }

    /// All greens (perfect match)
    #[must_use]
    pub fn perfect(length: usize) -> Self {
        Self::uniform(length, Feedback::Correct)
    }

    #[inline]
    #[must_use]
    pub fn feedbacks(&self) -> &[Feedback] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&fb| fb == Feedback::Correct)
    }

    /// Number of positions holding `feedback`
    #[must_use]
    pub fn count(&self, feedback: Feedback) -> usize {
        self.0.iter().filter(|&&fb| fb == feedback).count()
    }

    /// Position of this pattern in [`generate_patterns`] output
    ///
    /// Saturates at `u64::MAX` for patterns too long to index.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, fb| {
            acc.saturating_mul(3).saturating_add(u64::from(fb.digit()))
        })
    }

    /// Inverse of [`Pattern::index`] for a given length
    ///
    /// Digits above `length` are ignored.
    #[must_use]
    pub fn from_index(mut index: u64, length: usize) -> Self {
        let mut feedbacks = vec![Feedback::Absent; length];
        for slot in feedbacks.iter_mut().rev() {
            *slot = match index % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                _ => Feedback::Correct,
            };
            index /= 3;
        }
        Self(feedbacks)
    }

    /// Calculate the pattern Wordle shows when `guess` is played and `answer`
    /// is the secret
    ///
    /// Greens are marked first and removed from the answer's letter pool;
    /// yellows are then handed out left to right while the pool lasts.
    ///
    /// # Errors
    /// Returns `MatchError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_patterns::core::{Pattern, Word};
    ///
    /// let guess = Word::new("sassy").unwrap();
    /// let answer = Word::new("glass").unwrap();
    /// let pattern = Pattern::score(&guess, &answer).unwrap();
    /// assert_eq!(pattern.to_string(), "🟨🟨⬛🟩⬛");
    /// ```
    pub fn score(guess: &Word, answer: &Word) -> Result<Self, MatchError> {
        if guess.len() != answer.len() {
            return Err(MatchError::LengthMismatch {
                guess: guess.len(),
                candidate: answer.len(),
                pattern: guess.len(),
            });
        }

        let guess_letters = guess.letters();
        let answer_letters = answer.letters();
        let mut result = vec![Feedback::Absent; guess.len()];

        // Letters of the answer not consumed by a green
        let mut available = [0usize; 26];
        for (&g, &a) in guess_letters.iter().zip(answer_letters) {
            if g != a {
                available[usize::from(a - b'a')] += 1;
            }
        }

        for (i, (&g, &a)) in guess_letters.iter().zip(answer_letters).enumerate() {
            if g == a {
                result[i] = Feedback::Correct;
                continue;
            }
            let pool = &mut available[usize::from(g - b'a')];
            if *pool > 0 {
                result[i] = Feedback::Present;
                *pool -= 1;
            }
        }

        Ok(Self(result))
    }

    /// Render as emoji squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|fb| fb.to_emoji()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    /// Parse a pattern from a string like `"GY-GY"`, `"gybbg"` or `"🟩🟨⬛🟩🟨"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let feedbacks = s
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Feedback::from_char(symbol).ok_or(PatternError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if feedbacks.is_empty() {
            return Err(PatternError::EmptyPattern);
        }
        Ok(Self(feedbacks))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl From<Vec<Feedback>> for Pattern {
    fn from(feedbacks: Vec<Feedback>) -> Self {
        Self(feedbacks)
    }
}

/// Lazily enumerate every pattern of `length` in generation order
///
/// Works like an odometer over the digits `Absent, Present, Correct`, so no
/// 3^length arithmetic is involved.
#[must_use]
pub fn patterns(length: usize) -> Patterns {
    Patterns {
        next: Some(vec![Feedback::Absent; length]),
    }
}

/// Iterator returned by [`patterns`]
#[derive(Debug, Clone)]
pub struct Patterns {
    next: Option<Vec<Feedback>>,
}

impl Iterator for Patterns {
    type Item = Pattern;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        let mut successor = current.clone();
        let mut carried_out = true;
        for slot in successor.iter_mut().rev() {
            match *slot {
                Feedback::Absent => {
                    *slot = Feedback::Present;
                    carried_out = false;
                    break;
                }
                Feedback::Present => {
                    *slot = Feedback::Correct;
                    carried_out = false;
                    break;
                }
                Feedback::Correct => *slot = Feedback::Absent,
            }
        }
        if !carried_out {
            self.next = Some(successor);
        }

        Some(Pattern(current))
    }
}

/// Generate every feedback pattern for words of `length` letters
///
/// Returns 3^length patterns in lexicographic order over
/// `Absent < Present < Correct`. `length == 0` yields a single empty pattern.
///
/// # Examples
/// ```
/// use wordle_patterns::core::generate_patterns;
///
/// let all = generate_patterns(5);
/// assert_eq!(all.len(), 243);
/// assert_eq!(all[0].to_string(), "⬛⬛⬛⬛⬛");
/// assert!(all[242].is_perfect());
/// ```
#[must_use]
pub fn generate_patterns(length: usize) -> Vec<Pattern> {
    patterns(length).collect()
}
