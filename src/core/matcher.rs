//! Feedback matching: could this candidate have produced this pattern?
//!
//! Wordle hands out green and yellow marks greedily per letter occurrence:
//! greens first, then yellows left to right while the secret still has
//! unaccounted copies of the letter. A black square on a repeated guess letter
//! therefore means "no further copies", not "letter absent". The predicate
//! below checks each position against that allocation and stops at the first
//! position that disagrees.

use super::{Feedback, Pattern, Word};
use thiserror::Error;

/// Error type for comparisons between incompatible inputs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error(
        "length mismatch: guess has {guess} letters, candidate has {candidate}, pattern has {pattern}"
    )]
    LengthMismatch {
        guess: usize,
        candidate: usize,
        pattern: usize,
    },
}

/// Check whether `candidate` is consistent with `pattern` having been the
/// feedback for `guess`
///
/// For a guess letter that occurs once this is the familiar rule: green means
/// same letter here, yellow means the letter is elsewhere in the candidate,
/// black means the candidate has no such letter. For repeated letters each
/// non-green occurrence is ranked left to right; it is yellow while its rank
/// is within the candidate's spare copies (copies not already used by greens)
/// and black afterwards.
///
/// Empty inputs match vacuously.
///
/// # Errors
/// Returns `MatchError::LengthMismatch` if guess, candidate and pattern
/// lengths are not all equal.
///
/// # Examples
/// ```
/// use wordle_patterns::core::{Word, Pattern, matches};
///
/// let guess = Word::new("sassy").unwrap();
/// let candidate = Word::new("glass").unwrap();
///
/// // Only one spare S: the first S is yellow, the second black
/// let right: Pattern = "yy-g-".parse().unwrap();
/// let wrong: Pattern = "-yyg-".parse().unwrap();
/// assert!(matches(&guess, &candidate, &right).unwrap());
/// assert!(!matches(&guess, &candidate, &wrong).unwrap());
/// ```
pub fn matches(guess: &Word, candidate: &Word, pattern: &Pattern) -> Result<bool, MatchError> {
    if guess.len() != candidate.len() || guess.len() != pattern.len() {
        return Err(MatchError::LengthMismatch {
            guess: guess.len(),
            candidate: candidate.len(),
            pattern: pattern.len(),
        });
    }

    Ok(pattern
        .feedbacks()
        .iter()
        .enumerate()
        .all(|(position, &feedback)| position_matches(guess, candidate, position, feedback)))
}

/// Check one position of the pattern
fn position_matches(guess: &Word, candidate: &Word, position: usize, feedback: Feedback) -> bool {
    let letter = guess.char_at(position);
    let here = candidate.char_at(position) == letter;

    match feedback {
        Feedback::Correct => here,
        Feedback::Present => {
            !here && occurrence_rank(guess, candidate, position) <= spare(guess, candidate, letter)
        }
        Feedback::Absent => {
            !here && occurrence_rank(guess, candidate, position) > spare(guess, candidate, letter)
        }
    }
}

/// Copies of `letter` in the candidate that no green position consumes
fn spare(guess: &Word, candidate: &Word, letter: u8) -> usize {
    let greens = guess
        .letters()
        .iter()
        .zip(candidate.letters())
        .filter(|&(&g, &c)| g == letter && c == letter)
        .count();
    candidate.count_of(letter).saturating_sub(greens)
}

/// 1-based rank of `position` among the non-green occurrences of its letter
/// in the guess
fn occurrence_rank(guess: &Word, candidate: &Word, position: usize) -> usize {
    let letter = guess.char_at(position);
    let earlier = guess.letters()[..position]
        .iter()
        .zip(candidate.letters())
        .filter(|&(&g, &c)| g == letter && c != letter)
        .count();
    earlier + 1
}
