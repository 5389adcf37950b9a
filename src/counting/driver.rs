//! Per-pattern candidate counting
//!
//! Runs the matcher over every (pattern, candidate) pair. Patterns are
//! independent units, so they are evaluated in parallel and collected back in
//! input order.

use crate::core::{MatchError, Pattern, Word, matches};
use rayon::prelude::*;
use tracing::debug;

/// Number of candidates left for one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCount {
    pub pattern: Pattern,
    pub count: usize,
}

/// Count the candidates consistent with `pattern` being the feedback for `guess`
///
/// # Errors
/// Returns the first `MatchError` hit; a candidate that cannot be compared is
/// never silently left out of the count.
///
/// # Examples
/// ```
/// use wordle_patterns::core::{Pattern, Word};
/// use wordle_patterns::counting::count_matches;
///
/// let guess = Word::new("weary").unwrap();
/// let candidates = vec![Word::new("weary").unwrap(), Word::new("zzzzz").unwrap()];
///
/// let count = count_matches(&guess, &Pattern::perfect(5), &candidates).unwrap();
/// assert_eq!(count, 1);
/// ```
pub fn count_matches(
    guess: &Word,
    pattern: &Pattern,
    candidates: &[Word],
) -> Result<usize, MatchError> {
    candidates.iter().try_fold(0, |count, candidate| {
        Ok(count + usize::from(matches(guess, candidate, pattern)?))
    })
}

/// Count candidates for every pattern in `patterns`
///
/// Returns one entry per input pattern, in the same order.
///
/// # Errors
/// Returns a `MatchError` if any comparison fails.
pub fn count_all(
    guess: &Word,
    patterns: &[Pattern],
    candidates: &[Word],
) -> Result<Vec<PatternCount>, MatchError> {
    debug!(
        guess = guess.text(),
        patterns = patterns.len(),
        candidates = candidates.len(),
        "counting candidates per pattern"
    );

    patterns
        .par_iter()
        .map(|pattern| {
            count_matches(guess, pattern, candidates).map(|count| PatternCount {
                pattern: pattern.clone(),
                count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, generate_patterns};

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn count_matches_all_green() {
        let guess = Word::new("weary").unwrap();
        let candidates = words(&["weary", "wears", "rayon", "zzzzz"]);
        assert_eq!(
            count_matches(&guess, &Pattern::perfect(5), &candidates).unwrap(),
            1
        );
    }

    #[test]
    fn count_matches_all_black() {
        let guess = Word::new("weary").unwrap();
        let candidates = words(&["weary", "zzzzz", "built", "chomp"]);
        let all_black = Pattern::uniform(5, Feedback::Absent);
        assert_eq!(count_matches(&guess, &all_black, &candidates).unwrap(), 3);
    }

    #[test]
    fn count_matches_empty_candidates() {
        let guess = Word::new("weary").unwrap();
        assert_eq!(count_matches(&guess, &Pattern::perfect(5), &[]).unwrap(), 0);
    }

    #[test]
    fn count_matches_propagates_length_mismatch() {
        let guess = Word::new("weary").unwrap();
        let candidates = words(&["weary", "wear"]);
        assert!(matches!(
            count_matches(&guess, &Pattern::perfect(5), &candidates),
            Err(MatchError::LengthMismatch { candidate: 4, .. })
        ));
    }

    #[test]
    fn count_all_preserves_order_and_partitions() {
        let guess = Word::new("sassy").unwrap();
        let candidates = words(&["glass", "sassy", "essay", "brass", "zzzzz", "asses"]);
        let patterns = generate_patterns(5);

        let counts = count_all(&guess, &patterns, &candidates).unwrap();

        assert_eq!(counts.len(), patterns.len());
        assert!(counts.iter().zip(&patterns).all(|(c, p)| &c.pattern == p));
        assert_eq!(
            counts.iter().map(|c| c.count).sum::<usize>(),
            candidates.len()
        );
    }

    #[test]
    fn count_all_propagates_errors() {
        let guess = Word::new("weary").unwrap();
        let candidates = words(&["weary"]);
        let patterns = generate_patterns(4);
        assert!(count_all(&guess, &patterns, &candidates).is_err());
    }
}
