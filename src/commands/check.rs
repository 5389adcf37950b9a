//! Single comparisons: match one pattern, or score one pair

use crate::core::{Pattern, Word, matches};
use anyhow::{Context, Result};

/// Result of checking one (guess, candidate, pattern) triple
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub guess: Word,
    pub candidate: Word,
    pub pattern: Pattern,
    pub consistent: bool,
    /// Feedback the guess actually gets against the candidate
    pub actual: Pattern,
}

/// Check whether `candidate` is consistent with `pattern` for `guess`
///
/// # Errors
///
/// Returns an error if either word or the pattern cannot be parsed, or if
/// their lengths differ.
pub fn check_candidate(guess: &str, candidate: &str, pattern: &str) -> Result<CheckResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let candidate =
        Word::new(candidate).with_context(|| format!("invalid candidate '{candidate}'"))?;
    let pattern: Pattern = pattern
        .parse()
        .with_context(|| format!("invalid pattern '{pattern}'"))?;

    let consistent = matches(&guess, &candidate, &pattern)?;
    let actual = Pattern::score(&guess, &candidate)?;

    Ok(CheckResult {
        guess,
        candidate,
        pattern,
        consistent,
        actual,
    })
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn score_guess(guess: &str, answer: &str) -> Result<Pattern> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let answer = Word::new(answer).with_context(|| format!("invalid answer '{answer}'"))?;
    Ok(Pattern::score(&guess, &answer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_consistent_candidate() {
        let result = check_candidate("sassy", "glass", "yy-g-").unwrap();
        assert!(result.consistent);
        assert_eq!(result.actual, result.pattern);
    }

    #[test]
    fn check_inconsistent_candidate_reports_actual() {
        let result = check_candidate("sassy", "glass", "yyyg-").unwrap();
        assert!(!result.consistent);
        assert_eq!(result.actual.to_string(), "🟨🟨⬛🟩⬛");
    }

    #[test]
    fn check_rejects_bad_input() {
        assert!(check_candidate("weary", "wear", "ggggg").is_err());
        assert!(check_candidate("weary", "weary", "ggqgg").is_err());
        assert!(check_candidate("we4ry", "weary", "ggggg").is_err());
    }

    #[test]
    fn score_pair() {
        assert!(score_guess("weary", "WEARY").unwrap().is_perfect());
        assert!(score_guess("weary", "wear").is_err());
    }
}
