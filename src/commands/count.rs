//! Pattern counting command
//!
//! For one guess, counts the candidates left under every feedback pattern.

use crate::core::{WORD_LENGTH, Word, generate_patterns};
use crate::counting::{PatternDistribution, count_all, group_by_pattern};
use anyhow::{Context, Result, bail};
use tracing::{info, warn};

/// Configuration for a counting run
#[derive(Debug, Clone)]
pub struct CountConfig {
    pub guess: String,
    /// Cross-check matcher counts against scored patterns
    pub verify: bool,
}

impl CountConfig {
    #[must_use]
    pub fn new(guess: String) -> Self {
        Self {
            guess,
            verify: false,
        }
    }

    #[must_use]
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// Result of counting candidates per pattern
#[derive(Debug, Clone)]
pub struct CountReport {
    pub guess: Word,
    pub candidates: usize,
    pub distribution: PatternDistribution,
}

/// Count candidates for every pattern of the configured guess
///
/// # Errors
///
/// Returns an error if:
/// - The guess is not a valid word of the candidates' length
/// - A comparison fails
/// - The counts do not partition the candidates
/// - Verification is on and a matcher count disagrees with the scorer
pub fn count_patterns(config: &CountConfig, candidates: &[Word]) -> Result<CountReport> {
    let length = candidates.first().map_or(WORD_LENGTH, Word::len);
    let guess = Word::with_length(config.guess.as_str(), length)
        .with_context(|| format!("invalid guess '{}'", config.guess))?;

    let patterns = generate_patterns(length);
    let counts = count_all(&guess, &patterns, candidates)
        .with_context(|| format!("counting candidates for '{guess}'"))?;
    let distribution = PatternDistribution::new(counts);

    if distribution.total() != candidates.len() {
        bail!(
            "pattern counts sum to {} but there are {} candidates",
            distribution.total(),
            candidates.len()
        );
    }

    if config.verify {
        verify_against_scoring(&guess, candidates, &distribution)?;
    }

    info!(
        guess = guess.text(),
        candidates = candidates.len(),
        patterns = distribution.nonzero().count(),
        "counted candidates per pattern"
    );

    Ok(CountReport {
        guess,
        candidates: candidates.len(),
        distribution,
    })
}

fn verify_against_scoring(
    guess: &Word,
    candidates: &[Word],
    distribution: &PatternDistribution,
) -> Result<()> {
    let scored = group_by_pattern(guess, candidates)?;

    let mut mismatches = 0;
    for entry in distribution.counts() {
        let expected = scored.get(&entry.pattern).copied().unwrap_or(0);
        if expected != entry.count {
            warn!(
                pattern = %entry.pattern,
                matched = entry.count,
                scored = expected,
                "matcher and scorer disagree"
            );
            mismatches += 1;
        }
    }

    if mismatches > 0 {
        bail!("{mismatches} patterns disagree with scored feedback");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const SAMPLE: &[&str] = &[
        "weary", "rayon", "glass", "sassy", "zzzzz", "wears", "early", "yearn", "ready", "abide",
    ];

    #[test]
    fn count_partitions_candidates() {
        let candidates = words_from_slice(SAMPLE);
        let report = count_patterns(
            &CountConfig::new("weary".to_string()).with_verify(true),
            &candidates,
        )
        .unwrap();

        assert_eq!(report.guess.text(), "weary");
        assert_eq!(report.candidates, SAMPLE.len());
        assert_eq!(report.distribution.total(), SAMPLE.len());
        assert_eq!(report.distribution.counts().len(), 243);
    }

    #[test]
    fn count_with_repeated_letter_guess_verifies() {
        let candidates = words_from_slice(SAMPLE);
        let report = count_patterns(
            &CountConfig::new("SASSY".to_string()).with_verify(true),
            &candidates,
        )
        .unwrap();

        assert_eq!(report.guess.text(), "sassy");
        assert_eq!(report.distribution.total(), SAMPLE.len());
    }

    #[test]
    fn count_rejects_invalid_guess() {
        let candidates = words_from_slice(SAMPLE);
        assert!(count_patterns(&CountConfig::new("toolong".to_string()), &candidates).is_err());
        assert!(count_patterns(&CountConfig::new("we4ry".to_string()), &candidates).is_err());
    }
}
