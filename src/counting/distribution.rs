//! Summary statistics over per-pattern counts
//!
//! Given how many candidates fall under each pattern, computes the expected
//! information gain of the guess and related partition measures.

use super::PatternCount;
use crate::core::{MatchError, Pattern, Word};
use rustc_hash::FxHashMap;

/// Distribution of candidates over the patterns of one guess
#[derive(Debug, Clone)]
pub struct PatternDistribution {
    counts: Vec<PatternCount>,
    total: usize,
}

impl PatternDistribution {
    #[must_use]
    pub fn new(counts: Vec<PatternCount>) -> Self {
        let total = counts.iter().map(|c| c.count).sum();
        Self { counts, total }
    }

    /// All per-pattern counts, in generation order
    #[must_use]
    pub fn counts(&self) -> &[PatternCount] {
        &self.counts
    }

    /// Sum of all counts
    ///
    /// Equals the number of candidates when the counts partition them.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Patterns that at least one candidate produces
    pub fn nonzero(&self) -> impl Iterator<Item = &PatternCount> {
        self.counts.iter().filter(|c| c.count > 0)
    }

    /// Largest number of candidates sharing one pattern (worst case)
    #[must_use]
    pub fn max_partition(&self) -> usize {
        self.counts.iter().map(|c| c.count).max().unwrap_or(0)
    }

    /// Expected number of candidates remaining after the guess
    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.nonzero()
            .map(|c| {
                let size = c.count as f64;
                size * size / total
            })
            .sum()
    }

    /// Shannon entropy in bits
    ///
    /// H = -Σ p * log₂(p) over patterns with p > 0
    ///
    /// # Properties
    /// - 0.0 when every candidate lands in the same pattern
    /// - Bounded by log₂ of the number of nonzero patterns
    #[must_use]
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.nonzero()
            .map(|c| {
                let p = c.count as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

/// Group candidates by the pattern they score against `guess`
///
/// Independent of the matcher; used to cross-check matcher-based counts.
///
/// # Errors
/// Returns `MatchError::LengthMismatch` if a candidate's length differs from
/// the guess.
pub fn group_by_pattern(
    guess: &Word,
    candidates: &[Word],
) -> Result<FxHashMap<Pattern, usize>, MatchError> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::score(guess, candidate)?;
        *counts.entry(pattern).or_insert(0) += 1;
    }

    Ok(counts)
}
