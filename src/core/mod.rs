//! Core domain types for Wordle feedback
//!
//! Words, feedback symbols, patterns and the matching predicate. Everything
//! here is pure: no I/O, no shared state.

mod feedback;
mod matcher;
mod pattern;
mod word;

pub use feedback::Feedback;
pub use matcher::{MatchError, matches};
pub use pattern::{Pattern, PatternError, Patterns, generate_patterns, patterns};
pub use word::{WORD_LENGTH, Word, WordError};
