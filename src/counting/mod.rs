//! Counting candidates per feedback pattern
//!
//! - `driver`: matcher-based counts for one pattern or all of them
//! - `distribution`: entropy and partition statistics over those counts

pub mod distribution;
mod driver;

pub use distribution::{PatternDistribution, group_by_pattern};
pub use driver::{PatternCount, count_all, count_matches};
