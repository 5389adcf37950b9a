//! Command implementations

pub mod check;
pub mod count;

pub use check::{CheckResult, check_candidate, score_guess};
pub use count::{CountConfig, CountReport, count_patterns};
