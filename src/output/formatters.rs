//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern};

/// Format a pattern as color words, e.g. `green yellow black`
#[must_use]
pub fn pattern_to_names(pattern: &Pattern) -> String {
    pattern
        .feedbacks()
        .iter()
        .map(Feedback::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a pattern's share of the largest partition
#[must_use]
pub fn count_bar(count: usize, max_count: usize, width: usize) -> String {
    create_progress_bar(count as f64, max_count as f64, width)
}
