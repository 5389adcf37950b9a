//! Display functions for command results

use super::formatters::{count_bar, pattern_to_names};
use crate::commands::{CheckResult, CountReport};
use crate::core::Pattern;
use colored::Colorize;

/// Print every pattern with its candidate count, then the summary
///
/// With `nonzero_only`, patterns no candidate produces are left out.
pub fn print_count_report(report: &CountReport, nonzero_only: bool) {
    let dist = &report.distribution;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PATTERN COUNTS:".bright_cyan().bold(),
        report.guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    let max_count = dist.max_partition();
    for entry in dist.counts() {
        if nonzero_only && entry.count == 0 {
            continue;
        }
        let bar = count_bar(entry.count, max_count, 30);
        println!(
            "   {}  {:>5}  {}",
            entry.pattern,
            entry.count,
            if entry.count > 0 {
                bar.green()
            } else {
                bar.bright_black()
            }
        );
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Candidates:        {}", report.candidates);
    println!(
        "   Patterns seen:     {} of {}",
        dist.nonzero().count(),
        dist.counts().len()
    );
    println!("   Largest partition: {}", format!("{max_count}").yellow());
    println!(
        "   Expected left:     {:.1} candidates",
        dist.expected_remaining()
    );
    println!(
        "   Entropy:           {}",
        format!("{:.3} bits", dist.entropy()).bright_yellow()
    );
}

/// Print the outcome of a single pattern check
pub fn print_check_result(result: &CheckResult) {
    println!(
        "{} vs {} under {} ({})",
        result.guess.text().to_uppercase().bright_yellow(),
        result.candidate.text().to_uppercase().bright_yellow(),
        result.pattern,
        pattern_to_names(&result.pattern)
    );

    if result.consistent {
        println!("{}", "✅ consistent".green().bold());
    } else {
        println!("{}", "❌ not consistent".red().bold());
        println!("   actual feedback: {}", result.actual);
    }
}

/// Print the feedback for a guess/answer pair
pub fn print_score(guess: &str, answer: &str, pattern: &Pattern) {
    println!(
        "{} → {}: {} ({})",
        guess.to_uppercase().bright_yellow(),
        answer.to_uppercase().bright_yellow(),
        pattern,
        pattern_to_names(pattern)
    );
}
