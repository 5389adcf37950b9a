//! Wordle Pattern Counter - CLI
//!
//! Prints, for a guess, how many candidate words remain under each of the
//! 3^5 feedback patterns.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordle_patterns::{
    commands::{CountConfig, check_candidate, count_patterns, score_guess},
    core::WORD_LENGTH,
    output::{print_check_result, print_count_report, print_score},
    wordlists::{ALLOWED_WORDS_FILE, POSSIBLE_WORDS_FILE, WordListPaths, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_patterns",
    about = "Count Wordle candidates left under every feedback pattern of a guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Possible answers list (one word per line)
    #[arg(long, global = true, default_value = POSSIBLE_WORDS_FILE)]
    answers: PathBuf,

    /// Allowed guesses list (one word per line)
    #[arg(long, global = true, default_value = ALLOWED_WORDS_FILE)]
    allowed: PathBuf,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Count candidates per pattern for a guess (default: WEARY)
    Count {
        /// The guess word
        #[arg(default_value = "weary")]
        guess: String,

        /// Count over the allowed guesses instead of the possible answers
        #[arg(short, long)]
        all: bool,

        /// Only print patterns with at least one candidate
        #[arg(short, long)]
        nonzero: bool,

        /// Cross-check counts against directly scored feedback
        #[arg(long)]
        verify: bool,
    },

    /// Check whether a candidate is consistent with a pattern
    Check {
        guess: String,
        candidate: String,
        /// Pattern such as "gy-g-", "21020" or "🟩🟨⬛🟩⬛"
        pattern: String,
    },

    /// Show the feedback a guess gets against an answer
    Score { guess: String, answer: String },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = WordListPaths {
        allowed: cli.allowed,
        possible: cli.answers,
    };

    let command = cli.command.unwrap_or(Commands::Count {
        guess: "weary".to_string(),
        all: false,
        nonzero: false,
        verify: false,
    });

    match command {
        Commands::Count {
            guess,
            all,
            nonzero,
            verify,
        } => run_count_command(&paths, guess, all, nonzero, verify),
        Commands::Check {
            guess,
            candidate,
            pattern,
        } => {
            let result = check_candidate(&guess, &candidate, &pattern)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Score { guess, answer } => {
            let pattern = score_guess(&guess, &answer)?;
            print_score(&guess, &answer, &pattern);
            Ok(())
        }
    }
}

fn run_count_command(
    paths: &WordListPaths,
    guess: String,
    all: bool,
    nonzero: bool,
    verify: bool,
) -> Result<()> {
    let source = WordSource::from_all_flag(all);
    let candidates = paths
        .load(source, WORD_LENGTH)
        .with_context(|| format!("loading {source:?} word list"))?;

    let config = CountConfig::new(guess).with_verify(verify);
    let report = count_patterns(&config, &candidates)?;

    print_count_report(&report, nonzero);
    Ok(())
}
