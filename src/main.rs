//! Countdown Solver - CLI
//!
//! Letters-round solver with an interactive prompt, one-shot solving and benchmarks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use countdown_solver::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, run_interactive, solve_letters},
    dictionary::Dictionary,
    output::{print_benchmark_result, print_dictionary_summary, print_solve_result},
    wordlists::{DEFAULT_DICTIONARY_FILE, LoadReport, WORDS, load_from_file, words_from_slice},
};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "countdown_solver",
    about = "Countdown letters-round solver using a frequency-ordered jump table",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: ./dictionary.txt if present, else bundled list)
    #[arg(short, long, global = true, env = "COUNTDOWN_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Longest word kept from the word list (1-255)
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value = "9",
        value_parser = clap::value_parser!(u8).range(1..)
    )]
    max_length: u8,

    /// Number of letters each query must have (0 accepts any number)
    #[arg(short = 'n', long = "letters", global = true, default_value = "9")]
    letter_count: usize,

    /// Log load and build details
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for letters repeatedly (default)
    Interactive,

    /// Solve a single selection of letters
    Solve {
        /// The available letters
        letters: String,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show traversal counters
        #[arg(short, long)]
        stats: bool,
    },

    /// Compare the jump table against a linear scan on random draws
    Benchmark {
        /// Number of random draws
        #[arg(short, long, default_value = "1000")]
        queries: usize,

        /// Seed for the draws
        #[arg(long, default_value = "2014")]
        seed: u64,

        /// Check every result against the linear scan
        #[arg(long)]
        verify: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "countdown_solver=info"
    } else {
        "countdown_solver=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the configured word list and build the dictionary
fn load_dictionary(cli: &Cli) -> Result<Dictionary> {
    let start = Instant::now();
    let max_length = usize::from(cli.max_length);

    let path = cli.dictionary.clone().or_else(|| {
        let fallback = PathBuf::from(DEFAULT_DICTIONARY_FILE);
        fallback.is_file().then_some(fallback)
    });

    let (words, report) = match &path {
        Some(path) => {
            let mut report: LoadReport = load_from_file(path, max_length)
                .with_context(|| format!("Failed to load dictionary {}", path.display()))?;
            (std::mem::take(&mut report.words), Some(report))
        }
        None => (words_from_slice(WORDS, max_length), None),
    };

    let dictionary = Dictionary::from_words(words).context("Failed to build lookup table")?;
    print_dictionary_summary(&dictionary, report.as_ref(), start.elapsed());
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dictionary = load_dictionary(&cli)?;
    let expected_len = (cli.letter_count > 0).then_some(cli.letter_count);

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => {
            let summary = run_interactive(&dictionary, expected_len)?;
            println!(
                "\n👋 {} queries, {} words found",
                summary.queries, summary.words_found
            );
            Ok(())
        }
        Commands::Solve {
            letters,
            limit,
            stats,
        } => {
            let config = SolveConfig::new(letters)
                .with_expected_len(expected_len)
                .with_limit(limit);
            let result = solve_letters(&config, &dictionary)?;
            print_solve_result(&result, stats);
            Ok(())
        }
        Commands::Benchmark {
            queries,
            seed,
            verify,
        } => {
            let config = BenchmarkConfig {
                queries,
                letters: cli.letter_count.max(1),
                seed,
                verify,
            };
            println!("Running benchmark on {queries} random draws...");
            let result = run_benchmark(&dictionary, &config);
            print_benchmark_result(&result);

            if let Some(mismatches) = result.mismatches.filter(|&n| n > 0) {
                anyhow::bail!("{mismatches} queries disagreed with the linear scan");
            }
            Ok(())
        }
    }
}
