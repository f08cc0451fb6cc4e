//! Wordle Filter - CLI
//!
//! Narrow word pools by guess feedback, inspect plural normalization, and
//! play a quick game against a random word from the pool.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use wordle_filter::{
    commands::{FilterConfig, PlayConfig, normalize_words, pick_word, play_game, run_filter},
    output::{print_filter_result, print_normalize_results},
    wordlists::{load_from_file, load_from_reader},
};

#[derive(Parser)]
#[command(
    name = "wordle_filter",
    about = "Narrow Wordle candidates by green/yellow/gray feedback, with plural normalization",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Text file to draw candidate words from (default: read stdin)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Log pool sizes and rule decisions (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show singular form, effective length and plural flag of words
    Normalize {
        /// Words to normalize
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Filter the pool by feedback rounds
    Filter {
        /// Effective word length of the puzzle
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// A played round as GUESS=PATTERN, e.g. crane=GY-.- (repeatable)
        #[arg(short, long = "round")]
        rounds: Vec<String>,

        /// Maximum number of survivors to list
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Pick a random word of the given effective length
    Pick {
        #[arg(short, long, default_value = "5")]
        length: usize,
    },

    /// Play a game against a random word from the pool
    Play {
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Number of guesses allowed
        #[arg(short = 'g', long, default_value = "6")]
        max_guesses: usize,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Load the candidate pool from `--wordlist` or stdin
fn load_pool(wordlist: Option<&str>) -> Result<Vec<String>> {
    let words = match wordlist {
        Some(path) => {
            load_from_file(path).with_context(|| format!("Failed to read word list '{path}'"))?
        }
        None => load_from_reader(io::stdin().lock()).context("Failed to read words from stdin")?,
    };
    log::info!("candidate pool has {} words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Normalize { words } => {
            print_normalize_results(&normalize_words(&words));
            Ok(())
        }
        Commands::Filter {
            length,
            rounds,
            limit,
        } => run_filter_command(cli.wordlist.as_deref(), length, rounds, limit),
        Commands::Pick { length } => {
            let pool = load_pool(cli.wordlist.as_deref())?;
            let word = pick_word(&pool, length).map_err(|e| anyhow::anyhow!(e))?;
            println!("{word}");
            Ok(())
        }
        Commands::Play {
            length,
            max_guesses,
        } => run_play_command(cli.wordlist.as_deref(), length, max_guesses),
    }
}

fn run_filter_command(
    wordlist: Option<&str>,
    length: usize,
    rounds: Vec<String>,
    limit: usize,
) -> Result<()> {
    let pool = load_pool(wordlist)?;
    let config = FilterConfig::new(length, rounds);
    let result = run_filter(&config, &pool).map_err(|e| anyhow::anyhow!(e))?;
    print_filter_result(&result, limit);
    Ok(())
}

fn run_play_command(wordlist: Option<&str>, length: usize, max_guesses: usize) -> Result<()> {
    // Guesses come from stdin, so the pool must come from a file
    let Some(path) = wordlist else {
        bail!("play needs --wordlist <FILE>; stdin is used for guesses");
    };
    let pool = load_pool(Some(path))?;

    let answer = pick_word(&pool, length).map_err(|e| anyhow::anyhow!(e))?;
    log::debug!("answer drawn from {} words", pool.len());

    let mut config = PlayConfig::new(length);
    config.max_guesses = max_guesses;

    let outcome = play_game(
        &config,
        &pool,
        &answer,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )
    .map_err(|e| anyhow::anyhow!(e))?;

    if outcome.quit {
        println!("👋 Thanks for playing!");
    }
    Ok(())
}
