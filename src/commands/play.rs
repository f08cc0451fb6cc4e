//! Interactive guessing game
//!
//! A hidden answer is drawn from the pool; each guess is scored with
//! standard feedback and the pool is narrowed with every round so far.

use crate::core::{FeedbackError, LetterFeedback, effective_length, evaluate_guess, is_solved};
use crate::filter::filter_words_by_feedback;
use crate::output::formatters::colored_round;
use std::io::{BufRead, Write};

/// Configuration for a game
pub struct PlayConfig {
    pub length: usize,
    pub max_guesses: usize,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self {
            length,
            max_guesses: 6,
        }
    }
}

/// How a game ended
pub struct PlayOutcome {
    pub answer: String,
    pub guesses: Vec<String>,
    pub solved: bool,
    pub quit: bool,
}

/// Play one game against `answer`, reading guesses from `input`
///
/// Guesses with characters outside `a-z`, or whose effective length differs
/// from the configured length, are rejected without using a turn.
///
/// # Errors
///
/// Returns an error on I/O failure reading input or writing output.
pub fn play_game<S, R, W>(
    config: &PlayConfig,
    pool: &[S],
    answer: &str,
    input: &mut R,
    out: &mut W,
) -> Result<PlayOutcome, String>
where
    S: AsRef<str>,
    R: BufRead,
    W: Write,
{
    let io = |e: std::io::Error| e.to_string();

    let mut rounds: Vec<Vec<LetterFeedback>> = Vec::new();
    let mut guesses: Vec<String> = Vec::new();
    let mut solved = false;
    let mut quit = false;

    writeln!(
        out,
        "Guess the {}-letter word in {} tries ('quit' to give up).",
        config.length, config.max_guesses
    )
    .map_err(io)?;

    while guesses.len() < config.max_guesses {
        write!(out, "Guess {}: ", guesses.len() + 1).map_err(io)?;
        out.flush().map_err(io)?;

        let mut line = String::new();
        if input.read_line(&mut line).map_err(io)? == 0 {
            writeln!(out).map_err(io)?;
            quit = true;
            break;
        }
        let guess = line.trim().to_lowercase();

        match guess.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                quit = true;
                break;
            }
            _ => {}
        }

        if let Some(ch) = guess.chars().find(|c| !c.is_ascii_lowercase()) {
            writeln!(out, "{}", FeedbackError::InvalidLetter(ch)).map_err(io)?;
            continue;
        }

        if effective_length(&guess) != config.length {
            writeln!(
                out,
                "'{guess}' has effective length {}, expected {}",
                effective_length(&guess),
                config.length
            )
            .map_err(io)?;
            continue;
        }

        let round = evaluate_guess(&guess, answer);
        rounds.push(round.clone());
        guesses.push(guess);

        let remaining = filter_words_by_feedback(pool, &rounds, config.length);
        writeln!(
            out,
            "  {}  {} candidates remain",
            colored_round(&round),
            remaining.len()
        )
        .map_err(io)?;

        solved = is_solved(&round);
        if solved {
            break;
        }
    }

    if solved {
        writeln!(out, "Solved in {} guesses!", guesses.len()).map_err(io)?;
    } else {
        writeln!(out, "The word was: {answer}").map_err(io)?;
    }

    Ok(PlayOutcome {
        answer: answer.to_string(),
        guesses,
        solved,
        quit,
    })
}
