//! Per-letter guess feedback
//!
//! A feedback round is an ordered slice of [`LetterFeedback`] cells, one per
//! position of the evaluated word's singular form.

use super::plural::singular_form;
use rustc_hash::FxHashMap;
use std::fmt;

/// Classification of a single letter at a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    /// Letter absent, or present in fewer copies than already confirmed
    Gray,
    /// Letter present at a different position
    Yellow,
    /// Letter present at exactly this position
    Green,
    /// No information for this cell
    None,
}

impl LetterState {
    /// Parse a state from a pattern character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/'x'/'X'/⬜ for gray
    /// - '.'/'?' for no information
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | 'x' | 'X' | '⬜' => Some(Self::Gray),
            '.' | '?' => Some(Self::None),
            _ => None,
        }
    }

    /// Canonical pattern character
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Gray => '-',
            Self::None => '.',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬜',
            Self::None => '▫',
        }
    }

    /// Green or yellow: the letter is confirmed present
    #[inline]
    #[must_use]
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::Green | Self::Yellow)
    }
}

/// One cell of feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterFeedback {
    pub letter: char,
    pub position: usize,
    pub state: LetterState,
}

impl LetterFeedback {
    #[must_use]
    pub const fn new(letter: char, position: usize, state: LetterState) -> Self {
        Self {
            letter,
            position,
            state,
        }
    }
}

impl fmt::Display for LetterFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.letter, self.position, self.state.to_char())
    }
}

/// Error type for malformed feedback input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    LengthMismatch { guess: usize, pattern: usize },
    InvalidState(char),
    InvalidLetter(char),
    MissingSeparator(String),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, pattern } => write!(
                f,
                "Pattern has {pattern} cells but the guess has {guess} letters"
            ),
            Self::InvalidState(ch) => {
                write!(f, "Unknown feedback character '{ch}' (use G, Y, - or .)")
            }
            Self::InvalidLetter(ch) => write!(f, "Guess contains non-letter '{ch}'"),
            Self::MissingSeparator(raw) => {
                write!(f, "Expected GUESS=PATTERN, got '{raw}'")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Build a feedback round from a guess and a pattern string like "GY-.-"
///
/// The guess is lower-cased; cell `i` pairs guess letter `i` with pattern
/// character `i`.
///
/// # Errors
/// Returns `FeedbackError` if the lengths differ, the guess has a
/// non-alphabetic character, or the pattern has an unknown character.
///
/// # Examples
/// ```
/// use wordle_filter::core::{LetterState, parse_round};
///
/// let round = parse_round("cat", "GY-").unwrap();
/// assert_eq!(round[1].letter, 'a');
/// assert_eq!(round[1].state, LetterState::Yellow);
/// assert!(parse_round("cat", "GY").is_err());
/// ```
pub fn parse_round(guess: &str, pattern: &str) -> Result<Vec<LetterFeedback>, FeedbackError> {
    let letters: Vec<char> = guess.to_lowercase().chars().collect();
    let states: Vec<char> = pattern.chars().collect();

    if letters.len() != states.len() {
        return Err(FeedbackError::LengthMismatch {
            guess: letters.len(),
            pattern: states.len(),
        });
    }

    letters
        .into_iter()
        .zip(states)
        .enumerate()
        .map(|(position, (letter, ch))| {
            if !letter.is_alphabetic() {
                return Err(FeedbackError::InvalidLetter(letter));
            }
            let state = LetterState::from_char(ch).ok_or(FeedbackError::InvalidState(ch))?;
            Ok(LetterFeedback::new(letter, position, state))
        })
        .collect()
}

/// Parse a `GUESS=PATTERN` command-line argument
///
/// # Errors
/// Returns `FeedbackError::MissingSeparator` when there is no `=`, otherwise
/// whatever [`parse_round`] reports.
pub fn parse_round_arg(raw: &str) -> Result<Vec<LetterFeedback>, FeedbackError> {
    let (guess, pattern) = raw
        .split_once('=')
        .ok_or_else(|| FeedbackError::MissingSeparator(raw.to_string()))?;
    parse_round(guess.trim(), pattern.trim())
}

/// Compute the feedback round `guess` earns against `answer`
///
/// Both words are reduced to their singular forms first. Greens are marked
/// before yellows, and yellows consume the answer's unmatched letters, so a
/// repeated guess letter is only yellow as many times as the answer still
/// has copies. Guess positions past the end of the answer are gray.
///
/// # Examples
/// ```
/// use wordle_filter::core::{evaluate_guess, round_to_pattern};
///
/// let round = evaluate_guess("speed", "erase");
/// assert_eq!(round_to_pattern(&round), "Y-YY-");
/// ```
#[must_use]
pub fn evaluate_guess(guess: &str, answer: &str) -> Vec<LetterFeedback> {
    let guess: Vec<char> = singular_form(guess).chars().collect();
    let answer: Vec<char> = singular_form(answer).chars().collect();

    let mut states = vec![LetterState::Gray; guess.len()];
    let mut available: FxHashMap<char, usize> = FxHashMap::default();

    // First pass: greens, and pool the answer letters they don't use
    for (i, &ch) in answer.iter().enumerate() {
        if guess.get(i) == Some(&ch) {
            states[i] = LetterState::Green;
        } else {
            *available.entry(ch).or_insert(0) += 1;
        }
    }

    // Second pass: yellows drawn from the remaining pool
    for (i, &ch) in guess.iter().enumerate() {
        if states[i] == LetterState::Green {
            continue;
        }
        if let Some(count) = available.get_mut(&ch)
            && *count > 0
        {
            states[i] = LetterState::Yellow;
            *count -= 1;
        }
    }

    guess
        .into_iter()
        .zip(states)
        .enumerate()
        .map(|(position, (letter, state))| LetterFeedback::new(letter, position, state))
        .collect()
}

/// Whether every cell in the round is green
#[must_use]
pub fn is_solved(round: &[LetterFeedback]) -> bool {
    !round.is_empty() && round.iter().all(|fb| fb.state == LetterState::Green)
}

/// Render a round as its pattern string, e.g. "GY-"
#[must_use]
pub fn round_to_pattern(round: &[LetterFeedback]) -> String {
    round.iter().map(|fb| fb.state.to_char()).collect()
}

/// Render a round as emoji squares
#[must_use]
pub fn round_to_emoji(round: &[LetterFeedback]) -> String {
    round.iter().map(|fb| fb.state.to_emoji()).collect()
}
