//! Core domain types for candidate narrowing
//!
//! Feedback cells and rounds, plus the plural normalizer every comparison
//! goes through. Everything here is a pure function of its arguments.

mod feedback;
pub mod plural;

pub use feedback::{
    FeedbackError, LetterFeedback, LetterState, evaluate_guess, is_solved, parse_round,
    parse_round_arg, round_to_emoji, round_to_pattern,
};
pub use plural::{effective_length, is_plural, matched_rule, singular_form};
