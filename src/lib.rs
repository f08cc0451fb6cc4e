//! Wordle Filter
//!
//! Candidate narrowing for Wordle-style games: given a pool of words and the
//! green/yellow/gray feedback of each guess so far, keep only the words that
//! are still possible. Plural forms are normalized to their singular so that
//! "cities" competes as the four-letter "city".
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_filter::core::{parse_round, singular_form};
//! use wordle_filter::filter::filter_words_by_feedback;
//!
//! assert_eq!(singular_form("wolves"), "wolf");
//!
//! let pool = ["cba", "cat", "cab"];
//! let rounds = vec![parse_round("cat", "GY-").unwrap()];
//! assert_eq!(filter_words_by_feedback(&pool, &rounds, 3), ["cba"]);
//! ```

// Core domain types
pub mod core;

// Feedback matching and pool narrowing
pub mod filter;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
