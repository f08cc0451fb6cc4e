//! Candidate filtering
//!
//! [`matches_feedback`] checks one word against one round;
//! [`filter_words_by_feedback`] applies a sequence of rounds to a pool.

mod candidates;
mod matcher;

pub use candidates::filter_words_by_feedback;
pub use matcher::matches_feedback;
