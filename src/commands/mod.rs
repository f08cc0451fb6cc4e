//! Command implementations

pub mod filter;
pub mod normalize;
pub mod pick;
pub mod play;

pub use filter::{FilterConfig, FilterResult, RoundStep, run_filter};
pub use normalize::{NormalizeResult, normalize_word, normalize_words};
pub use pick::pick_word;
pub use play::{PlayConfig, PlayOutcome, play_game};
