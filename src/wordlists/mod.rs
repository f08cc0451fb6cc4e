//! Word lists for candidate pools
//!
//! Tokenizing free text into a pool and drawing a random answer from it.

pub mod loader;

pub use loader::{extract_words_from_text, load_from_file, load_from_reader, random_word};
