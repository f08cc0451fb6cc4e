//! Word list loading utilities
//!
//! Turns free text into a deduplicated lowercase candidate pool.

use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Shortest word kept by [`extract_words_from_text`]
pub const MIN_WORD_LENGTH: usize = 3;

/// Extract the distinct words of a text
///
/// Lower-cases the text, takes every maximal run of ASCII letters, drops runs
/// shorter than [`MIN_WORD_LENGTH`], and keeps the first occurrence of each.
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::loader::extract_words_from_text;
///
/// let words = extract_words_from_text("The cat sat; the CAT ran to 2 boxes.");
/// assert_eq!(words, ["the", "cat", "sat", "ran", "boxes"]);
/// ```
#[must_use]
pub fn extract_words_from_text(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut seen = FxHashSet::default();

    lower
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|word| word.len() >= MIN_WORD_LENGTH)
        .filter(|word| seen.insert(*word))
        .map(str::to_string)
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_filter::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/book.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = extract_words_from_text(&content);
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load words from any reader, e.g. stdin
///
/// # Errors
///
/// Returns an I/O error if reading fails or the input is not UTF-8.
pub fn load_from_reader<R: Read>(mut reader: R) -> io::Result<Vec<String>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(extract_words_from_text(&content))
}

/// Pick a word uniformly at random
///
/// Returns `None` for an empty pool.
#[must_use]
pub fn random_word<S: AsRef<str>>(words: &[S]) -> Option<&str> {
    words.choose(&mut rand::rng()).map(|word| word.as_ref())
}
