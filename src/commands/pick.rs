//! Random word command

use crate::filter::filter_words_by_feedback;
use crate::wordlists::random_word;

/// Pick a random word of effective length `length` from `pool`
///
/// # Errors
///
/// Returns an error if no word in the pool has that effective length.
pub fn pick_word<S: AsRef<str>>(pool: &[S], length: usize) -> Result<String, String> {
    let candidates = filter_words_by_feedback(pool, &[], length);
    random_word(&candidates)
        .map(str::to_string)
        .ok_or_else(|| format!("No words of effective length {length} in the pool"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_respects_length() {
        let pool = ["crane", "cities", "cat", "city"];
        for _ in 0..20 {
            let word = pick_word(&pool, 4).unwrap();
            assert!(word == "cities" || word == "city");
        }
    }

    #[test]
    fn pick_no_match_is_error() {
        assert!(pick_word(&["cat"], 7).is_err());
    }
}
