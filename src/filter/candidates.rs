//! Multi-round candidate narrowing

use super::matcher::matches_feedback;
use crate::core::{LetterFeedback, effective_length};

/// Narrow a candidate pool to the words consistent with every round
///
/// Keeps only words whose effective (singular) length is `word_length`, then
/// applies each round in order. Survivors keep their original relative order;
/// the input pool is never modified.
///
/// # Examples
/// ```
/// use wordle_filter::core::parse_round;
/// use wordle_filter::filter::filter_words_by_feedback;
///
/// let pool = ["cba", "cat", "cab"];
/// let rounds = vec![parse_round("cat", "GY-").unwrap()];
/// assert_eq!(filter_words_by_feedback(&pool, &rounds, 3), ["cba"]);
/// ```
#[must_use]
pub fn filter_words_by_feedback<S: AsRef<str>>(
    words: &[S],
    rounds: &[Vec<LetterFeedback>],
    word_length: usize,
) -> Vec<String> {
    let mut filtered: Vec<&str> = words
        .iter()
        .map(|word| word.as_ref())
        .filter(|word| effective_length(word) == word_length)
        .collect();
    log::debug!(
        "{} of {} words have effective length {word_length}",
        filtered.len(),
        words.len()
    );

    for (i, round) in rounds.iter().enumerate() {
        let before = filtered.len();
        filtered.retain(|word| matches_feedback(word, round));
        log::debug!("round {}: {before} -> {} candidates", i + 1, filtered.len());
    }

    filtered.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_round;

    #[test]
    fn empty_pool_yields_empty() {
        let pool: [&str; 0] = [];
        assert!(filter_words_by_feedback(&pool, &[], 5).is_empty());
    }

    #[test]
    fn no_rounds_only_gates_length() {
        let pool = ["crane", "cat", "cities", "boxes", "slate"];
        assert_eq!(
            filter_words_by_feedback(&pool, &[], 5),
            ["crane", "slate"]
        );
        assert_eq!(filter_words_by_feedback(&pool, &[], 4), ["cities"]);
        assert_eq!(filter_words_by_feedback(&pool, &[], 3), ["cat", "boxes"]);
    }

    #[test]
    fn rounds_are_anded_in_order() {
        let pool = ["crane", "crate", "grate", "irate", "slate"];
        let first = parse_round("crane", "-GG-G").unwrap();
        let second = parse_round("grate", "-GGGG").unwrap();

        let after_first = filter_words_by_feedback(&pool, std::slice::from_ref(&first), 5);
        assert_eq!(after_first, ["grate", "irate"]);

        let after_both = filter_words_by_feedback(&pool, &[first, second], 5);
        assert_eq!(after_both, ["irate"]);
    }

    #[test]
    fn plurals_survive_as_their_singular() {
        let pool = vec!["cats".to_string(), "cots".to_string(), "cat".to_string()];
        let rounds = vec![parse_round("cat", "GGG").unwrap()];
        assert_eq!(filter_words_by_feedback(&pool, &rounds, 3), ["cats", "cat"]);
    }

    #[test]
    fn input_pool_untouched() {
        let pool = vec!["crane".to_string(), "slate".to_string()];
        let rounds = vec![parse_round("crane", "-----").unwrap()];
        let result = filter_words_by_feedback(&pool, &rounds, 5);
        assert!(result.is_empty());
        assert_eq!(pool, ["crane", "slate"]);
    }
}
