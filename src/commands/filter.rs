//! Feedback filtering command
//!
//! Narrows a pool round by round and records how each round shrank it.

use crate::core::{LetterFeedback, parse_round_arg};
use crate::filter::filter_words_by_feedback;

/// Configuration for a filtering run
pub struct FilterConfig {
    pub length: usize,
    /// Rounds as `GUESS=PATTERN` strings, in the order they were played
    pub rounds: Vec<String>,
}

impl FilterConfig {
    #[must_use]
    pub const fn new(length: usize, rounds: Vec<String>) -> Self {
        Self { length, rounds }
    }
}

/// A single applied round
pub struct RoundStep {
    pub round: Vec<LetterFeedback>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of filtering a pool
pub struct FilterResult {
    pub length: usize,
    pub pool_size: usize,
    pub length_matches: usize,
    pub steps: Vec<RoundStep>,
    pub survivors: Vec<String>,
}

/// Filter `pool` by the rounds in `config`
///
/// # Errors
///
/// Returns an error if a round argument cannot be parsed.
pub fn run_filter<S: AsRef<str>>(config: &FilterConfig, pool: &[S]) -> Result<FilterResult, String> {
    let rounds = config
        .rounds
        .iter()
        .map(|raw| parse_round_arg(raw).map_err(|e| format!("Invalid round '{raw}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    let mut survivors = filter_words_by_feedback(pool, &[], config.length);
    let length_matches = survivors.len();
    let mut steps = Vec::with_capacity(rounds.len());

    for round in rounds {
        let candidates_before = survivors.len();
        survivors = filter_words_by_feedback(&survivors, std::slice::from_ref(&round), config.length);
        steps.push(RoundStep {
            round,
            candidates_before,
            candidates_after: survivors.len(),
        });
    }

    Ok(FilterResult {
        length: config.length,
        pool_size: pool.len(),
        length_matches,
        steps,
        survivors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_single_round() {
        let config = FilterConfig::new(3, vec!["cat=GY-".to_string()]);
        let result = run_filter(&config, &["cba", "cat", "cab", "crane"]).unwrap();

        assert_eq!(result.pool_size, 4);
        assert_eq!(result.length_matches, 3);
        assert_eq!(result.survivors, ["cba"]);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].candidates_before, 3);
        assert_eq!(result.steps[0].candidates_after, 1);
    }

    #[test]
    fn filter_steps_never_grow() {
        let config = FilterConfig::new(
            5,
            vec!["crane=-GG-G".to_string(), "grate=-GGGG".to_string()],
        );
        let pool = ["crane", "crate", "grate", "irate", "slate"];
        let result = run_filter(&config, &pool).unwrap();

        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert_eq!(result.survivors, ["irate"]);
    }

    #[test]
    fn filter_without_rounds() {
        let config = FilterConfig::new(4, Vec::new());
        let result = run_filter(&config, &["cities", "city", "cat"]).unwrap();
        assert_eq!(result.survivors, ["cities", "city"]);
        assert!(result.steps.is_empty());
    }

    #[test]
    fn filter_bad_round_is_error() {
        let config = FilterConfig::new(3, vec!["cat=GQ-".to_string()]);
        let result = run_filter(&config, &["cat"]);
        assert!(result.is_err());
    }
}
