//! Single-round feedback predicate
//!
//! Decides whether one candidate is consistent with one feedback round,
//! following the duplicate-letter counting rules:
//! 1. Greens fix a letter to a position
//! 2. Yellows require the letter elsewhere, never at their own position
//! 3. Grays exclude a letter entirely, unless the same round confirms it
//!    with a green or yellow, in which case only that position is excluded
//! 4. Each letter must appear at least as often as it is confirmed
//! 5. A letter that is both confirmed and gray appears exactly as often as
//!    it is confirmed

use crate::core::{LetterFeedback, LetterState, singular_form};
use rustc_hash::FxHashMap;

/// Per-letter tallies of one round
struct RoundTally {
    /// Green + yellow marks per letter
    min_count: FxHashMap<char, usize>,
}

impl RoundTally {
    fn new(round: &[LetterFeedback]) -> Self {
        let mut min_count = FxHashMap::default();
        for fb in round.iter().filter(|fb| fb.state.is_confirmed()) {
            *min_count.entry(fb.letter).or_insert(0) += 1;
        }
        Self { min_count }
    }

    #[inline]
    fn is_confirmed(&self, letter: char) -> bool {
        self.min_count.contains_key(&letter)
    }

    #[inline]
    fn min_count(&self, letter: char) -> usize {
        self.min_count.get(&letter).copied().unwrap_or(0)
    }
}

/// The singular form of a candidate, split into characters
struct Candidate {
    chars: Vec<char>,
}

impl Candidate {
    fn new(word: &str) -> Self {
        Self {
            chars: singular_form(word).chars().collect(),
        }
    }

    /// An out-of-range position never holds a letter
    #[inline]
    fn has_at(&self, position: usize, letter: char) -> bool {
        self.chars.get(position) == Some(&letter)
    }

    #[inline]
    fn contains(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }

    #[inline]
    fn count(&self, letter: char) -> usize {
        self.chars.iter().filter(|&&ch| ch == letter).count()
    }
}

/// Check whether `word` is consistent with one feedback round
///
/// The word is compared through its singular form, since feedback positions
/// are defined on singular length. Cells marked [`LetterState::None`] carry
/// no constraint.
///
/// # Examples
/// ```
/// use wordle_filter::core::{LetterFeedback, LetterState};
/// use wordle_filter::filter::matches_feedback;
///
/// let round = [
///     LetterFeedback::new('c', 0, LetterState::Green),
///     LetterFeedback::new('a', 1, LetterState::Yellow),
///     LetterFeedback::new('t', 2, LetterState::Gray),
/// ];
/// assert!(matches_feedback("cba", &round));
/// assert!(!matches_feedback("cab", &round));
/// assert!(!matches_feedback("cat", &round));
/// ```
#[must_use]
pub fn matches_feedback(word: &str, round: &[LetterFeedback]) -> bool {
    let candidate = Candidate::new(word);
    let tally = RoundTally::new(round);

    let rejected_by = if !greens_hold(&candidate, round) {
        Some("green")
    } else if !yellows_hold(&candidate, round) {
        Some("yellow")
    } else if !grays_hold(&candidate, round, &tally) {
        Some("gray")
    } else if !min_counts_hold(&candidate, &tally) {
        Some("min-count")
    } else if !exact_counts_hold(&candidate, round, &tally) {
        Some("exact-count")
    } else {
        None
    };

    if let Some(pass) = rejected_by {
        if log::log_enabled!(log::Level::Trace) {
            let mut counts: Vec<_> = tally.min_count.iter().collect();
            counts.sort_unstable();
            log::trace!("rejected {word} at {pass} pass (confirmed: {counts:?})");
        }
        return false;
    }
    true
}

fn greens_hold(candidate: &Candidate, round: &[LetterFeedback]) -> bool {
    round
        .iter()
        .filter(|fb| fb.state == LetterState::Green)
        .all(|fb| candidate.has_at(fb.position, fb.letter))
}

fn yellows_hold(candidate: &Candidate, round: &[LetterFeedback]) -> bool {
    round
        .iter()
        .filter(|fb| fb.state == LetterState::Yellow)
        .all(|fb| candidate.contains(fb.letter) && !candidate.has_at(fb.position, fb.letter))
}

fn grays_hold(candidate: &Candidate, round: &[LetterFeedback], tally: &RoundTally) -> bool {
    round
        .iter()
        .filter(|fb| fb.state == LetterState::Gray)
        .all(|fb| {
            if tally.is_confirmed(fb.letter) {
                !candidate.has_at(fb.position, fb.letter)
            } else {
                !candidate.contains(fb.letter)
            }
        })
}

fn min_counts_hold(candidate: &Candidate, tally: &RoundTally) -> bool {
    tally
        .min_count
        .iter()
        .all(|(&letter, &min)| candidate.count(letter) >= min)
}

/// A gray on a confirmed letter caps its count at the confirmed number
fn exact_counts_hold(candidate: &Candidate, round: &[LetterFeedback], tally: &RoundTally) -> bool {
    round
        .iter()
        .filter(|fb| fb.state == LetterState::Gray && tally.is_confirmed(fb.letter))
        .all(|fb| candidate.count(fb.letter) <= tally.min_count(fb.letter))
}
