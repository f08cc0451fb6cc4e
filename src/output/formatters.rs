//! Formatting utilities for terminal output

use crate::core::{LetterFeedback, LetterState};
use colored::Colorize;

/// Render a round as colored letter tiles
#[must_use]
pub fn colored_round(round: &[LetterFeedback]) -> String {
    round
        .iter()
        .map(|fb| {
            let tile = format!(" {} ", fb.letter.to_ascii_uppercase());
            match fb.state {
                LetterState::Green => tile.black().on_green().bold().to_string(),
                LetterState::Yellow => tile.black().on_yellow().bold().to_string(),
                LetterState::Gray => tile.white().on_bright_black().to_string(),
                LetterState::None => tile.dimmed().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_round;

    #[test]
    fn colored_round_plain_letters() {
        colored::control::set_override(false);
        let round = parse_round("cat", "GY-").unwrap();
        assert_eq!(colored_round(&round), " C  A  T ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(0.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
