//! Display functions for command results

use super::formatters::{colored_round, create_progress_bar};
use crate::commands::{FilterResult, NormalizeResult};
use crate::core::round_to_emoji;
use colored::Colorize;

/// Print how each word normalizes
pub fn print_normalize_results(results: &[NormalizeResult]) {
    println!(
        "{:<16} {:<16} {:>6}  {:<6}  {}",
        "WORD".bright_cyan().bold(),
        "SINGULAR".bright_cyan().bold(),
        "LEN".bright_cyan().bold(),
        "PLURAL".bright_cyan().bold(),
        "RULE".bright_cyan().bold()
    );
    for result in results {
        let plural = if result.plural {
            "yes".green()
        } else {
            "no".bright_black()
        };
        println!(
            "{:<16} {:<16} {:>6}  {:<6}  {}",
            result.word,
            result.singular.bright_yellow(),
            result.effective_length,
            plural,
            result.rule.unwrap_or("-")
        );
    }
}

/// Print the result of filtering a pool
pub fn print_filter_result(result: &FilterResult, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Pool: {} words, {} with effective length {}",
        result.pool_size,
        result.length_matches.to_string().bright_yellow().bold(),
        result.length
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let bar = create_progress_bar(
            step.candidates_after as f64,
            result.length_matches as f64,
            20,
        );
        println!(
            "\nRound {}: {} {}",
            i + 1,
            colored_round(&step.round),
            round_to_emoji(&step.round)
        );
        println!(
            "  Candidates: {} → {}  [{}]",
            step.candidates_before,
            step.candidates_after,
            bar.green()
        );
    }

    println!();
    if result.survivors.is_empty() {
        println!("{}", "❌ No candidates remain".red().bold());
        return;
    }

    println!(
        "{}",
        format!("✅ {} candidates remain", result.survivors.len())
            .green()
            .bold()
    );
    for word in result.survivors.iter().take(limit) {
        println!("  • {word}");
    }
    if result.survivors.len() > limit {
        println!("  …and {} more", result.survivors.len() - limit);
    }
}
