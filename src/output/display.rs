//! Display functions for command results

use colored::Colorize;

use super::formatters::{format_duration, format_ladder, format_signed};
use crate::commands::{CompareReport, HintReport, ScoreReport, SearchReport, SuggestedPair};

/// Print the result of a single search
pub fn print_search_report(report: &SearchReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {} -> {}  ({})",
        "Ladder:".bright_cyan().bold(),
        report.start.text().bright_yellow().bold(),
        report.goal.text().bright_yellow().bold(),
        report.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", format_ladder(&report.result.words).green());
    println!("\n  Steps:          {}", report.result.cost);
    println!("  Words expanded: {}", report.result.nodes_expanded);
    println!("  Time:           {}", format_duration(report.result.elapsed));
}

/// Print the side-by-side strategy comparison
pub fn print_compare_report(report: &CompareReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} -> {} ",
        "STRATEGY COMPARISON:".bright_cyan().bold(),
        report.start.text().bright_yellow().bold(),
        report.goal.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for row in &report.rows {
        println!("\n{}", format!("{}:", row.strategy).bold());
        match &row.outcome {
            Ok(result) => {
                println!("  {}", format_ladder(&result.words).green());
                println!(
                    "  {} steps, {} expanded, {}",
                    result.cost,
                    result.nodes_expanded,
                    format_duration(result.elapsed)
                );
            }
            Err(err) => println!("  {}", err.to_string().red()),
        }
    }
}

/// Print a hint suggestion
pub fn print_hint_report(report: &HintReport) {
    match &report.suggestion {
        Some(word) => println!(
            "\n{} {} ({}: {} -> {}, {} expanded)",
            "Try:".bright_cyan().bold(),
            word.text().bright_yellow().bold(),
            report.strategy,
            report.current,
            report.goal,
            report.nodes_expanded
        ),
        None if report.current == report.goal => {
            println!("\n{}", "Already at the goal!".green().bold());
        }
        None => println!(
            "\n{}",
            "No hint available for this word pair".red().bold()
        ),
    }
}

/// Print the score breakdown for a round
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROUND SCORE".bright_cyan().bold(),
        format!("({})", report.difficulty).dimmed()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n  {}", format_ladder(&report.ladder));
    println!(
        "\n  Steps: {} (optimal {}), hints: {}, time: {}",
        report.player_steps,
        report.optimal_length,
        report.hints_used,
        format_duration(report.elapsed)
    );

    let bd = &report.breakdown;
    println!("\n  Base score:       {}", format_signed(i64::from(bd.base)));
    println!(
        "  Optimality bonus: {}",
        format_signed(i64::from(bd.optimality_bonus)).green()
    );
    println!("  Time:             {}", format_signed(bd.time_adjustment));
    println!(
        "  Extra moves:      {}",
        format_signed(-i64::from(bd.move_penalty))
    );
    println!(
        "  Hints:            {}",
        format_signed(-i64::from(bd.hint_penalty))
    );
    println!(
        "\n  {} {}",
        "Total:".bold(),
        bd.total.to_string().bright_yellow().bold()
    );
}

/// Print a suggested word pair
pub fn print_suggested_pair(pair: &SuggestedPair) {
    println!(
        "\n{} {} -> {}  (optimal ladder: {} steps)",
        "Suggested pair:".bright_cyan().bold(),
        pair.start.text().bright_yellow().bold(),
        pair.goal.text().bright_yellow().bold(),
        pair.optimal_length
    );
}
