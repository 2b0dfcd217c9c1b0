//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, keyboard_rows, paint_letter};
use crate::commands::ScoreResult;
use crate::core::ROW_AMOUNT;
use crate::game::Game;
use crate::store::Statistics;
use colored::Colorize;

/// Print the board and keyboard of a game
pub fn print_board(game: &Game) {
    let board = game.board();
    println!();
    for row in 0..ROW_AMOUNT {
        let letters = board.row_letters(row);
        let line: String = match board.row_feedback(row) {
            Some(feedback) => {
                let letters = letters.map(|l| l.unwrap_or(b' '));
                colored_row(&letters, &feedback)
            }
            None => letters
                .iter()
                .map(|l| paint_letter(l.map_or('·', char::from), None).to_string())
                .collect(),
        };
        println!("  {line}");
    }

    println!();
    for (indent, line) in keyboard_rows(game.keyboard()).iter().enumerate() {
        println!("  {}{line}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} → {}",
        result.guess.text().bright_white().bold(),
        result.secret.text().bright_yellow().bold()
    );
    println!(
        "  {}  {}",
        colored_row(result.guess.chars(), &result.feedback),
        result.feedback.to_emoji()
    );
    println!(
        "  {} correct, {} present",
        result.feedback.count_correct(),
        result.feedback.count_present()
    );
}

/// Print a profile's statistics
pub fn print_statistics(profile: &str, stats: &Statistics) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(
        " {} {} ",
        "STATISTICS:".bright_cyan().bold(),
        profile.bright_yellow().bold()
    );
    println!("{}", "═".repeat(50).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Played:          {}", stats.played);
    println!(
        "   Won:             {}",
        format!("{} ({:.0}%)", stats.won, stats.win_rate()).green()
    );
    println!("   Lost:            {}", stats.lost.to_string().red());
    println!("   Current streak:  {}", stats.current_streak);
    println!(
        "   Max streak:      {}",
        stats.max_streak.to_string().bright_yellow().bold()
    );

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 30);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
}
