//! Display functions for boards and command results

use super::formatters::{colored_guess, create_progress_bar, digits};
use crate::board::CandidateBoard;
use crate::commands::{BestStartResult, ShowdownResult};
use crate::core::Guess;
use colored::Colorize;
use std::io::{self, Write};

/// Write the banner of a board followed by its scored guesses
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_board_header<W: Write>(out: &mut W, board: &CandidateBoard) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "\t\t{}",
        format!("[BOARD {}]", board.id()).bright_cyan().bold()
    )?;
    for guess in board.evaluated_guesses() {
        writeln!(out, "{}", colored_guess(guess))?;
    }
    writeln!(out)
}

/// Write every guess on its own line, then a blank line
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_guess_history<W: Write>(out: &mut W, guesses: &[Guess]) -> io::Result<()> {
    for guess in guesses {
        writeln!(out, "{}", colored_guess(guess))?;
    }
    writeln!(out)
}

/// Print the result of a showdown
pub fn print_showdown_result(result: &ShowdownResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SHOWDOWN RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let openers: Vec<String> = result.openers.iter().map(|w| w.text().to_uppercase()).collect();
    println!("\n   Openers:          {}", openers.join("  ").bright_yellow());
    println!("   Matches:          {}", result.matches);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses())
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = result.share(count);
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:>2}: {} {count:6} ({pct:5.1}%)", bar.green());
    }
    if !result.broken.is_empty() {
        let pct = result.share(result.broken.len());
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {}: {} {:6} ({pct:5.1}%)",
            "--".red(),
            bar.red(),
            result.broken.len()
        );
    }

    if !result.broken.is_empty() {
        println!("\n💥 {}", "Broken boards:".red().bold());
        for broken in &result.broken {
            let guesses: Vec<String> = broken
                .guesses
                .iter()
                .map(|w| w.text().to_uppercase())
                .collect();
            println!(
                "   {}  {}",
                broken.solution.text().to_uppercase().bright_white().bold(),
                guesses.join("  ")
            );
        }
    }

    let slow = result.slow_solutions();
    println!(
        "\n🐢 {} {}",
        slow.len().to_string().bright_yellow(),
        "solutions needed six or more guesses".bright_cyan()
    );
    if !slow.is_empty() {
        let listed: Vec<String> = slow
            .iter()
            .map(|(word, count)| format!("{}({count})", word.text().to_uppercase()))
            .collect();
        println!("   {}", listed.join("  "));
    }
}

/// Print the `top` best openers of a best-start run
pub fn print_best_start_result(result: &BestStartResult, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST STARTING WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Openers scored:   {}", result.scores.len());
    println!("   Solutions each:   {}", result.solutions);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n🏆 {}", "Settled by a single guess:".bright_cyan().bold());
    let width = digits(result.scores.len());
    for (rank, score) in result.top(top).iter().enumerate() {
        let pct = if result.solutions == 0 {
            0.0
        } else {
            score.solves as f64 / result.solutions as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 30);
        println!(
            "   {:>width$}. {}  {} {:6} ({pct:5.1}%)",
            rank + 1,
            score.word.text().to_uppercase().bright_white().bold(),
            bar.green(),
            score.solves
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackCode, Word};

    #[test]
    fn header_lists_scored_guesses_only() {
        let universe: Vec<Word> = ["haunt", "taunt", "roast"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let mut board = CandidateBoard::new(3, &universe);
        board.add_guess(&Word::new("field").unwrap());
        board
            .update_result(&Word::new("roast").unwrap(), FeedbackCode::parse("aapac").unwrap())
            .unwrap();

        let mut out = Vec::new();
        write_board_header(&mut out, &board).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("[BOARD 3]"));
        assert!(text.contains('S'));
        assert!(!text.contains("FIELD"));
        assert_eq!(text.lines().count(), 4);
    }
}
