//! Formatting utilities for terminal output

use crate::core::{FeedbackCode, Guess, Mark};
use colored::Colorize;

/// Format a feedback code as an emoji string
#[must_use]
pub fn feedback_to_emoji(code: &FeedbackCode) -> String {
    code.marks()
        .iter()
        .map(|mark| match mark {
            Mark::Correct => '🟩',
            Mark::Present => '🟨',
            Mark::Absent => '⬜',
        })
        .collect()
}

/// Render a guess in upper case, one colored cell per letter
///
/// Correct letters get a green background and Present letters a yellow one.
/// Absent letters and unscored guesses are left plain.
#[must_use]
pub fn colored_guess(guess: &Guess) -> String {
    let text = guess.word().text().to_uppercase();
    let Some(code) = guess.feedback() else {
        return text.dimmed().to_string();
    };

    text.chars()
        .zip(code.marks())
        .map(|(letter, mark)| {
            let cell = letter.to_string();
            match mark {
                Mark::Correct => cell.black().on_green().to_string(),
                Mark::Present => cell.black().on_yellow().to_string(),
                Mark::Absent => cell,
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Number of decimal digits in `n`, used to right-align counts
#[must_use]
pub fn digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}
