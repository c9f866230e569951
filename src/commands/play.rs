//! Casual play
//!
//! A single [`KnownBoard`] with a random solution: the player guesses, the
//! board colors the guesses, until the word is found. Letters ruled out by
//! earlier feedback are struck from the alphabet shown before each guess.

use crate::board::{Added, Board, KnownBoard};
use crate::core::{FeedbackCode, Mark, Word};
use crate::output::display::write_guess_history;
use crate::output::formatters::feedback_to_emoji;
use anyhow::{Result, bail};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::io::{BufRead, Write};

/// Play one game against a random word from `universe`
///
/// Returns the number of guesses taken, or `None` if input ended first.
///
/// # Errors
///
/// Fails on an empty universe or an I/O error.
pub fn run_play<I, O, R>(
    universe: &[Word],
    input: &mut I,
    out: &mut O,
    rng: &mut R,
) -> Result<Option<usize>>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let Some(solution) = universe.choose(rng) else {
        bail!("word list is empty");
    };
    play_game(solution.clone(), universe, input, out)
}

fn play_game<I: BufRead, O: Write>(
    solution: Word,
    universe: &[Word],
    input: &mut I,
    out: &mut O,
) -> Result<Option<usize>> {
    let mut board = KnownBoard::new(solution);
    let mut letters: Vec<u8> = (b'a'..=b'z').collect();

    loop {
        writeln!(out)?;
        write_guess_history(out, board.guesses())?;
        if board.is_solved() {
            writeln!(out, "Solved in {} guesses.", board.guess_count())?;
            for code in board.guesses().iter().filter_map(|g| g.feedback()) {
                writeln!(out, "{}", feedback_to_emoji(code))?;
            }
            return Ok(Some(board.guess_count()));
        }

        let remaining: Vec<String> = letters
            .iter()
            .map(|&c| char::from(c.to_ascii_uppercase()).to_string())
            .collect();
        writeln!(out, "\tRemaining Letters: {}", remaining.join(" "))?;
        writeln!(out)?;

        let Some(word) = read_word(universe, input, out)? else {
            return Ok(None);
        };
        if let Added::Scored(code) = board.add_guess(&word) {
            letters.retain(|&c| !ruled_out(&word, &code, c));
        }
    }
}

/// The letter sits on an `Absent` position and is not credited anywhere else
fn ruled_out(guess: &Word, code: &FeedbackCode, letter: u8) -> bool {
    let mut marks = guess
        .chars()
        .iter()
        .zip(code.marks())
        .filter(|&(&c, _)| c == letter)
        .map(|(_, &mark)| mark)
        .peekable();
    marks.peek().is_some() && marks.all(|mark| mark == Mark::Absent)
}

fn read_word<I: BufRead, O: Write>(
    universe: &[Word],
    input: &mut I,
    out: &mut O,
) -> Result<Option<Word>> {
    loop {
        write!(out, "Guess? ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match Word::new(&line) {
            Ok(word) if universe.contains(&word) => return Ok(Some(word)),
            _ => writeln!(out, "Not a valid word")?,
        }
    }
}
