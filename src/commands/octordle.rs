//! Interactive multi-board solver
//!
//! The player types every suggested guess into the real game and reports the
//! colors back as a CPA code. Besides codes, the feedback prompt understands:
//!
//! | input | action                              |
//! |-------|-------------------------------------|
//! | `n`   | next board                          |
//! | `p`   | previous board                      |
//! | `rr`  | reset the current board             |
//! | `ss`  | save the session                    |
//! | `ll`  | load the saved session              |
//! | `q`   | quit                                |
//! | empty | suggest a different random word     |

use crate::board::BoardError;
use crate::core::{FeedbackCode, FeedbackError, Word};
use crate::output::display::write_board_header;
use crate::output::formatters::digits;
use crate::session::{Prompt, Session, SessionConfig, SessionError, Submitted};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::debug;

/// A line typed at the feedback prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Reset,
    Save,
    Load,
    Quit,
    Reroll,
    Feedback(FeedbackCode),
}

impl Command {
    /// Parse one input line; anything that is not a command must be a CPA code
    ///
    /// # Errors
    /// Returns `FeedbackError` for a line that is neither.
    pub fn parse(line: &str) -> Result<Self, FeedbackError> {
        let line = line.trim();
        let command = match line.to_ascii_lowercase().as_str() {
            "" => Self::Reroll,
            "n" => Self::Next,
            "p" => Self::Previous,
            "rr" => Self::Reset,
            "ss" => Self::Save,
            "ll" => Self::Load,
            "q" => Self::Quit,
            _ => Self::Feedback(FeedbackCode::parse(line)?),
        };
        Ok(command)
    }
}

/// How a single session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every board is solved or broken
    Finished,
    /// The player quit or input ran out
    Quit,
}

/// Drives [`Session`]s over a line-based input and a text output
pub struct Octordle<'a, I, O, R> {
    universe: &'a [Word],
    config: SessionConfig,
    input: I,
    out: O,
    rng: R,
}

impl<'a, I: BufRead, O: Write, R: Rng> Octordle<'a, I, O, R> {
    pub const fn new(
        universe: &'a [Word],
        config: SessionConfig,
        input: I,
        out: O,
        rng: R,
    ) -> Self {
        Self {
            universe,
            config,
            input,
            out,
            rng,
        }
    }

    /// Play sessions until one is quit, or just one unless endless replay is on
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration or an I/O error.
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            let started = Instant::now();
            let outcome = self.play_session()?;
            writeln!(self.out, "Completed in {}s", started.elapsed().as_secs())?;

            if outcome == Outcome::Quit || !self.config.endless_replay {
                return Ok(outcome);
            }
            debug!("starting next session");
        }
    }

    /// Play a single session to the end
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration or an I/O error.
    pub fn play_session(&mut self) -> Result<Outcome> {
        let mut session = Session::new(self.universe, self.config.clone())?;
        if self.config.manual_openers && !self.add_openers(&mut session)? {
            return Ok(Outcome::Quit);
        }

        let mut shown = None;
        loop {
            match session.prompt_with(&mut self.rng) {
                Prompt::Finished => return Ok(Outcome::Finished),
                Prompt::AutoSolved { board, answer } => {
                    self.show(&session, &mut shown, board)?;
                    writeln!(self.out, "ANSWER: {}.", answer.text().to_uppercase())?;
                    writeln!(self.out)?;
                    shown = None;
                }
                Prompt::Broken { board } => {
                    self.show(&session, &mut shown, board)?;
                    writeln!(self.out, "{}", "No more words. Board broken.".red())?;
                    writeln!(self.out)?;
                    shown = None;
                }
                Prompt::Guess {
                    board,
                    word,
                    remaining,
                } => {
                    self.show(&session, &mut shown, board)?;
                    let width = session.board(board).map_or(1, |b| digits(b.original_count()));
                    write!(
                        self.out,
                        "[{remaining:>width$}] Guess {}. CPA? ",
                        word.text().to_uppercase()
                    )?;

                    let Some(command) = self.read_command()? else {
                        return Ok(Outcome::Quit);
                    };
                    if !self.apply(&mut session, &word, command, &mut shown)? {
                        return Ok(Outcome::Quit);
                    }
                }
            }
        }
    }

    /// Prompt for opening guesses until an empty line
    ///
    /// Returns `false` if input ran out.
    fn add_openers(&mut self, session: &mut Session) -> Result<bool> {
        loop {
            write!(self.out, "Add guess? ")?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            if line.is_empty() {
                return Ok(true);
            }

            let added = Word::new(&line)
                .map_err(|e| e.to_string())
                .and_then(|word| session.add_opener(&word).map_err(|e| e.to_string()));
            if let Err(message) = added {
                write!(self.out, "{message}. ")?;
            }
        }
    }

    /// Carry out one command; returns `false` to quit
    fn apply(
        &mut self,
        session: &mut Session,
        word: &Word,
        command: Command,
        shown: &mut Option<usize>,
    ) -> Result<bool> {
        match command {
            Command::Quit => return Ok(false),
            Command::Reroll => {}
            Command::Next => {
                writeln!(self.out)?;
                session.next_board();
            }
            Command::Previous => {
                writeln!(self.out)?;
                session.previous_board();
            }
            Command::Reset => {
                if let Some(id) = session.reset_current() {
                    writeln!(self.out, "Board {id} reset.")?;
                }
                *shown = None;
            }
            Command::Save => {
                let path = self.config.save_path.clone();
                match session.save(&path) {
                    Ok(()) => writeln!(self.out, "Game saved to {}", path.display())?,
                    Err(e) => writeln!(self.out, "{}", e.to_string().red())?,
                }
                *shown = None;
            }
            Command::Load => {
                let path = self.config.save_path.clone();
                match session.load(&path) {
                    Ok(()) => writeln!(self.out, "Game loaded from {}", path.display())?,
                    Err(e) => writeln!(self.out, "{}", e.to_string().red())?,
                }
                *shown = None;
            }
            Command::Feedback(code) => match session.submit(word, code) {
                Ok(Submitted::Continue) => {}
                Ok(Submitted::Solved) => {
                    writeln!(self.out)?;
                    *shown = None;
                }
                Ok(Submitted::Advanced) => *shown = None,
                Err(SessionError::Board(BoardError::Broken { .. })) => {
                    writeln!(self.out, "{}", "Broken board, invalid CPA discarded.".red())?;
                }
                Err(e) => return Err(e.into()),
            },
        }
        Ok(true)
    }

    /// Print the board banner when play moves to a different board
    fn show(&mut self, session: &Session, shown: &mut Option<usize>, board: usize) -> Result<()> {
        if *shown != Some(board)
            && let Some(current) = session.board(board)
        {
            write_board_header(&mut self.out, current)?;
            *shown = Some(board);
        }
        Ok(())
    }

    /// Read lines until one is a command or a well-formed code
    fn read_command(&mut self) -> Result<Option<Command>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match Command::parse(&line) {
                Ok(command) => return Ok(Some(command)),
                Err(e) => write!(self.out, "{e}. CPA? ")?,
            }
        }
    }

    /// Flush pending output, then read one trimmed line; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
