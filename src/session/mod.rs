//! Multi-board session state machine
//!
//! A session keeps several [`CandidateBoard`]s in step with one shared guess
//! stream. Every board starts with the same openers; a guess scored on the
//! board being played becomes a pending guess on every other live board, so the
//! player meets it there too.
//!
//! The session never reads input itself. A driver asks [`Session::prompt`] what
//! to show, then reports back with [`Session::submit`] or one of the navigation
//! operations.

pub mod config;
pub mod store;

pub use config::{ConfigError, SessionConfig};
pub use store::{SessionRecord, StoreError};

use crate::board::{Board, BoardError, CandidateBoard};
use crate::core::{FeedbackCode, Word};
use rand::Rng;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from driving a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("every board is finished")]
    NoActiveBoard,
    #[error("{0} is not in the word list")]
    NotInDictionary(Word),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// What the driver should show next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Every board is solved or broken
    Finished,
    /// Ask for the feedback code of `word` on board `board`
    Guess {
        board: usize,
        word: Word,
        remaining: usize,
    },
    /// One candidate was left on `board`; it has been accepted as the answer
    AutoSolved { board: usize, answer: Word },
    /// `board` ran out of candidates
    Broken { board: usize },
}

/// Result of a successful [`Session::submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// Keep playing the same board
    Continue,
    /// The board is solved
    Solved,
    /// The board has nothing pending but others do; play moves on
    Advanced,
}

/// A set of boards played together against one guess stream
#[derive(Debug, Clone)]
pub struct Session<'a> {
    config: SessionConfig,
    universe: &'a [Word],
    boards: Vec<CandidateBoard<'a>>,
    current: Option<usize>,
}

impl<'a> Session<'a> {
    /// Create `config.board_count` boards over `universe`
    ///
    /// Unless `manual_openers` is set, the configured openers are added to
    /// every board as pending guesses.
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(universe: &'a [Word], config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let boards = (1..=config.board_count)
            .map(|id| CandidateBoard::new(id, universe).with_counting(config.letter_counting))
            .collect();
        let openers = if config.manual_openers {
            Vec::new()
        } else {
            config.opener_words()?
        };

        let mut session = Self {
            config,
            universe,
            boards,
            current: None,
        };
        for opener in &openers {
            session.seed(opener);
        }

        debug!(boards = session.boards.len(), openers = openers.len(), "session started");
        Ok(session)
    }

    /// Rebuild a session from a saved record
    ///
    /// # Errors
    /// Returns `StoreError` if the record is malformed or does not replay.
    pub fn restore(
        universe: &'a [Word],
        config: SessionConfig,
        record: &SessionRecord,
    ) -> Result<Self, StoreError> {
        let boards = Self::replay_boards(universe, &config, record)?;
        Ok(Self {
            config,
            universe,
            boards,
            current: None,
        })
    }

    fn replay_boards(
        universe: &'a [Word],
        config: &SessionConfig,
        record: &SessionRecord,
    ) -> Result<Vec<CandidateBoard<'a>>, StoreError> {
        record.validate()?;
        record
            .boards
            .iter()
            .map(|board| {
                CandidateBoard::replay(board, universe, config.letter_counting)
                    .map_err(StoreError::from)
            })
            .collect()
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn universe(&self) -> &'a [Word] {
        self.universe
    }

    #[must_use]
    pub fn boards(&self) -> &[CandidateBoard<'a>] {
        &self.boards
    }

    #[must_use]
    pub fn board(&self, id: usize) -> Option<&CandidateBoard<'a>> {
        self.boards.iter().find(|b| b.id() == id)
    }

    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.universe.contains(word)
    }

    /// Add an opening guess to every board
    ///
    /// # Errors
    /// Returns `SessionError::NotInDictionary` for a word outside the universe,
    /// unless the configuration allows such guesses.
    pub fn add_opener(&mut self, word: &Word) -> Result<(), SessionError> {
        if !self.config.allow_non_dictionary_guesses && !self.contains_word(word) {
            return Err(SessionError::NotInDictionary(word.clone()));
        }
        self.seed(word);
        Ok(())
    }

    fn seed(&mut self, word: &Word) {
        for board in &mut self.boards {
            board.add_guess(word);
        }
    }

    /// Every board is solved or broken
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.boards.iter().all(Board::is_terminal)
    }

    /// The board being played, choosing one if needed
    ///
    /// Keeps the current board while it is live. Otherwise, with auto-advance,
    /// the first live board with pending guesses; failing that, the first live
    /// board.
    pub fn current_board(&mut self) -> Option<&CandidateBoard<'a>> {
        self.present().map(|index| &self.boards[index])
    }

    fn present(&mut self) -> Option<usize> {
        if let Some(index) = self.current
            && !self.boards[index].is_terminal()
        {
            return Some(index);
        }

        let live = || self.boards.iter().enumerate().filter(|(_, b)| !b.is_terminal());
        let chosen = live()
            .find(|(_, b)| self.config.auto_advance && b.has_pending_guesses())
            .or_else(|| live().next())
            .map(|(index, _)| index);

        self.current = chosen;
        chosen
    }

    /// Decide what to ask the player for next, using `rng` for random picks
    ///
    /// A board with a single candidate is solved on the spot: pending guesses
    /// are dropped, the candidate is recorded as the answer, and the answer is
    /// passed on to the other boards like any scored guess.
    pub fn prompt_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Prompt {
        let Some(index) = self.present() else {
            return Prompt::Finished;
        };
        let board = &mut self.boards[index];
        let id = board.id();

        if let Some(answer) = board.sole_candidate() {
            board.clear_pending_guesses();
            // A lone candidate always survives its own all-correct code
            let _ = board.update_result(answer, FeedbackCode::ALL_CORRECT);
            self.propagate(index, answer);
            self.current = None;
            debug!(board = id, %answer, "auto-solved");
            return Prompt::AutoSolved {
                board: id,
                answer: answer.clone(),
            };
        }

        match board.next_guess_with(rng) {
            Some(word) => Prompt::Guess {
                board: id,
                word,
                remaining: board.remaining_count(),
            },
            None => {
                self.current = None;
                Prompt::Broken { board: id }
            }
        }
    }

    /// [`Self::prompt_with`] using the thread-local RNG
    pub fn prompt(&mut self) -> Prompt {
        self.prompt_with(&mut rand::rng())
    }

    /// Apply the feedback for `word` on the current board
    ///
    /// On success the word becomes a pending guess on every other live board.
    ///
    /// # Errors
    /// Returns `SessionError::NoActiveBoard` when every board is finished, or
    /// `SessionError::Board` when the code leaves no candidates. The board is
    /// then unchanged and stays current.
    pub fn submit(&mut self, word: &Word, code: FeedbackCode) -> Result<Submitted, SessionError> {
        let index = self.present().ok_or(SessionError::NoActiveBoard)?;
        self.boards[index].update_result(word, code)?;
        self.propagate(index, word);

        if self.boards[index].is_solved() {
            self.current = None;
            return Ok(Submitted::Solved);
        }

        if self.should_advance(index) {
            self.current = None;
            debug!(from = self.boards[index].id(), "auto-advance");
            return Ok(Submitted::Advanced);
        }

        Ok(Submitted::Continue)
    }

    fn propagate(&mut self, from: usize, word: &Word) {
        for (index, board) in self.boards.iter_mut().enumerate() {
            if index != from {
                board.add_guess(word);
            }
        }
    }

    fn should_advance(&self, index: usize) -> bool {
        let board = &self.boards[index];
        self.config.auto_advance
            && !board.is_solved()
            && board.remaining_count() > 1
            && !board.has_pending_guesses()
            && self
                .boards
                .iter()
                .enumerate()
                .any(|(other, b)| other != index && !b.is_terminal() && b.has_pending_guesses())
    }

    /// Move to the next live board, wrapping to the first
    ///
    /// Returns the id of the board now being played.
    pub fn next_board(&mut self) -> Option<usize> {
        self.step(true)
    }

    /// Move to the previous live board, wrapping to the last
    ///
    /// Returns the id of the board now being played.
    pub fn previous_board(&mut self) -> Option<usize> {
        self.step(false)
    }

    fn step(&mut self, forward: bool) -> Option<usize> {
        let current = self.present()?;
        let live: Vec<usize> = (0..self.boards.len())
            .filter(|&i| !self.boards[i].is_terminal())
            .collect();
        let position = live.iter().position(|&i| i == current)?;
        let next = if forward {
            live[(position + 1) % live.len()]
        } else {
            live[(position + live.len() - 1) % live.len()]
        };

        self.current = Some(next);
        let id = self.boards[next].id();
        debug!(board = id, "switched board");
        Some(id)
    }

    /// Reset the current board to its full universe
    ///
    /// Its guesses stay, pending again, and board selection starts over.
    /// Returns the id of the board that was reset.
    pub fn reset_current(&mut self) -> Option<usize> {
        let index = self.present()?;
        self.boards[index].reset();
        self.current = None;
        Some(self.boards[index].id())
    }

    /// The guess log of every board
    #[must_use]
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            boards: self.boards.iter().map(CandidateBoard::to_record).collect(),
        }
    }

    /// Replace every board with the ones described by `record`
    ///
    /// # Errors
    /// Returns `StoreError` if the record is malformed or does not replay; the
    /// session is left as it was.
    pub fn load_record(&mut self, record: &SessionRecord) -> Result<(), StoreError> {
        self.boards = Self::replay_boards(self.universe, &self.config, record)?;
        self.current = None;
        Ok(())
    }

    /// Save the session to `path`
    ///
    /// # Errors
    /// Returns `StoreError` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        store::write_record(path, &self.to_record())?;
        info!(path = %path.display(), boards = self.boards.len(), "session saved");
        Ok(())
    }

    /// Load the session saved at `path`, replacing the current boards
    ///
    /// # Errors
    /// Returns `StoreError` if the file is unreadable, malformed, or does not
    /// replay; the session is left as it was.
    pub fn load(&mut self, path: &Path) -> Result<(), StoreError> {
        let record = store::read_record(path)?;
        self.load_record(&record)?;
        info!(path = %path.display(), boards = self.boards.len(), "session loaded");
        Ok(())
    }
}
