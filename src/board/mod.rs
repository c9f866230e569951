//! Boards: ordered guess lists with solved/terminal status
//!
//! Two variants share the [`Board`] capability set:
//! - [`KnownBoard`] knows its solution and scores guesses itself.
//! - [`CandidateBoard`] does not; it tracks the words that could still be the
//!   solution and is scored from outside with [`CandidateBoard::update_result`].

mod candidate;
pub mod filter;
mod known;
pub mod record;

pub use candidate::CandidateBoard;
pub use filter::{Inconsistent, LetterCounting, filter};
pub use known::KnownBoard;
pub use record::{BoardRecord, GuessRecord, ReplayError};

use crate::core::{FeedbackCode, FeedbackError, Guess, Word};
use thiserror::Error;

/// Outcome of [`Board::add_guess`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Added {
    /// The board is terminal or already has this word; nothing changed
    Ignored,
    /// Recorded without feedback, waiting to be scored
    Pending,
    /// Recorded and scored immediately
    Scored(FeedbackCode),
}

/// Lifecycle of a [`CandidateBoard`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardState {
    /// Has guesses waiting for feedback
    Pending,
    /// Fully scored, still open
    Active,
    Solved,
    /// No candidate left
    Broken,
}

/// Errors from scoring a guess on a [`CandidateBoard`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error(transparent)]
    InvalidFeedback(#[from] FeedbackError),
    #[error("board {board} broken, invalid CPA discarded: {source}")]
    Broken {
        board: usize,
        #[source]
        source: Inconsistent,
    },
}

/// Capabilities shared by every board
pub trait Board {
    /// Guesses in submission order
    fn guesses(&self) -> &[Guess];

    /// Record a guess
    ///
    /// A no-op returning [`Added::Ignored`] when the board is terminal or the
    /// word was already guessed, so callers can feed every board without
    /// checking first.
    fn add_guess(&mut self, word: &Word) -> Added;

    fn is_solved(&self) -> bool {
        self.guesses().iter().any(Guess::is_solved)
    }

    fn is_terminal(&self) -> bool {
        self.is_solved()
    }

    fn has_guessed(&self, word: &Word) -> bool {
        self.guesses().iter().any(|g| g.word() == word)
    }

    fn guess_count(&self) -> usize {
        self.guesses().len()
    }
}
