//! Board export and replay
//!
//! A board is persisted as its guess log only: ids, words and feedback codes in
//! submission order. Replaying the log against the original universe rebuilds
//! the candidate set, so the set itself is never stored.

use super::filter::LetterCounting;
use super::{Board, BoardError, CandidateBoard};
use crate::core::{FeedbackCode, FeedbackError, Word, WordError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One logged guess; an empty `result` means the guess was still pending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub word: String,
    #[serde(default)]
    pub result: String,
}

/// The persisted state of one [`CandidateBoard`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRecord {
    pub id: usize,
    #[serde(default)]
    pub guesses: Vec<GuessRecord>,
}

/// A board record that cannot be replayed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("board {board}: invalid word '{word}': {source}")]
    InvalidWord {
        board: usize,
        word: String,
        #[source]
        source: WordError,
    },
    #[error("board {board}: invalid result for '{word}': {source}")]
    InvalidResult {
        board: usize,
        word: String,
        #[source]
        source: FeedbackError,
    },
    #[error(transparent)]
    Inconsistent(#[from] BoardError),
}

impl GuessRecord {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.result.trim().is_empty()
    }
}

impl BoardRecord {
    /// Parse every word and result up front
    fn parse(&self) -> Result<Vec<(Word, Option<FeedbackCode>)>, ReplayError> {
        self.guesses
            .iter()
            .map(|record| {
                let word = Word::new(&record.word).map_err(|source| ReplayError::InvalidWord {
                    board: self.id,
                    word: record.word.clone(),
                    source,
                })?;
                let code = if record.is_pending() {
                    None
                } else {
                    let code = FeedbackCode::parse(&record.result).map_err(|source| {
                        ReplayError::InvalidResult {
                            board: self.id,
                            word: record.word.clone(),
                            source,
                        }
                    })?;
                    Some(code)
                };
                Ok((word, code))
            })
            .collect()
    }

    /// Check every word and result without building a board
    ///
    /// # Errors
    /// Returns the first malformed word or result.
    pub fn validate(&self) -> Result<(), ReplayError> {
        self.parse().map(|_| ())
    }
}

impl<'a> CandidateBoard<'a> {
    /// Export the guess log
    #[must_use]
    pub fn to_record(&self) -> BoardRecord {
        BoardRecord {
            id: self.id(),
            guesses: self
                .guesses()
                .iter()
                .map(|guess| GuessRecord {
                    word: guess.word().text().to_string(),
                    result: guess.feedback().map(ToString::to_string).unwrap_or_default(),
                })
                .collect(),
        }
    }

    /// Rebuild a board by replaying `record` against `universe`
    ///
    /// Each guess is added, then scored if it has a result, in log order. No
    /// random choices are made.
    ///
    /// # Errors
    /// Returns [`ReplayError`] for a malformed word or result, or when the log
    /// does not replay consistently against `universe`.
    pub fn replay(
        record: &BoardRecord,
        universe: &'a [Word],
        counting: LetterCounting,
    ) -> Result<Self, ReplayError> {
        let mut board = Self::new(record.id, universe).with_counting(counting);

        for (word, code) in record.parse()? {
            board.add_guess(&word);
            if let Some(code) = code {
                board.update_result(&word, code)?;
            }
        }

        Ok(board)
    }
}
