//! Board with an unknown solution, narrowed down by reported feedback

use super::filter::{LetterCounting, filter};
use super::{Added, Board, BoardError, BoardState};
use crate::core::{FeedbackCode, Guess, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::{debug, warn};

/// A board tracking which words of its universe could still be the solution
///
/// Guesses are added unscored and scored later, so one guess word can wait on
/// several boards at once. The candidate set only shrinks as feedback arrives
/// and only grows back through [`CandidateBoard::reset`].
#[derive(Debug, Clone)]
pub struct CandidateBoard<'a> {
    id: usize,
    guesses: Vec<Guess>,
    remaining: Vec<&'a Word>,
    original: &'a [Word],
    counting: LetterCounting,
}

impl<'a> CandidateBoard<'a> {
    /// Create a board whose candidates are every word of `universe`, in order
    #[must_use]
    pub fn new(id: usize, universe: &'a [Word]) -> Self {
        Self {
            id,
            guesses: Vec::new(),
            remaining: universe.iter().collect(),
            original: universe,
            counting: LetterCounting::default(),
        }
    }

    #[must_use]
    pub const fn with_counting(mut self, counting: LetterCounting) -> Self {
        self.counting = counting;
        self
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// The words still consistent with every scored guess, in universe order
    #[must_use]
    pub fn remaining(&self) -> &[&'a Word] {
        &self.remaining
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub const fn original_count(&self) -> usize {
        self.original.len()
    }

    /// The only candidate left, if exactly one remains
    #[must_use]
    pub fn sole_candidate(&self) -> Option<&'a Word> {
        match self.remaining.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    #[must_use]
    pub fn has_pending_guesses(&self) -> bool {
        self.guesses.iter().any(Guess::is_pending)
    }

    pub fn evaluated_guesses(&self) -> impl Iterator<Item = &Guess> {
        self.guesses.iter().filter(|g| !g.is_pending())
    }

    /// Guess words in submission order
    pub fn guess_words(&self) -> impl Iterator<Item = &Word> {
        self.guesses.iter().map(Guess::word)
    }

    /// Not solved, and no candidate is left
    #[must_use]
    pub fn is_broken(&self) -> bool {
        !self.is_solved() && self.remaining.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> BoardState {
        if self.is_solved() {
            BoardState::Solved
        } else if self.is_broken() {
            BoardState::Broken
        } else if self.has_pending_guesses() {
            BoardState::Pending
        } else {
            BoardState::Active
        }
    }

    /// Record `code` as the feedback for `word`, narrowing the candidates
    ///
    /// The guess is created if the board does not have it yet. `ALL_CORRECT`
    /// solves the board without touching the candidates. Terminal boards
    /// ignore the call, and so does a guess that already has feedback: only a
    /// pending guess takes a code.
    ///
    /// # Errors
    /// Returns [`BoardError::Broken`] when the feedback leaves no candidates.
    /// The board is then exactly as it was before the call: a new guess is
    /// not recorded and a pending one stays pending.
    pub fn update_result(&mut self, word: &Word, code: FeedbackCode) -> Result<(), BoardError> {
        if self.is_terminal() {
            return Ok(());
        }

        let existing = self.guesses.iter().position(|g| g.word() == word);
        if let Some(index) = existing
            && let Some(previous) = self.guesses[index].feedback()
        {
            debug!(board = self.id, %word, %previous, %code, "guess already scored");
            return Ok(());
        }

        if !code.is_all_correct() {
            let narrowed =
                filter(&self.remaining, word, &code, self.counting).map_err(|source| {
                    warn!(board = self.id, %word, %code, "feedback leaves no candidates");
                    BoardError::Broken {
                        board: self.id,
                        source,
                    }
                })?;
            self.remaining = narrowed;
        }

        match existing {
            Some(index) => self.guesses[index].set_feedback(code),
            None => self.guesses.push(Guess::scored(word.clone(), code)),
        }

        debug!(
            board = self.id,
            %word,
            %code,
            remaining = self.remaining.len(),
            "guess scored"
        );
        Ok(())
    }

    /// Parse a textual CPA code and apply it with [`Self::update_result`]
    ///
    /// # Errors
    /// Returns [`BoardError::InvalidFeedback`] for a malformed code, without
    /// touching the board, or [`BoardError::Broken`] as `update_result` does.
    pub fn update_result_str(&mut self, word: &Word, code: &str) -> Result<(), BoardError> {
        let code = FeedbackCode::parse(code)?;
        self.update_result(word, code)
    }

    /// The word the player should try next on this board
    ///
    /// The oldest unscored guess comes first. Otherwise a random remaining
    /// candidate, preferring words not guessed yet, or `None` when the board
    /// is broken.
    pub fn next_guess_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Word> {
        if let Some(pending) = self.guesses.iter().find(|g| g.is_pending()) {
            return Some(pending.word().clone());
        }

        if self.is_broken() {
            return None;
        }

        let unguessed: Vec<&'a Word> = self
            .remaining
            .iter()
            .copied()
            .filter(|word| !self.has_guessed(word))
            .collect();
        let pool = if unguessed.is_empty() {
            &self.remaining
        } else {
            &unguessed
        };
        pool.choose(rng).map(|&word| word.clone())
    }

    /// [`Self::next_guess_with`] using the thread-local RNG
    #[must_use]
    pub fn next_guess(&self) -> Option<Word> {
        self.next_guess_with(&mut rand::rng())
    }

    /// Unscore every guess and restore the full universe
    ///
    /// Guess words stay on the board, now pending again.
    pub fn reset(&mut self) {
        for guess in &mut self.guesses {
            guess.clear_feedback();
        }
        self.remaining = self.original.iter().collect();
        debug!(board = self.id, "board reset");
    }

    /// Drop every guess that has not been scored
    pub fn clear_pending_guesses(&mut self) {
        self.guesses.retain(|g| !g.is_pending());
    }
}

impl Board for CandidateBoard<'_> {
    fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    fn add_guess(&mut self, word: &Word) -> Added {
        if self.is_terminal() || self.has_guessed(word) {
            return Added::Ignored;
        }

        self.guesses.push(Guess::pending(word.clone()));
        Added::Pending
    }

    fn is_terminal(&self) -> bool {
        self.is_solved() || self.is_broken()
    }
}
