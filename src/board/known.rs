//! Board with a fixed, known solution

use super::{Added, Board};
use crate::core::{FeedbackCode, Guess, Word};

/// A board that scores every guess against its own solution
#[derive(Debug, Clone)]
pub struct KnownBoard {
    solution: Word,
    guesses: Vec<Guess>,
}

impl KnownBoard {
    #[must_use]
    pub const fn new(solution: Word) -> Self {
        Self {
            solution,
            guesses: Vec::new(),
        }
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }
}

impl Board for KnownBoard {
    fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    fn add_guess(&mut self, word: &Word) -> Added {
        if self.is_terminal() || self.has_guessed(word) {
            return Added::Ignored;
        }

        let code = FeedbackCode::evaluate(word, &self.solution);
        self.guesses.push(Guess::scored(word.clone(), code));
        Added::Scored(code)
    }
}
