//! A guessed word and its (possibly pending) feedback

use super::{FeedbackCode, Word};

/// A guess recorded on a board
///
/// The word never changes. Feedback starts unset (pending) and is filled in once
/// the guess is scored; it goes back to unset only when the guess is retracted
/// or the board is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    feedback: Option<FeedbackCode>,
}

impl Guess {
    /// A guess that has not been scored yet
    #[must_use]
    pub const fn pending(word: Word) -> Self {
        Self {
            word,
            feedback: None,
        }
    }

    #[must_use]
    pub const fn scored(word: Word, feedback: FeedbackCode) -> Self {
        Self {
            word,
            feedback: Some(feedback),
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Option<&FeedbackCode> {
        self.feedback.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.feedback.is_none()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_some_and(|code| code.is_all_correct())
    }

    pub fn set_feedback(&mut self, feedback: FeedbackCode) {
        self.feedback = Some(feedback);
    }

    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_guess_has_no_feedback() {
        let guess = Guess::pending(Word::new("roast").unwrap());
        assert!(guess.is_pending());
        assert!(!guess.is_solved());
        assert_eq!(guess.feedback(), None);
    }

    #[test]
    fn set_and_clear_feedback() {
        let mut guess = Guess::pending(Word::new("roast").unwrap());

        guess.set_feedback(FeedbackCode::parse("ccaaa").unwrap());
        assert!(!guess.is_pending());
        assert!(!guess.is_solved());

        guess.clear_feedback();
        assert!(guess.is_pending());
    }

    #[test]
    fn all_correct_solves() {
        let guess = Guess::scored(Word::new("field").unwrap(), FeedbackCode::ALL_CORRECT);
        assert!(guess.is_solved());
        assert_eq!(guess.word().text(), "field");
    }
}
