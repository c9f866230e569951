//! Core domain types for the feedback engine
//!
//! Words, feedback codes and guesses. Everything here is pure and has no I/O.

mod feedback;
mod guess;
mod word;

pub use feedback::{FeedbackCode, FeedbackError, Mark};
pub use guess::Guess;
pub use word::{WORD_LENGTH, Word, WordError};
