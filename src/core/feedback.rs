//! Feedback codes and known-solution scoring
//!
//! A feedback code holds one mark per letter position:
//! - `C` = Correct (right letter, right position)
//! - `P` = Present (letter in word, wrong position)
//! - `A` = Absent (letter not claimable anywhere else)
//!
//! Codes parse case-insensitively and always display upper-case.

use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
}

impl Mark {
    /// The CPA symbol for this mark
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'C',
            Self::Present => 'P',
            Self::Absent => 'A',
        }
    }

    /// Parse a CPA symbol, ignoring case
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'C' => Some(Self::Correct),
            'P' => Some(Self::Present),
            'A' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Malformed feedback input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("CPA {0} must be {WORD_LENGTH} characters long")]
    InvalidLength(String),
    #[error("CPA {code} contains an invalid CPA identifier '{symbol}'")]
    InvalidSymbol { code: String, symbol: char },
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackCode([Mark; WORD_LENGTH]);

impl FeedbackCode {
    /// All positions correct; the only code that solves a board
    pub const ALL_CORRECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        *self == Self::ALL_CORRECT
    }

    /// Count how many positions carry the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Parse a code such as `"cpaaa"` or `"CPAAA"`
    ///
    /// # Errors
    /// Returns `FeedbackError` if the code is not exactly 5 symbols from `{C, P, A}`.
    ///
    /// # Examples
    /// ```
    /// use octordle_solver::core::{FeedbackCode, Mark};
    ///
    /// let code = FeedbackCode::parse("cpaaa").unwrap();
    /// assert_eq!(code.mark_at(1), Mark::Present);
    /// assert_eq!(code.to_string(), "CPAAA");
    /// assert!(FeedbackCode::parse("cpx").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, FeedbackError> {
        let code = input.trim().to_uppercase();

        if let Some(symbol) = code.chars().find(|&c| Mark::from_symbol(c).is_none()) {
            return Err(FeedbackError::InvalidSymbol { code, symbol });
        }

        let marks: Vec<Mark> = code.chars().filter_map(Mark::from_symbol).collect();
        let marks: [Mark; WORD_LENGTH] = marks
            .try_into()
            .map_err(|_| FeedbackError::InvalidLength(code.clone()))?;

        Ok(Self(marks))
    }

    /// Score `guess` against a known `solution`
    ///
    /// Two passes are needed for duplicate letters:
    /// 1. Exact position matches become Correct; every other solution letter
    ///    goes into a pool of letters still claimable as Present.
    /// 2. In index order, each non-Correct guess letter claims one matching
    ///    letter from the pool and becomes Present, or stays Absent.
    ///
    /// # Examples
    /// ```
    /// use octordle_solver::core::{FeedbackCode, Word};
    ///
    /// let guess = Word::new("otter").unwrap();
    /// let solution = Word::new("haunt").unwrap();
    ///
    /// // Only one T in HAUNT, so only the first T is present
    /// assert_eq!(FeedbackCode::evaluate(&guess, &solution).to_string(), "APAAA");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut available: FxHashMap<u8, u8> = FxHashMap::default();

        // First pass: exact matches, pooling everything else from the solution
        for (i, (&g, &s)) in guess.chars().iter().zip(solution.chars()).enumerate() {
            if g == s {
                marks[i] = Mark::Correct;
            } else {
                *available.entry(s).or_insert(0) += 1;
            }
        }

        // Second pass: present claims, left to right
        for (i, &g) in guess.chars().iter().enumerate() {
            if marks[i] == Mark::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }
}

impl FromStr for FeedbackCode {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}
