//! Five-letter word representation
//!
//! A Word stores a canonical lowercase 5-letter word as both text and bytes.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word handled by the engine
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word, normalized to lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and lowercased, so `"CRANE"` and `" crane "` are the same word.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use octordle_solver::core::Word;
    ///
    /// let word = Word::new("ROAST").unwrap();
    /// assert_eq!(word.text(), "roast");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("roast").unwrap();
        assert_eq!(word.text(), "roast");
        assert_eq!(word.chars(), b"roast");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("FIELD").unwrap().text(), "field");
        assert_eq!(Word::new("FiElD").unwrap().text(), "field");
        assert_eq!(Word::new("  field\n").unwrap().text(), "field");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crän"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letters() {
        let word = Word::new("otter").unwrap();
        assert_eq!(word.char_at(1), b't');
        assert_eq!(word.chars(), b"otter");
    }

    #[test]
    fn word_parse_and_display() {
        let word: Word = "Taunt".parse().unwrap();
        assert_eq!(format!("{word}"), "taunt");
    }
}
