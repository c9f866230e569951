//! Session configuration
//!
//! Every field has a default, so a TOML file only needs the options it changes:
//!
//! ```toml
//! board_count = 4
//! auto_advance = false
//! openers = ["slate", "crony"]
//! ```

use crate::board::LetterCounting;
use crate::core::{Word, WordError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Openers seeded onto every board when the player does not type their own
pub const DEFAULT_OPENERS: [&str; 2] = ["roast", "field"];

/// Where `ss` / `ll` save and load a session by default
pub const DEFAULT_SAVE_PATH: &str = "saved-octordle.json";

/// Invalid session configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board count must be at least 1")]
    NoBoards,
    #[error("invalid opener '{word}': {source}")]
    InvalidOpener {
        word: String,
        #[source]
        source: WordError,
    },
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Options recognized by a [`Session`](super::Session)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of boards played at once
    pub board_count: usize,
    /// Prompt for opening guesses instead of seeding `openers`
    pub manual_openers: bool,
    /// Accept opening guesses that are not in the word universe
    pub allow_non_dictionary_guesses: bool,
    /// Jump to a board with pending guesses once the current one has none
    pub auto_advance: bool,
    /// Start a new session whenever one finishes
    pub endless_replay: bool,
    /// Opening guesses seeded when `manual_openers` is off
    pub openers: Vec<String>,
    /// Present-letter counting used by every board
    pub letter_counting: LetterCounting,
    /// Save file used by the save and load commands
    pub save_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_count: 8,
            manual_openers: false,
            allow_non_dictionary_guesses: false,
            auto_advance: true,
            endless_replay: false,
            openers: DEFAULT_OPENERS.iter().map(ToString::to_string).collect(),
            letter_counting: LetterCounting::default(),
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }
}

impl SessionConfig {
    /// Parse a TOML document, filling omitted options with defaults
    ///
    /// # Errors
    /// Returns `ConfigError::Toml` for malformed TOML, or any `validate` error.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read, or any
    /// `from_toml_str` error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check the options a session cannot start without
    ///
    /// # Errors
    /// Returns `ConfigError::NoBoards` for a zero board count, or
    /// `ConfigError::InvalidOpener` for an opener that is not a 5-letter word.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_count == 0 {
            return Err(ConfigError::NoBoards);
        }
        self.opener_words().map(|_| ())
    }

    /// The configured openers as words
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidOpener` for the first invalid opener.
    pub fn opener_words(&self) -> Result<Vec<Word>, ConfigError> {
        self.openers
            .iter()
            .map(|word| {
                Word::new(word).map_err(|source| ConfigError::InvalidOpener {
                    word: word.clone(),
                    source,
                })
            })
            .collect()
    }
}
