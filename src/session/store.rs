//! Session save files
//!
//! A save file is a pretty-printed JSON array of board records:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "guesses": [
//!       { "word": "roast", "result": "AAPAC" },
//!       { "word": "field", "result": "" }
//!     ]
//!   }
//! ]
//! ```

use crate::board::{BoardRecord, ReplayError};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The logical record of a whole session: one entry per board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionRecord {
    pub boards: Vec<BoardRecord>,
}

/// A session that cannot be saved or loaded
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access save file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed save file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("save file contains no boards")]
    NoBoards,
    #[error("save file contains board {0} more than once")]
    DuplicateBoard(usize),
    #[error(transparent)]
    Replay(#[from] ReplayError),
}

impl SessionRecord {
    /// Check the record can be replayed: at least one board, unique ids, and
    /// well-formed words and results throughout
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.boards.is_empty() {
            return Err(StoreError::NoBoards);
        }

        let mut seen = FxHashSet::default();
        for board in &self.boards {
            if !seen.insert(board.id) {
                return Err(StoreError::DuplicateBoard(board.id));
            }
            board.validate()?;
        }
        Ok(())
    }

    /// Encode as pretty JSON
    ///
    /// # Errors
    /// Returns `StoreError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode and validate
    ///
    /// # Errors
    /// Returns `StoreError::Json` for malformed JSON, or any `validate` error.
    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        let record: Self = serde_json::from_str(text)?;
        record.validate()?;
        Ok(record)
    }
}

/// Write `record` to `path`
///
/// # Errors
/// Returns `StoreError::Io` if the file cannot be written.
pub fn write_record(path: &Path, record: &SessionRecord) -> Result<(), StoreError> {
    let json = record.to_json()?;
    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and validate the record saved at `path`
///
/// # Errors
/// Returns `StoreError::Io` if the file cannot be read, or any
/// `SessionRecord::from_json` error.
pub fn read_record(path: &Path) -> Result<SessionRecord, StoreError> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    SessionRecord::from_json(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GuessRecord;

    fn board(id: usize, guesses: &[(&str, &str)]) -> BoardRecord {
        BoardRecord {
            id,
            guesses: guesses
                .iter()
                .map(|(word, result)| GuessRecord {
                    word: (*word).to_string(),
                    result: (*result).to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn json_is_a_list_of_boards() {
        let record = SessionRecord {
            boards: vec![board(1, &[("roast", "AAPAC"), ("field", "")])],
        };

        let json = record.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.is_array());
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["guesses"][0]["word"], "roast");
        assert_eq!(value[0]["guesses"][1]["result"], "");
        assert_eq!(SessionRecord::from_json(&json).unwrap(), record);
    }

    #[test]
    fn missing_result_means_pending() {
        let record =
            SessionRecord::from_json(r#"[{ "id": 2, "guesses": [{ "word": "roast" }] }]"#).unwrap();
        assert!(record.boards[0].guesses[0].is_pending());
    }

    #[test]
    fn duplicate_board_ids_rejected() {
        let json = r#"[{ "id": 1, "guesses": [] }, { "id": 1, "guesses": [] }]"#;
        assert!(matches!(
            SessionRecord::from_json(json),
            Err(StoreError::DuplicateBoard(1))
        ));
    }

    #[test]
    fn empty_save_rejected() {
        assert!(matches!(
            SessionRecord::from_json("[]"),
            Err(StoreError::NoBoards)
        ));
    }

    #[test]
    fn wrong_word_length_rejected() {
        let json = r#"[{ "id": 1, "guesses": [{ "word": "roasts", "result": "" }] }]"#;
        assert!(matches!(
            SessionRecord::from_json(json),
            Err(StoreError::Replay(ReplayError::InvalidWord { .. }))
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            SessionRecord::from_json("{ not json"),
            Err(StoreError::Json(_))
        ));
    }

    #[test]
    fn write_then_read_file() {
        let path = std::env::temp_dir().join(format!("octordle-store-{}.json", std::process::id()));
        let record = SessionRecord {
            boards: vec![board(1, &[("roast", "")]), board(2, &[("roast", "CCCCC")])],
        };

        write_record(&path, &record).unwrap();
        let loaded = read_record(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, record);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = Path::new("/nonexistent/octordle/save.json");
        assert!(matches!(read_record(path), Err(StoreError::Io { .. })));
    }
}
