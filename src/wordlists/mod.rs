//! Word universes
//!
//! The default universe is embedded at build time from `data/words.txt`; any
//! other list can be loaded from a file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use std::io;

/// Name that selects the embedded universe on the command line
pub const EMBEDDED: &str = "embedded";

/// Resolve a universe by name: [`EMBEDDED`] or a path to a word list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn universe(source: &str) -> io::Result<Vec<Word>> {
    if source == EMBEDDED {
        Ok(loader::words_from_slice(WORDS))
    } else {
        loader::load_from_file(source)
    }
}
