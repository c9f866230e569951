//! Word list loading
//!
//! Lists are one word per line. Blank lines, invalid entries and repeats are
//! skipped, so every word in a loaded universe is distinct.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use octordle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert an embedded string slice to words
///
/// # Examples
/// ```
/// use octordle_solver::wordlists::loader::words_from_slice;
/// use octordle_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'s>(lines: impl Iterator<Item = &'s str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "SLATE", " irate "]);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid_and_repeats() {
        let words = words_from_slice(&["crane", "toolong", "abc", "", "slate", "crane", "cr4ne"]);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("octordle-words-{}.txt", std::process::id()));
        fs::write(&path, "roast\n\nfield\nnope\nroast\n").unwrap();

        let words = load_from_file(&path).unwrap();
        let _ = fs::remove_file(&path);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["roast", "field"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/octordle/words.txt").is_err());
    }
}
