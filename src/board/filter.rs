//! Candidate pruning for boards with an unknown solution
//!
//! Given a guess and the feedback code the player reported for it, keep only
//! the candidates that could still be the solution. The filter never mutates
//! its input; an empty result is reported as [`Inconsistent`] so the caller
//! can discard it and keep its previous candidate set.

use crate::core::{FeedbackCode, Mark, WORD_LENGTH, Word};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

/// How strictly the letters of `Present` positions are counted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LetterCounting {
    /// A `Present` letter only has to appear somewhere outside the `Correct`
    /// positions, however many times it was marked present. An `Absent`
    /// position whose letter is `Present` elsewhere is not constrained.
    Presence,
    /// A `Present` letter has to appear at least as many times as it was
    /// marked present. A letter both `Present` and `Absent` in one guess
    /// appears exactly that many times, and never at its `Absent` position.
    #[default]
    Multiplicity,
}

/// The feedback admits none of the remaining candidates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("feedback {code} for {guess} leaves no candidates")]
pub struct Inconsistent {
    pub guess: Word,
    pub code: FeedbackCode,
}

/// Constraints implied by a single scored guess
struct Constraints {
    guess: [u8; WORD_LENGTH],
    marks: [Mark; WORD_LENGTH],
    counting: LetterCounting,
    /// Letters at `Absent` positions that are nowhere `Present`
    absent: FxHashSet<u8>,
    /// Number of `Present` positions per letter
    present: FxHashMap<u8, usize>,
    /// Letters both `Present` and `Absent`, so their count is known exactly
    capped: FxHashSet<u8>,
}

impl Constraints {
    fn new(guess: &Word, code: &FeedbackCode, counting: LetterCounting) -> Self {
        let guess = *guess.chars();
        let marks = *code.marks();

        let mut present: FxHashMap<u8, usize> = FxHashMap::default();
        for (&letter, _) in guess.iter().zip(&marks).filter(|(_, m)| **m == Mark::Present) {
            *present.entry(letter).or_insert(0) += 1;
        }

        let mut absent = FxHashSet::default();
        let mut capped = FxHashSet::default();
        for (&letter, _) in guess.iter().zip(&marks).filter(|(_, m)| **m == Mark::Absent) {
            if present.contains_key(&letter) {
                capped.insert(letter);
            } else {
                absent.insert(letter);
            }
        }

        Self {
            guess,
            marks,
            counting,
            absent,
            present,
            capped,
        }
    }

    /// Per-position checks
    fn allows_positions(&self, word: &Word) -> bool {
        word.chars()
            .iter()
            .zip(self.guess.iter().zip(&self.marks))
            .all(|(&letter, (&guessed, &mark))| match mark {
                Mark::Correct => letter == guessed,
                Mark::Present => letter != guessed && !self.absent.contains(&letter),
                Mark::Absent => {
                    !self.absent.contains(&letter)
                        && (self.counting == LetterCounting::Presence || letter != guessed)
                }
            })
    }

    /// Present-letter checks over the word with its `Correct` positions removed
    fn allows_letters(&self, word: &Word) -> bool {
        if self.present.is_empty() {
            return true;
        }

        let mut stripped: FxHashMap<u8, usize> = FxHashMap::default();
        for (&letter, _) in word
            .chars()
            .iter()
            .zip(&self.marks)
            .filter(|(_, m)| **m != Mark::Correct)
        {
            *stripped.entry(letter).or_insert(0) += 1;
        }

        self.present.iter().all(|(letter, &needed)| {
            let found = stripped.get(letter).copied().unwrap_or(0);
            match self.counting {
                LetterCounting::Presence => found > 0,
                LetterCounting::Multiplicity if self.capped.contains(letter) => found == needed,
                LetterCounting::Multiplicity => found >= needed,
            }
        })
    }
}

/// Keep the candidates consistent with `code` being the feedback for `guess`
///
/// Positional constraints are applied first, then the present-letter check, to
/// the same candidate set. Candidate order is preserved.
///
/// # Errors
/// Returns [`Inconsistent`] when no candidate survives.
///
/// # Examples
/// ```
/// use octordle_solver::board::{LetterCounting, filter};
/// use octordle_solver::core::{FeedbackCode, Word};
///
/// let universe: Vec<Word> = ["haunt", "taunt"].iter().map(|w| Word::new(w).unwrap()).collect();
/// let candidates: Vec<&Word> = universe.iter().collect();
/// let guess = Word::new("otter").unwrap();
/// let code = FeedbackCode::parse("appaa").unwrap();
///
/// let remaining = filter(&candidates, &guess, &code, LetterCounting::Multiplicity).unwrap();
/// assert_eq!(remaining, vec![&universe[1]]);
/// ```
pub fn filter<'a>(
    candidates: &[&'a Word],
    guess: &Word,
    code: &FeedbackCode,
    counting: LetterCounting,
) -> Result<Vec<&'a Word>, Inconsistent> {
    let constraints = Constraints::new(guess, code, counting);

    let mut remaining: Vec<&'a Word> = candidates
        .iter()
        .copied()
        .filter(|word| constraints.allows_positions(word))
        .collect();
    remaining.retain(|word| constraints.allows_letters(word));

    trace!(
        guess = %guess,
        code = %code,
        before = candidates.len(),
        after = remaining.len(),
        "filtered candidates"
    );

    if remaining.is_empty() {
        return Err(Inconsistent {
            guess: guess.clone(),
            code: *code,
        });
    }

    Ok(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn run(universe: &[&str], guess: &str, code: &str, counting: LetterCounting) -> Vec<String> {
        let universe = words(universe);
        let candidates: Vec<&Word> = universe.iter().collect();
        let guess = Word::new(guess).unwrap();
        let code = FeedbackCode::parse(code).unwrap();

        filter(&candidates, &guess, &code, counting)
            .map(|remaining| remaining.iter().map(|w| w.text().to_string()).collect())
            .unwrap_or_default()
    }

    fn strict(universe: &[&str], guess: &str, code: &str) -> Vec<String> {
        run(universe, guess, code, LetterCounting::Multiplicity)
    }

    #[test]
    fn correct_position_fixes_letter() {
        let remaining = strict(&["eerie", "deuce", "ether", "enert"], "zzzzt", "aaaac");
        assert_eq!(remaining, vec!["enert"]);
    }

    #[test]
    fn present_letter_must_appear_elsewhere() {
        let remaining = strict(&["adobe", "panel", "ether", "enert"], "zzzaz", "aaapa");
        assert_eq!(remaining, vec!["adobe", "panel"]);
    }

    #[test]
    fn present_letter_excluded_from_its_own_position() {
        let remaining = strict(&["adobe", "panel", "ocean"], "zzzaz", "aaapa");
        // OCEAN has its A at index 3, exactly where the guess marked it present
        assert_eq!(remaining, vec!["adobe", "panel"]);
    }

    #[test]
    fn double_present_requires_two_occurrences() {
        let remaining = strict(&["haunt", "taunt"], "otter", "appaa");
        assert_eq!(remaining, vec!["taunt"]);
    }

    #[test]
    fn present_and_absent_caps_letter_count() {
        let remaining = strict(&["haunt", "taunt"], "otter", "apaaa");
        assert_eq!(remaining, vec!["haunt"]);
    }

    #[test]
    fn single_present_keeps_words_with_more_occurrences() {
        let remaining = strict(&["haunt", "taunt"], "outer", "appaa");
        assert_eq!(remaining, vec!["haunt", "taunt"]);
    }

    #[test]
    fn presence_counting_only_checks_existence() {
        let both = vec!["haunt".to_string(), "taunt".to_string()];
        assert_eq!(
            run(&["haunt", "taunt"], "otter", "appaa", LetterCounting::Presence),
            both
        );
        assert_eq!(
            run(&["haunt", "taunt"], "otter", "apaaa", LetterCounting::Presence),
            both
        );
    }

    #[test]
    fn correct_letter_absent_elsewhere_is_limited_to_correct_position() {
        // E is correct at index 0 and absent at index 1
        let remaining = strict(&["eerie", "ether", "enter", "epoch"], "eezzz", "caaaa");
        assert_eq!(remaining, vec!["epoch"]);
    }

    #[test]
    fn fully_absent_guess_removes_all_its_letters() {
        let remaining = strict(&["roast", "field", "plumb"], "roast", "aaaaa");
        assert_eq!(remaining, vec!["field", "plumb"]);
    }

    #[test]
    fn empty_result_is_inconsistent() {
        let universe = words(&["haunt", "taunt"]);
        let candidates: Vec<&Word> = universe.iter().collect();
        let guess = Word::new("zzzzz").unwrap();
        let code = FeedbackCode::parse("caaaa").unwrap();

        let err = filter(&candidates, &guess, &code, LetterCounting::default()).unwrap_err();
        assert_eq!(err.guess, guess);
        assert_eq!(err.code, code);
    }

    #[test]
    fn refiltering_with_same_feedback_is_idempotent() {
        let universe = words(&["adobe", "panel", "ether", "enert", "meant"]);
        let candidates: Vec<&Word> = universe.iter().collect();
        let guess = Word::new("zzzaz").unwrap();
        let code = FeedbackCode::parse("aaapa").unwrap();

        let once = filter(&candidates, &guess, &code, LetterCounting::default()).unwrap();
        let twice = filter(&once, &guess, &code, LetterCounting::default()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn solution_always_survives_its_own_feedback() {
        let universe = words(&["roast", "field", "otter", "taunt", "haunt", "eerie", "deuce"]);
        let candidates: Vec<&Word> = universe.iter().collect();

        for guess in &universe {
            for solution in &universe {
                let code = FeedbackCode::evaluate(guess, solution);
                let remaining =
                    filter(&candidates, guess, &code, LetterCounting::default()).unwrap();
                assert!(remaining.contains(&solution), "{guess} vs {solution}");
            }
        }
    }
}
