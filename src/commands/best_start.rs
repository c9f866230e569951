//! Best-start command
//!
//! Rates every word of the universe as a lone opener. For each possible
//! solution the opener is scored once on a fresh [`CandidateBoard`], and the
//! solution counts as settled when the board is solved or down to a single
//! candidate.

use crate::board::{Added, Board, CandidateBoard, KnownBoard, LetterCounting};
use crate::core::Word;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;
use std::time::{Duration, Instant};

/// How many solutions one opener settles on its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenerScore {
    pub word: Word,
    pub solves: usize,
}

#[derive(Serialize)]
struct ScoreRow<'a> {
    word: &'a str,
    solves: usize,
}

/// Every opener's score, best first
#[derive(Debug, Clone)]
pub struct BestStartResult {
    pub scores: Vec<OpenerScore>,
    /// Number of solutions each opener was played against
    pub solutions: usize,
    pub duration: Duration,
}

impl BestStartResult {
    /// The `n` best openers
    #[must_use]
    pub fn top(&self, n: usize) -> &[OpenerScore] {
        &self.scores[..n.min(self.scores.len())]
    }

    /// Write the scores as a JSON array of `{ "word", "solves" }`, best first
    ///
    /// # Errors
    ///
    /// Returns any serialization or I/O error from `out`.
    pub fn write_json<W: Write>(&self, out: W) -> serde_json::Result<()> {
        let rows: Vec<ScoreRow> = self
            .scores
            .iter()
            .map(|score| ScoreRow {
                word: score.word.text(),
                solves: score.solves,
            })
            .collect();
        serde_json::to_writer_pretty(out, &rows)
    }
}

/// Whether `opener` alone settles the board when `solution` is the answer
#[must_use]
pub fn settles(
    universe: &[Word],
    opener: &Word,
    solution: &Word,
    counting: LetterCounting,
) -> bool {
    let mut known = KnownBoard::new(solution.clone());
    let mut board = CandidateBoard::new(0, universe).with_counting(counting);
    board.add_guess(opener);

    let Added::Scored(code) = known.add_guess(opener) else {
        return false;
    };

    board.update_result(opener, code).is_ok()
        && (board.is_solved() || board.remaining_count() == 1)
}

/// Number of solutions in `universe` that `opener` settles
#[must_use]
pub fn score_opener(universe: &[Word], opener: &Word, counting: LetterCounting) -> usize {
    universe
        .iter()
        .filter(|solution| settles(universe, opener, solution, counting))
        .count()
}

/// Score every word of `universe` as an opener, in parallel
///
/// A progress bar is drawn on stderr when `show_progress` is set. Ties keep
/// alphabetical order.
#[must_use]
pub fn run_best_start(
    universe: &[Word],
    counting: LetterCounting,
    show_progress: bool,
) -> BestStartResult {
    let start = Instant::now();
    let pb = if show_progress {
        progress_bar(universe.len())
    } else {
        ProgressBar::hidden()
    };

    let mut scores: Vec<OpenerScore> = universe
        .par_iter()
        .map(|opener| {
            let solves = score_opener(universe, opener, counting);
            pb.inc(1);
            OpenerScore {
                word: opener.clone(),
                solves,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    scores.sort_by(|a, b| (b.solves, &a.word).cmp(&(a.solves, &b.word)));

    BestStartResult {
        scores,
        solutions: universe.len(),
        duration: start.elapsed(),
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} openers ({eta})")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn opener_settles_its_own_solution() {
        let universe = words(&["haunt", "taunt", "roast"]);
        let counting = LetterCounting::default();

        assert!(settles(&universe, &word("roast"), &word("roast"), counting));
    }

    #[test]
    fn opener_leaving_two_candidates_does_not_settle() {
        let universe = words(&["haunt", "taunt", "roast"]);
        let counting = LetterCounting::default();

        assert!(!settles(&universe, &word("roast"), &word("haunt"), counting));
    }

    #[test]
    fn scores_sorted_best_first() {
        let universe = words(&["roast", "taunt", "haunt"]);

        let result = run_best_start(&universe, LetterCounting::default(), false);

        let ranked: Vec<(&str, usize)> = result
            .scores
            .iter()
            .map(|s| (s.word.text(), s.solves))
            .collect();
        assert_eq!(ranked, vec![("haunt", 3), ("taunt", 3), ("roast", 1)]);
        assert_eq!(result.solutions, 3);
        assert_eq!(result.top(2).len(), 2);
        assert_eq!(result.top(10).len(), 3);
    }

    #[test]
    fn json_lists_every_opener() {
        let universe = words(&["roast", "taunt", "haunt"]);
        let result = run_best_start(&universe, LetterCounting::default(), false);

        let mut out = Vec::new();
        result.write_json(&mut out).unwrap();
        let rows: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(rows[0]["word"], "haunt");
        assert_eq!(rows[0]["solves"], 3);
        assert_eq!(rows.as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn empty_universe_scores_nothing() {
        let result = run_best_start(&[], LetterCounting::default(), false);

        assert!(result.scores.is_empty());
        assert!(result.top(5).is_empty());
    }
}
