//! Showdown command
//!
//! Plays many independent single-board matches: a [`CandidateBoard`] guesses
//! against a [`KnownBoard`] holding a random solution. Useful for comparing
//! openers.

use crate::board::{Added, Board, CandidateBoard, KnownBoard, LetterCounting};
use crate::core::{FeedbackCode, Word};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Guess count at which a match counts as slow
pub const SLOW_GUESSES: usize = 6;

/// Give up on a match after this many guesses
const MAX_TURNS: usize = 64;

/// How a single match ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Solved { solution: Word, guesses: usize },
    Broken(BrokenMatch),
}

/// A match whose candidate board ran out of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenMatch {
    pub solution: Word,
    pub guesses: Vec<Word>,
}

/// Aggregate result of a showdown
#[derive(Debug, Clone)]
pub struct ShowdownResult {
    pub matches: usize,
    pub openers: Vec<Word>,
    /// Guess count of each solved match
    pub distribution: BTreeMap<usize, usize>,
    pub broken: Vec<BrokenMatch>,
    /// Solutions that took [`SLOW_GUESSES`] or more guesses
    pub slow: BTreeMap<Word, Vec<usize>>,
    pub duration: Duration,
}

impl ShowdownResult {
    fn new(matches: usize, openers: &[Word]) -> Self {
        Self {
            matches,
            openers: openers.to_vec(),
            distribution: BTreeMap::new(),
            broken: Vec::new(),
            slow: BTreeMap::new(),
            duration: Duration::ZERO,
        }
    }

    fn record(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Solved { solution, guesses } => {
                *self.distribution.entry(guesses).or_insert(0) += 1;
                if guesses >= SLOW_GUESSES {
                    self.slow.entry(solution).or_default().push(guesses);
                }
            }
            MatchOutcome::Broken(broken) => self.broken.push(broken),
        }
    }

    #[must_use]
    pub fn solved(&self) -> usize {
        self.distribution.values().sum()
    }

    /// Mean guess count over solved matches
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        let solved = self.solved();
        if solved == 0 {
            return 0.0;
        }
        let total: usize = self.distribution.iter().map(|(g, n)| g * n).sum();
        total as f64 / solved as f64
    }

    /// `count` as a percentage of all matches
    #[must_use]
    pub fn share(&self, count: usize) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            count as f64 / self.matches as f64 * 100.0
        }
    }

    /// Slow solutions with how many times each was slow, rarest first
    #[must_use]
    pub fn slow_solutions(&self) -> Vec<(&Word, usize)> {
        let mut slow: Vec<(&Word, usize)> = self.slow.iter().map(|(w, g)| (w, g.len())).collect();
        slow.sort_by_key(|&(_, count)| count);
        slow
    }
}

/// Play one match against a random solution drawn from `universe`
///
/// The openers are queued as pending guesses, then the board keeps guessing
/// until it is solved or broken.
pub fn play_match<R: Rng + ?Sized>(
    universe: &[Word],
    openers: &[Word],
    counting: LetterCounting,
    rng: &mut R,
) -> Option<MatchOutcome> {
    let solution = universe.choose(rng)?.clone();
    let mut known = KnownBoard::new(solution.clone());
    let mut board = CandidateBoard::new(0, universe).with_counting(counting);

    for opener in openers {
        board.add_guess(opener);
    }

    for _ in 0..MAX_TURNS {
        let Some(guess) = board.next_guess_with(rng) else {
            break;
        };
        board.add_guess(&guess);
        let code = match known.add_guess(&guess) {
            Added::Scored(code) => code,
            Added::Ignored | Added::Pending => FeedbackCode::evaluate(&guess, known.solution()),
        };

        if board.update_result(&guess, code).is_err() {
            break;
        }
        if board.is_solved() {
            return Some(MatchOutcome::Solved {
                solution,
                guesses: board.guess_count(),
            });
        }
    }

    warn!(%solution, guesses = board.guess_count(), "showdown board broken");
    Some(MatchOutcome::Broken(BrokenMatch {
        solution,
        guesses: board.guess_words().cloned().collect(),
    }))
}

/// Run `matches` matches in parallel
///
/// A progress bar is drawn on stderr when `show_progress` is set.
#[must_use]
pub fn run_showdown(
    universe: &[Word],
    openers: &[Word],
    counting: LetterCounting,
    matches: usize,
    show_progress: bool,
) -> ShowdownResult {
    let start = Instant::now();
    let pb = if show_progress {
        progress_bar(matches)
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<MatchOutcome> = (0..matches)
        .into_par_iter()
        .filter_map(|_| {
            let outcome = play_match(universe, openers, counting, &mut rand::rng());
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut result = ShowdownResult::new(matches, openers);
    for outcome in outcomes {
        result.record(outcome);
    }
    result.duration = start.elapsed();
    result
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
