//! Property-based tests for feedback evaluation, filtering and replay.
//!
//! Words are drawn from a small alphabet so repeated letters, shared letters
//! and duplicate guesses come up often.

use octordle_solver::board::{Board, CandidateBoard, LetterCounting, filter};
use octordle_solver::core::{FeedbackCode, Mark, WORD_LENGTH, Word};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_word()(text in "[a-f]{5}") -> Word {
        Word::new(text).unwrap()
    }
}

prop_compose! {
    fn arbitrary_universe()(words in prop::collection::btree_set("[a-f]{5}", 1..40)) -> Vec<Word> {
        words.into_iter().map(|w| Word::new(w).unwrap()).collect()
    }
}

fn arbitrary_counting() -> impl Strategy<Value = LetterCounting> {
    prop_oneof![Just(LetterCounting::Presence), Just(LetterCounting::Multiplicity)]
}

fn occurrences(word: &Word, letter: u8) -> usize {
    word.chars().iter().filter(|&&c| c == letter).count()
}

proptest! {
    #[test]
    fn evaluate_never_over_credits_a_letter(
        guess in arbitrary_word(),
        solution in arbitrary_word(),
    ) {
        let code = FeedbackCode::evaluate(&guess, &solution);

        for &letter in guess.chars() {
            let credited = (0..WORD_LENGTH)
                .filter(|&i| guess.char_at(i) == letter && code.mark_at(i) != Mark::Absent)
                .count();
            prop_assert!(credited <= occurrences(&solution, letter));
        }
    }

    #[test]
    fn evaluate_correct_exactly_on_matching_positions(
        guess in arbitrary_word(),
        solution in arbitrary_word(),
    ) {
        let code = FeedbackCode::evaluate(&guess, &solution);

        for i in 0..WORD_LENGTH {
            let matches = guess.char_at(i) == solution.char_at(i);
            prop_assert_eq!(code.mark_at(i) == Mark::Correct, matches);
        }
    }

    #[test]
    fn evaluate_against_itself_is_all_correct(word in arbitrary_word()) {
        prop_assert_eq!(FeedbackCode::evaluate(&word, &word), FeedbackCode::ALL_CORRECT);
    }

    #[test]
    fn solution_survives_its_own_feedback(
        universe in arbitrary_universe(),
        guess in arbitrary_word(),
        pick in any::<prop::sample::Index>(),
        counting in arbitrary_counting(),
    ) {
        let solution = pick.get(&universe);
        let candidates: Vec<&Word> = universe.iter().collect();
        let code = FeedbackCode::evaluate(&guess, solution);

        let remaining = filter(&candidates, &guess, &code, counting).unwrap();
        prop_assert!(remaining.contains(&solution));
    }

    #[test]
    fn filter_is_idempotent_and_shrinking(
        universe in arbitrary_universe(),
        guess in arbitrary_word(),
        solution in arbitrary_word(),
        counting in arbitrary_counting(),
    ) {
        let candidates: Vec<&Word> = universe.iter().collect();
        let code = FeedbackCode::evaluate(&guess, &solution);

        if let Ok(once) = filter(&candidates, &guess, &code, counting) {
            prop_assert!(once.len() <= candidates.len());
            prop_assert!(once.iter().all(|w| candidates.contains(w)));

            let twice = filter(&once, &guess, &code, counting).unwrap();
            prop_assert_eq!(twice, once);
        }
    }

    #[test]
    fn candidate_sets_only_shrink(
        universe in arbitrary_universe(),
        pick in any::<prop::sample::Index>(),
        guesses in prop::collection::vec(arbitrary_word(), 1..8),
    ) {
        let solution = pick.get(&universe).clone();
        let mut board = CandidateBoard::new(1, &universe);

        let mut previous: Vec<Word> = board.remaining().iter().map(|&w| w.clone()).collect();
        for guess in &guesses {
            board.update_result(guess, FeedbackCode::evaluate(guess, &solution)).unwrap();

            let current: Vec<Word> = board.remaining().iter().map(|&w| w.clone()).collect();
            prop_assert!(current.iter().all(|w| previous.contains(w)));
            prop_assert!(current.contains(&solution));
            previous = current;
        }
    }

    #[test]
    fn export_then_replay_rebuilds_board(
        universe in arbitrary_universe(),
        pick in any::<prop::sample::Index>(),
        steps in prop::collection::vec((arbitrary_word(), any::<bool>()), 0..8),
        counting in arbitrary_counting(),
    ) {
        let solution = pick.get(&universe).clone();
        let mut board = CandidateBoard::new(5, &universe).with_counting(counting);

        for (guess, scored) in &steps {
            board.add_guess(guess);
            if *scored {
                board.update_result(guess, FeedbackCode::evaluate(guess, &solution)).unwrap();
            }
        }

        let replayed = CandidateBoard::replay(&board.to_record(), &universe, counting).unwrap();

        prop_assert_eq!(replayed.id(), board.id());
        prop_assert_eq!(replayed.guesses(), board.guesses());
        prop_assert_eq!(replayed.remaining(), board.remaining());
        prop_assert_eq!(replayed.state(), board.state());
    }

    #[test]
    fn rescoring_a_guess_keeps_replay_in_step(
        universe in arbitrary_universe(),
        pick in any::<prop::sample::Index>(),
        guess in arbitrary_word(),
        other in arbitrary_word(),
        counting in arbitrary_counting(),
    ) {
        let solution = pick.get(&universe).clone();
        let mut board = CandidateBoard::new(1, &universe).with_counting(counting);
        let first = FeedbackCode::evaluate(&guess, &solution);
        board.update_result(&guess, first).unwrap();
        let before: Vec<Word> = board.remaining().iter().map(|&w| w.clone()).collect();

        let _ = board.update_result(&guess, FeedbackCode::evaluate(&guess, &other));

        let after: Vec<Word> = board.remaining().iter().map(|&w| w.clone()).collect();
        prop_assert_eq!(after, before);
        prop_assert_eq!(board.guesses()[0].feedback(), Some(&first));

        let replayed = CandidateBoard::replay(&board.to_record(), &universe, counting).unwrap();
        prop_assert_eq!(replayed.remaining(), board.remaining());
    }
}
