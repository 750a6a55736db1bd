use proptest::prelude::*;
use std::sync::Arc;
use wordforge::board::{Boggler, DiceBoard};
use wordforge::dice::{DiceSet, DiceSetKind};
use wordforge::geometry;
use wordforge::optimizer::{mutation, Worker};
use wordforge::solver::{loader, Solver};

fn small_dictionary() -> Vec<String> {
    [
        "ATE", "EAT", "TEA", "NET", "TEN", "NOT", "TON", "ONE", "RAT", "TAR", "ART", "EAR",
        "ERA", "SEA", "SAT", "SET", "SIT", "TIE", "TIN", "NIT", "TOE", "OAT", "ROT", "NOTE",
        "TONE", "RATE", "TEAR", "STAR", "REST", "NEST", "SENT", "TENS", "NETS", "LINE", "NINE",
        "DINE", "SIDE", "RIDE", "RISE", "STONE", "TONES", "STARE", "TEARS", "RATES",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

fn assert_permutation(board: &DiceBoard, dice: &DiceSet) {
    let mut seen: Vec<usize> = (0..board.cells()).map(|k| board.die_at(k)).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..dice.len()).collect::<Vec<_>>());
    for k in 0..board.cells() {
        assert!((board.face_at(k) as usize) < dice.dice[board.die_at(k)].len());
    }
}

proptest! {
    #[test]
    fn reroll_keeps_the_assignment_a_permutation(seed in any::<u64>(), steps in 1usize..32) {
        let dice = Arc::new(DiceSet::builtin(DiceSetKind::Classic1992));
        let adjacency = geometry::build_adjacency(dice.rows, dice.cols);
        let bigrams = loader::bigram_table(&small_dictionary(), dice.rows, dice.cols);

        let mut rng = fastrand::Rng::with_seed(seed);
        let mut board = DiceBoard::roll(dice.clone(), &mut rng);

        for _ in 0..steps {
            let weights = mutation::badness_weights(&board, &adjacency, &bigrams);
            let cells = mutation::select_cells(&mut rng, &weights, 0.4);
            prop_assert!(!cells.is_empty());
            mutation::reroll(&mut board, &cells, &mut rng);

            let mut seen: Vec<usize> = (0..board.cells()).map(|k| board.die_at(k)).collect();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..dice.len()).collect::<Vec<_>>());
            for k in 0..board.cells() {
                prop_assert!((board.face_at(k) as usize) < dice.dice[board.die_at(k)].len());
            }
        }
    }

    #[test]
    fn badness_weights_form_a_distribution(seed in any::<u64>()) {
        let dice = Arc::new(DiceSet::builtin(DiceSetKind::Master));
        let adjacency = geometry::build_adjacency(dice.rows, dice.cols);
        let bigrams = loader::bigram_table(&small_dictionary(), dice.rows, dice.cols);

        let mut rng = fastrand::Rng::with_seed(seed);
        let board = DiceBoard::roll(dice, &mut rng);
        let weights = mutation::badness_weights(&board, &adjacency, &bigrams);

        prop_assert_eq!(weights.len(), board.cells());
        let sum: f64 = weights.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
        prop_assert!(weights.iter().all(|w| w.is_finite() && *w >= 0.0));
    }
}

#[test]
fn worker_state_stays_consistent_through_steps() {
    let dictionary = small_dictionary();
    let dice = Arc::new(DiceSet::builtin(DiceSetKind::Classic1992));
    let solver = Arc::new(Solver::build(dice.rows, dice.cols, &dictionary));
    let bigrams = Arc::new(loader::bigram_table(&dictionary, dice.rows, dice.cols));

    let mut worker = Worker::new(solver.clone(), bigrams, dice.clone(), 0.35, Some(17));
    assert_eq!(worker.score, solver.score(&worker.board));

    let mut reported = 0;
    for _ in 0..200 {
        if let Some((score, letters)) = worker.step() {
            assert!(score > reported, "reports must strictly improve");
            assert_eq!(letters.len(), worker.board.cells());
            reported = score;
        }
        // Whether the mutation stuck or was reverted, the cached score must
        // describe the board the worker is holding.
        assert_eq!(worker.score, solver.score(&worker.board));
        assert_permutation(&worker.board, &dice);
    }
    assert!(worker.best_known >= reported);
}

#[test]
fn worker_ignores_stale_best_broadcasts() {
    let dictionary = small_dictionary();
    let dice = Arc::new(DiceSet::builtin(DiceSetKind::Classic1992));
    let solver = Arc::new(Solver::build(dice.rows, dice.cols, &dictionary));
    let bigrams = Arc::new(loader::bigram_table(&dictionary, dice.rows, dice.cols));

    let mut worker = Worker::new(solver, bigrams, dice, 0.35, Some(1));
    worker.observe_best(40);
    worker.observe_best(25);
    assert_eq!(worker.best_known, 40);
}

#[test]
fn flip_rolls_a_scored_replacement_board() {
    let dictionary = small_dictionary();
    let dice = Arc::new(DiceSet::builtin(DiceSetKind::Classic1992));
    let solver = Arc::new(Solver::build(dice.rows, dice.cols, &dictionary));
    let bigrams = Arc::new(loader::bigram_table(&dictionary, dice.rows, dice.cols));

    let mut worker = Worker::new(solver.clone(), bigrams, dice.clone(), 0.35, Some(23));
    worker.flip();
    assert_eq!(worker.score, solver.score(&worker.board));
    assert_permutation(&worker.board, &dice);
}
