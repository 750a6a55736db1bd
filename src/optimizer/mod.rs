pub mod mutation;
pub mod runner;

use crate::board::{Boggler, DiceBoard};
use crate::dice::DiceSet;
use crate::solver::loader::BigramTable;
use crate::solver::Solver;
use std::sync::Arc;

/// One search worker: a private board, score state, and random source.
/// Everything mutable is exclusively owned, so workers never lock; only the
/// read-only solver, bigram table, and dice set are shared.
pub struct Worker {
    solver: Arc<Solver>,
    bigrams: Arc<BigramTable>,
    dice: Arc<DiceSet>,
    pub board: DiceBoard,
    pub score: u32,
    pub best_known: u32,
    reroll_rate: f64,
    pub rng: fastrand::Rng,
}

impl Worker {
    pub fn new(
        solver: Arc<Solver>,
        bigrams: Arc<BigramTable>,
        dice: Arc<DiceSet>,
        reroll_rate: f64,
        seed: Option<u64>,
    ) -> Self {
        let mut rng = match seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };
        let board = DiceBoard::roll(dice.clone(), &mut rng);
        let score = solver.score(&board);
        Self {
            solver,
            bigrams,
            dice,
            board,
            score,
            best_known: 0,
            reroll_rate,
            rng,
        }
    }

    /// Hears about a sibling's (or its own) global best; a worker never
    /// reports candidates at or below this bar again.
    pub fn observe_best(&mut self, score: u32) {
        if score > self.best_known {
            self.best_known = score;
        }
    }

    /// Discards the current board for a fresh random roll.
    pub fn flip(&mut self) {
        self.board = DiceBoard::roll(self.dice.clone(), &mut self.rng);
        self.score = self.solver.score(&self.board);
    }

    /// One mutate/score/accept iteration. Returns the candidate when it
    /// beats every global best this worker has heard of.
    pub fn step(&mut self) -> Option<(u32, Vec<String>)> {
        let last = self.board.clone();
        let last_score = self.score;

        let weights = mutation::badness_weights(&self.board, self.solver.adjacency(), &self.bigrams);
        let cells = mutation::select_cells(&mut self.rng, &weights, self.reroll_rate);
        mutation::reroll(&mut self.board, &cells, &mut self.rng);
        self.score = self.solver.score(&self.board);

        let mut report = None;
        if self.score > self.best_known {
            self.best_known = self.score;
            report = Some((self.score, self.board.letters_linear()));
        }

        // Tempered acceptance: improvements always stick; a regression
        // survives with probability newScore/lastScore, so near-misses
        // usually survive and collapses usually revert. A zero previous
        // score accepts anything.
        let keep = self.score > last_score
            || last_score == 0
            || self.rng.f64() <= self.score as f64 / last_score as f64;
        if !keep {
            self.board = last;
            self.score = last_score;
        }
        report
    }
}
