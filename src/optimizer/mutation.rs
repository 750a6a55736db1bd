// ===== wordforge/src/optimizer/mutation.rs =====
use crate::board::{Boggler, DiceBoard};
use crate::solver::loader::BigramTable;
use fastrand::Rng;

/// Per-cell re-roll weight derived from the bigram table: average the
/// frequency of the letter pairs a cell forms with its neighbors, then
/// invert. Cells sitting in statistically common pairs get low weight,
/// cells in uncommon pairs get high weight. Normalized to sum 1.
pub fn badness_weights(
    board: &DiceBoard,
    adjacency: &[Vec<usize>],
    bigrams: &BigramTable,
) -> Vec<f64> {
    let cells = board.cells();
    let mut weights = vec![0.0; cells];
    for (p, weight) in weights.iter_mut().enumerate() {
        let neighbors = &adjacency[p];
        let mut avg = 0.0;
        if !neighbors.is_empty() {
            let a = (board.letter(p) - b'A') as usize;
            let sum: f64 = neighbors
                .iter()
                .map(|&q| bigrams[a][(board.letter(q) - b'A') as usize])
                .sum();
            avg = sum / neighbors.len() as f64;
        }
        *weight = 1.0 - avg;
    }

    let sum: f64 = weights.iter().sum();
    if sum > 0.0 {
        for w in &mut weights {
            *w /= sum;
        }
    } else if cells > 0 {
        let uniform = 1.0 / cells as f64;
        for w in &mut weights {
            *w = uniform;
        }
    }
    weights
}

/// Samples a non-empty set of cells against the weight distribution. Each
/// cell is drawn independently with probability proportional to its weight,
/// scaled so `rate` is the expected fraction of the board re-rolled;
/// resamples until at least one cell is selected.
pub fn select_cells(rng: &mut Rng, weights: &[f64], rate: f64) -> Vec<usize> {
    if weights.is_empty() {
        return Vec::new();
    }
    let n = weights.len() as f64;
    let mut selected = Vec::new();
    while selected.is_empty() {
        for (p, &w) in weights.iter().enumerate() {
            if rng.f64() < (w * n * rate).min(1.0) {
                selected.push(p);
            }
        }
    }
    selected
}

/// Shuffles die identities among the selected cells and rolls a fresh face
/// for each, so the die-to-cell assignment stays a permutation of the
/// original die set.
pub fn reroll(board: &mut DiceBoard, cells: &[usize], rng: &mut Rng) {
    let mut dice: Vec<usize> = cells.iter().map(|&p| board.die_at(p)).collect();
    rng.shuffle(&mut dice);
    for (&p, &die) in cells.iter().zip(dice.iter()) {
        let face = rng.u8(0..board.dice().dice[die].len() as u8);
        board.set_die(p, die, face);
    }
}
