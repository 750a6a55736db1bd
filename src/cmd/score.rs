use crate::reports;
use clap::Args;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::info;
use wordforge::board::{Boggler, DiceBoard, LetterBoard};
use wordforge::dice::DiceSet;
use wordforge::error::WfResult;
use wordforge::solver::Solver;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Board files in the text format; rolls fresh boards when empty
    pub boards: Vec<String>,

    /// How many random boards to roll when no files are given
    #[arg(long, default_value_t = 1)]
    pub random: usize,

    /// Draw random letters from English frequencies instead of rolling dice
    #[arg(long, default_value_t = false)]
    pub letters: bool,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

pub fn run(args: ScoreArgs, dice: Arc<DiceSet>, words: &[String]) -> WfResult<()> {
    let mut boards: Vec<(String, LetterBoard)> = Vec::new();

    if args.boards.is_empty() {
        let mut rng = match args.seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };
        for i in 0..args.random {
            let board = if args.letters {
                LetterBoard::random(dice.rows, dice.cols, &mut rng)
            } else {
                let rolled = DiceBoard::roll(dice.clone(), &mut rng);
                LetterBoard::from_tokens(rolled.rows(), rolled.cols(), &rolled.letters_linear())?
            };
            boards.push((format!("random #{}", i + 1), board));
        }
    } else {
        for path in &args.boards {
            boards.push((path.clone(), LetterBoard::read_file(path)?));
        }
    }

    // Boards may disagree on dimensions, so each gets its own solver; the
    // builds and scans run in parallel.
    let outcomes: Vec<_> = boards
        .par_iter()
        .map(|(name, board)| {
            let solver = Solver::build(board.rows(), board.cols(), words);
            (name, board, solver.solve(board))
        })
        .collect();

    for (name, board, outcome) in outcomes {
        reports::print_board(name, board);
        reports::print_words(&outcome);
        info!(
            "{}: {} points across {} words",
            name,
            outcome.total,
            outcome.words.len()
        );
    }
    Ok(())
}
