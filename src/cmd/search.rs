use crate::reports;
use clap::Args;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;
use wordforge::board::LetterBoard;
use wordforge::config::Config;
use wordforge::dice::DiceSet;
use wordforge::error::WfResult;
use wordforge::optimizer::runner::{Improvement, ProgressCallback, SearchOptions, Searcher};
use wordforge::solver::{loader, Solver};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,

    /// Wall-clock limit in seconds; unlimited when absent
    #[arg(short = 'T', long)]
    pub time: Option<u64>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

/// Streams each global improvement to stdout as a CSV record:
/// seq, elapsed ms, score, then one token per cell.
struct CsvReporter {
    writer: Mutex<csv::Writer<io::Stdout>>,
}

impl CsvReporter {
    fn new() -> Self {
        let writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(io::stdout());
        Self { writer: Mutex::new(writer) }
    }

    fn write(&self, seq: usize, elapsed: Duration, improvement: &Improvement) -> WfResult<()> {
        let mut record = vec![
            seq.to_string(),
            elapsed.as_millis().to_string(),
            improvement.score.to_string(),
        ];
        record.extend(improvement.letters.iter().cloned());

        let mut writer = self.writer.lock().unwrap();
        writer.write_record(&record)?;
        writer.flush()?;
        Ok(())
    }
}

impl ProgressCallback for CsvReporter {
    fn on_improvement(&self, seq: usize, elapsed: Duration, improvement: &Improvement) -> bool {
        self.write(seq, elapsed, improvement).is_ok()
    }
}

pub fn run(args: SearchArgs, dice: Arc<DiceSet>, words: &[String]) -> WfResult<()> {
    let solver = Arc::new(Solver::build(dice.rows, dice.cols, words));
    let bigrams = Arc::new(loader::bigram_table(words, dice.rows, dice.cols));

    let mut options = SearchOptions::from(&args.config);
    options.max_time = args.time.map(Duration::from_secs);
    options.seed = args.seed;

    info!(
        "Searching {}x{} boards with the {} dice",
        dice.rows, dice.cols, dice.name
    );

    let searcher = Searcher::new(solver.clone(), bigrams, dice, options)?;
    let best = searcher.run(&CsvReporter::new());

    match best {
        Some(improvement) => {
            let board =
                LetterBoard::from_tokens(solver.rows(), solver.cols(), &improvement.letters)?;
            reports::print_board("BEST", &board);
            reports::print_words(&solver.solve(&board));
            info!(
                "Best score {} found by worker {}",
                improvement.score, improvement.worker
            );
        }
        None => info!("No improvement reported before the search stopped"),
    }
    Ok(())
}
