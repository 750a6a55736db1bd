// ===== wordforge/src/main.rs =====
use clap::{Parser, Subcommand};
use std::process;
use std::sync::Arc;
use tracing::{error, info};
use wordforge::dice::{DiceSet, DiceSetKind};
use wordforge::solver::loader;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list, one word per line
    #[arg(global = true, short, long, default_value = "dictionaries/enable1.txt")]
    dict: String,

    /// Built-in dice set
    #[arg(global = true, long, value_enum, default_value_t = DiceSetKind::Classic1992)]
    dice: DiceSetKind,

    /// Custom dice set JSON (overrides --dice)
    #[arg(global = true, long)]
    dice_file: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hunt for high-scoring boards with parallel tempered hill-climbing
    Search(cmd::search::SearchArgs),
    /// Score fixed or random boards and list every word found
    Score(cmd::score::ScoreArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let dice_set = match &cli.dice_file {
        Some(path) => {
            info!("Loading dice set: {}", path);
            DiceSet::load_from_file(path)
        }
        None => Ok(DiceSet::builtin(cli.dice)),
    };
    let dice_set = match dice_set {
        Ok(set) => Arc::new(set),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    info!("Loading dictionary: {}", cli.dict);
    let words = match loader::read_words(&cli.dict) {
        Ok(words) => words,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Search(args) => cmd::search::run(args, dice_set, &words),
        Commands::Score(args) => cmd::score::run(args, dice_set, &words),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
