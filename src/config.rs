use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Worker threads; 0 means one per available core
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Expected fraction of the board re-rolled per mutation
    #[arg(long, default_value_t = 0.35)]
    pub reroll_rate: f64,

    /// Seconds without a global improvement before every worker discards
    /// its board for a fresh roll
    #[arg(long, default_value_t = 300)]
    pub flip_secs: u64,
}
