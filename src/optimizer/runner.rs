use super::Worker;
use crate::config::Config;
use crate::dice::DiceSet;
use crate::error::{WfResult, WordForgeError};
use crate::solver::loader::BigramTable;
use crate::solver::Solver;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug)]
pub struct SearchOptions {
    pub num_threads: usize,
    pub reroll_rate: f64,
    pub flip_after: Duration,
    pub max_time: Option<Duration>,
    pub seed: Option<u64>,
}

impl From<&Config> for SearchOptions {
    fn from(cfg: &Config) -> Self {
        let num_threads = if cfg.search.threads == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        } else {
            cfg.search.threads
        };
        Self {
            num_threads,
            reroll_rate: cfg.search.reroll_rate,
            flip_after: Duration::from_secs(cfg.search.flip_secs),
            max_time: None, // Set manually if needed
            seed: None,
        }
    }
}

/// A new global-best board discovered by one worker.
#[derive(Debug, Clone)]
pub struct Improvement {
    pub worker: usize,
    pub score: u32,
    pub letters: Vec<String>,
}

/// Receives each global improvement as it is found.
/// Boolean return value indicates if the search should continue (true) or
/// abort (false).
pub trait ProgressCallback: Send + Sync {
    fn on_improvement(&self, seq: usize, elapsed: Duration, improvement: &Improvement) -> bool;
}

enum Control {
    Best(u32),
    Flip,
}

/// Spawns one hill-climbing worker per configured parallel unit and
/// coordinates them over channels: workers publish candidate bests upward,
/// the coordinator rebroadcasts confirmed bests downward so nobody keeps
/// chasing an already-beaten score.
#[derive(Debug)]
pub struct Searcher {
    solver: Arc<Solver>,
    bigrams: Arc<BigramTable>,
    dice: Arc<DiceSet>,
    options: SearchOptions,
}

impl Searcher {
    pub fn new(
        solver: Arc<Solver>,
        bigrams: Arc<BigramTable>,
        dice: Arc<DiceSet>,
        options: SearchOptions,
    ) -> WfResult<Self> {
        if options.num_threads == 0 {
            return Err(WordForgeError::Validation(
                "search needs at least one worker".to_string(),
            ));
        }
        if options.reroll_rate <= 0.0 || options.reroll_rate > 1.0 {
            return Err(WordForgeError::Validation(format!(
                "reroll rate {} outside (0, 1]",
                options.reroll_rate
            )));
        }
        Ok(Self { solver, bigrams, dice, options })
    }

    /// Runs until the time limit passes or the callback asks to stop;
    /// returns the best improvement seen, if any.
    pub fn run<CB: ProgressCallback>(&self, callback: &CB) -> Option<Improvement> {
        let opts = &self.options;
        let stop = AtomicBool::new(false);
        let stop = &stop;
        let (imp_tx, imp_rx) = mpsc::sync_channel::<Improvement>(opts.num_threads * 16);

        let mut best: Option<Improvement> = None;

        thread::scope(|scope| {
            let mut controls = Vec::with_capacity(opts.num_threads);
            for id in 0..opts.num_threads {
                let (ctl_tx, ctl_rx) = mpsc::channel::<Control>();
                controls.push(ctl_tx);

                let imp_tx = imp_tx.clone();
                let solver = self.solver.clone();
                let bigrams = self.bigrams.clone();
                let dice = self.dice.clone();
                let reroll_rate = opts.reroll_rate;
                let seed = opts.seed.map(|s| s + id as u64);

                scope.spawn(move || {
                    let mut worker = Worker::new(solver, bigrams, dice, reroll_rate, seed);
                    while !stop.load(Ordering::Relaxed) {
                        // Non-blocking poll: fall straight through to the
                        // next iteration when nothing is pending.
                        while let Ok(msg) = ctl_rx.try_recv() {
                            match msg {
                                Control::Best(score) => worker.observe_best(score),
                                Control::Flip => worker.flip(),
                            }
                        }
                        if let Some((score, letters)) = worker.step() {
                            if imp_tx.send(Improvement { worker: id, score, letters }).is_err() {
                                break;
                            }
                        }
                    }
                });
            }
            drop(imp_tx);

            info!("Spawned {} search workers", opts.num_threads);

            let start = Instant::now();
            let mut last_improvement = Instant::now();
            let mut seq = 0usize;
            loop {
                if let Some(limit) = opts.max_time {
                    if start.elapsed() >= limit {
                        break;
                    }
                }
                match imp_rx.recv_timeout(Duration::from_millis(200)) {
                    Ok(improvement) => {
                        // Reports race by design: act only on those that
                        // still beat the best known here.
                        if best.as_ref().map_or(true, |b| improvement.score > b.score) {
                            seq += 1;
                            for ctl in &controls {
                                let _ = ctl.send(Control::Best(improvement.score));
                            }
                            let keep_going =
                                callback.on_improvement(seq, start.elapsed(), &improvement);
                            best = Some(improvement);
                            last_improvement = Instant::now();
                            if !keep_going {
                                break;
                            }
                        }
                    }
                    Err(RecvTimeoutError::Timeout) => {
                        if last_improvement.elapsed() >= opts.flip_after {
                            debug!(
                                "No improvement for {:?}, flipping every worker",
                                opts.flip_after
                            );
                            for ctl in &controls {
                                let _ = ctl.send(Control::Flip);
                            }
                            last_improvement = Instant::now();
                        }
                    }
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }

            stop.store(true, Ordering::Relaxed);
            // Unblocks any worker waiting on a full improvement buffer.
            drop(imp_rx);
        });

        best
    }
}
