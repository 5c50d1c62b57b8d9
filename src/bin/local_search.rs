//! Command-line driver comparing local-search strategies on a benchmark
//! problem.

use std::fmt::Display;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{debug, info, LevelFilter};
use u_numflow::random::create_rng;

use u_localsearch::eval::{pad_traces, Evaluator, Strategy};
use u_localsearch::hill::HillConfig;
use u_localsearch::problems::{QueensState, TilePuzzle, CANONICAL_GOAL};
use u_localsearch::sa::SaConfig;
use u_localsearch::SearchableState;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Problem {
    /// 3x3 sliding-tile puzzle against the canonical goal
    Puzzle,
    /// N-queens
    Queens,
}

#[derive(Parser, Debug)]
#[command(version, about = "Compare hill climbing and simulated annealing on benchmark problems.")]
struct Cli {
    /// Benchmark problem to run
    #[arg(value_enum)]
    problem: Problem,

    /// Board size for N-queens
    #[arg(long, default_value_t = 8)]
    size: usize,

    /// Only generate puzzles that can reach the goal
    #[arg(long)]
    solvable: bool,

    /// Trials per strategy
    #[arg(short, long, default_value_t = 20)]
    trials: usize,

    /// Random seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Step budget of a single climb
    #[arg(long, default_value_t = 1000)]
    max_steps: usize,

    /// Climbs allowed to random-restart hill climbing
    #[arg(long, default_value_t = 1000)]
    max_restarts: usize,

    /// Initial annealing temperature
    #[arg(long, default_value_t = 100.0)]
    initial_temp: f64,

    /// Geometric cooling factor
    #[arg(long, default_value_t = 0.95)]
    cooling_rate: f64,

    /// Temperature floor
    #[arg(long, default_value_t = 0.01)]
    min_temp: f64,

    /// Iterations per temperature level
    #[arg(long, default_value_t = 100)]
    steps_per_temp: usize,

    /// Annealing runs allowed to restart annealing
    #[arg(long, default_value_t = 10)]
    num_restarts: usize,

    /// Also run each strategy once and print padded score traces as CSV
    #[arg(long)]
    traces: bool,

    /// Increase verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn strategies(&self) -> anyhow::Result<Vec<Strategy>> {
        let hill = HillConfig::default()
            .with_max_steps(self.max_steps)
            .with_max_restarts(self.max_restarts);
        let sa = SaConfig::default()
            .with_initial_temperature(self.initial_temp)
            .with_cooling_rate(self.cooling_rate)
            .with_min_temperature(self.min_temp)
            .with_iterations_per_temperature(self.steps_per_temp)
            .with_num_restarts(self.num_restarts);
        sa.validate().context("invalid annealing parameters")?;

        Ok(vec![
            Strategy::SteepestAscent(hill.clone()),
            Strategy::FirstChoice(hill.clone()),
            Strategy::RandomRestart(hill),
            Strategy::Anneal(sa.clone()),
            Strategy::RestartAnneal(sa),
        ])
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .format_timestamp_micros()
        .init();
}

fn compare<S, G>(cli: &Cli, mut generator: G) -> anyhow::Result<()>
where
    S: SearchableState + Display,
    G: FnMut() -> S,
{
    let strategies = cli.strategies()?;
    let mut rng = create_rng(cli.seed.unwrap_or_else(rand::random));

    let sample = generator();
    info!("sample initial state (score {}):\n{sample}", sample.evaluate());

    let mut evaluator = Evaluator::new(generator);
    for strategy in &strategies {
        info!("evaluating {} over {} trials", strategy.name(), cli.trials);
        let stats = evaluator
            .evaluate(strategy, cli.trials, &mut rng)
            .with_context(|| format!("{} failed", strategy.name()))?;
        println!("== {}\n{stats}\n", strategy.name());
    }

    if cli.traces {
        let mut traces = Vec::with_capacity(strategies.len());
        for strategy in &strategies {
            let result = strategy.run(sample.clone(), &mut rng)?;
            debug!("{} final state:\n{}", strategy.name(), result.state);
            traces.push(result.scores);
        }

        let names: Vec<&str> = strategies.iter().map(Strategy::name).collect();
        println!("step,{}", names.join(","));
        for (step, row) in transpose(&pad_traces(&traces)).iter().enumerate() {
            let cells: Vec<String> = row.iter().map(f64::to_string).collect();
            println!("{step},{}", cells.join(","));
        }
    }

    Ok(())
}

fn transpose(traces: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let len = traces.first().map_or(0, Vec::len);
    (0..len)
        .map(|i| traces.iter().map(|t| t[i]).collect())
        .collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);
    debug!("{cli:?}");

    // Problem instances draw from their own stream so that changing the
    // strategy set does not change the instances.
    let mut problems = create_rng(cli.seed.map_or_else(rand::random, |s| s.wrapping_add(1)));

    match cli.problem {
        Problem::Puzzle => {
            let template = TilePuzzle::solved(CANONICAL_GOAL)?;
            let solvable = cli.solvable;
            compare(&cli, move || loop {
                let puzzle = template.regenerate(&mut problems);
                if !solvable || puzzle.is_solvable() {
                    break puzzle;
                }
            })
        }
        Problem::Queens => {
            anyhow::ensure!(cli.size > 0, "board size must be positive");
            let size = cli.size;
            compare(&cli, move || QueensState::random(size, &mut problems))
        }
    }
}
