//! Repeated-trial evaluation of search strategies.

use std::fmt;
use std::time::Instant;

use log::debug;
use rand::Rng;
use u_numflow::stats;

use super::strategy::Strategy;
use crate::error::Error;
use crate::state::SearchableState;

/// Aggregate statistics over a batch of trials.
///
/// Standard deviations are population deviations over the trials.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialStats {
    /// Number of trials run.
    pub trials: usize,
    /// Fraction of trials whose final state was a goal.
    pub success_rate: f64,
    /// Mean score-trace length.
    pub avg_steps: f64,
    pub std_steps: f64,
    /// Mean wall time per trial, in seconds.
    pub avg_time: f64,
    pub std_time: f64,
    /// Mean final score (last trace entry).
    pub avg_score: f64,
    pub std_score: f64,
}

impl TrialStats {
    fn from_samples(
        successes: usize,
        steps: &[f64],
        times: &[f64],
        scores: &[f64],
    ) -> Result<Self, Error> {
        let trials = steps.len();
        let (avg_steps, std_steps) = summarize(steps, "steps")?;
        let (avg_time, std_time) = summarize(times, "times")?;
        let (avg_score, std_score) = summarize(scores, "scores")?;
        Ok(Self {
            trials,
            success_rate: successes as f64 / trials as f64,
            avg_steps,
            std_steps,
            avg_time,
            std_time,
            avg_score,
            std_score,
        })
    }
}

impl fmt::Display for TrialStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "success rate: {:.2}%", self.success_rate * 100.0)?;
        writeln!(f, "steps: {:.2} ± {:.2}", self.avg_steps, self.std_steps)?;
        writeln!(f, "time: {:.4}s ± {:.4}s", self.avg_time, self.std_time)?;
        write!(f, "score: {:.2} ± {:.2}", self.avg_score, self.std_score)
    }
}

/// Mean and population standard deviation.
fn summarize(values: &[f64], what: &'static str) -> Result<(f64, f64), Error> {
    stats::mean(values)
        .zip(stats::population_std_dev(values))
        .ok_or(Error::DegenerateSamples { what })
}

/// Runs strategies repeatedly on freshly generated problem instances.
///
/// The generator is the problem-generator contract: a zero-argument
/// callable returning a new random starting state. It owns whatever random
/// source it draws from, separate from the one driving the searches.
///
/// # Examples
///
/// ```
/// use u_localsearch::eval::{Evaluator, Strategy};
/// use u_localsearch::hill::HillConfig;
/// use u_localsearch::problems::QueensState;
/// use u_numflow::random::create_rng;
///
/// let mut problems = create_rng(7);
/// let mut evaluator = Evaluator::new(move || QueensState::random(8, &mut problems));
/// let mut rng = create_rng(42);
/// let stats = evaluator
///     .evaluate(&Strategy::SteepestAscent(HillConfig::default()), 20, &mut rng)
///     .unwrap();
/// assert_eq!(stats.trials, 20);
/// assert!(stats.success_rate <= 1.0);
/// ```
pub struct Evaluator<G> {
    generator: G,
}

impl<G> Evaluator<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Runs `strategy` for `trials` independent trials.
    pub fn evaluate<S, R>(
        &mut self,
        strategy: &Strategy,
        trials: usize,
        rng: &mut R,
    ) -> Result<TrialStats, Error>
    where
        S: SearchableState,
        R: Rng,
        G: FnMut() -> S,
    {
        if trials == 0 {
            return Err(Error::InvalidConfig("trials must be positive".into()));
        }

        let mut successes = 0;
        let mut steps = Vec::with_capacity(trials);
        let mut times = Vec::with_capacity(trials);
        let mut scores = Vec::with_capacity(trials);

        for _ in 0..trials {
            let initial = (self.generator)();

            let started = Instant::now();
            let result = strategy.run(initial, rng)?;
            let elapsed = started.elapsed().as_secs_f64();

            if result.is_goal() {
                successes += 1;
            }
            steps.push(result.steps() as f64);
            times.push(elapsed);
            scores.push(result.final_score());
        }

        let stats = TrialStats::from_samples(successes, &steps, &times, &scores)?;
        debug!(
            "{}: {trials} trials, success rate {:.2}",
            strategy.name(),
            stats.success_rate
        );
        Ok(stats)
    }

    /// Evaluates several labelled strategies in order, each with its own
    /// trial count.
    pub fn compare<S, R>(
        &mut self,
        entries: &[(&str, Strategy, usize)],
        rng: &mut R,
    ) -> Result<Vec<(String, TrialStats)>, Error>
    where
        S: SearchableState,
        R: Rng,
        G: FnMut() -> S,
    {
        entries
            .iter()
            .map(|(label, strategy, trials)| {
                self.evaluate(strategy, *trials, rng)
                    .map(|stats| (label.to_string(), stats))
            })
            .collect()
    }
}
