//! SA execution loop.

use log::{debug, trace};
use rand::Rng;

use super::config::SaConfig;
use crate::error::Error;
use crate::state::{SearchResult, SearchableState};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult<S> {
    /// The returned state: the goal state if one was reached, otherwise
    /// the best state seen during the walk.
    pub state: S,

    /// Score of every accepted state, starting with the initial score.
    ///
    /// Unlike hill climbing this trace may decrease.
    pub scores: Vec<f64>,

    /// Best score seen during the walk.
    pub best_score: f64,

    /// Whether the run ended by reaching the goal.
    pub reached_goal: bool,

    /// Total number of iterations (neighbor draws).
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Best score at the start and after every temperature level.
    pub best_history: Vec<f64>,
}

impl<S> From<SaResult<S>> for SearchResult<S> {
    fn from(result: SaResult<S>) -> Self {
        SearchResult {
            state: result.state,
            scores: result.scores,
        }
    }
}

/// Executes Simulated Annealing over a [`SearchableState`].
pub struct SaRunner;

impl SaRunner {
    /// Anneals from `initial`, seeding the random source from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::problems::QueensState;
    /// use u_localsearch::sa::{SaConfig, SaRunner};
    ///
    /// let config = SaConfig::default().with_seed(42);
    /// let start = QueensState::from_columns(&[0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    /// let result = SaRunner::anneal(start, &config).unwrap();
    /// assert_eq!(result.scores[0], 72.0);
    /// ```
    pub fn anneal<S: SearchableState>(
        initial: S,
        config: &SaConfig,
    ) -> Result<SearchResult<S>, Error> {
        let mut rng = crate::rng_from_seed(config.seed);
        Self::run_with_rng(initial, config, &mut rng).map(Into::into)
    }

    /// Anneals from `initial` with an explicit random source.
    pub fn anneal_with_rng<S: SearchableState, R: Rng>(
        initial: S,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SearchResult<S>, Error> {
        Self::run_with_rng(initial, config, rng).map(Into::into)
    }

    /// Anneals from `initial` and reports full run statistics.
    ///
    /// At each temperature level the walk draws
    /// `iterations_per_temperature` random neighbors. An improving
    /// neighbor is always accepted; a worse or equal one with probability
    /// `exp(delta / T)` (Metropolis criterion). A state without neighbors
    /// ends the current level early. The run returns as soon as the goal is
    /// accepted, or after cooling to `min_temperature`.
    pub fn run_with_rng<S: SearchableState, R: Rng>(
        initial: S,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<S>, Error> {
        config.validate()?;

        let mut current = initial;
        let mut current_score = current.evaluate();
        let mut best = current.clone();
        let mut best_score = current_score;

        let mut scores = vec![current_score];
        let mut best_history = vec![best_score];
        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut reached_goal = current.is_goal();

        'cooling: while !reached_goal && temperature > config.min_temperature {
            for _ in 0..config.iterations_per_temperature {
                let mut neighbors = current.neighbors();
                if neighbors.is_empty() {
                    break;
                }
                let candidate = neighbors.swap_remove(rng.random_range(0..neighbors.len()));
                let candidate_score = candidate.evaluate();
                let delta = candidate_score - current_score;
                iterations += 1;

                // Metropolis acceptance criterion
                let accept = if delta > 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    rng.random_range(0.0..1.0) < (delta / temperature).exp()
                };

                if accept {
                    current = candidate;
                    current_score = candidate_score;
                    scores.push(current_score);
                    accepted_moves += 1;

                    if current_score > best_score {
                        best = current.clone();
                        best_score = current_score;
                    }

                    if current.is_goal() {
                        reached_goal = true;
                        break 'cooling;
                    }
                }
            }

            best_history.push(best_score);
            trace!("T = {temperature:.4}: current {current_score}, best {best_score}");
            temperature = config.cooling.next(temperature);
        }

        if reached_goal {
            best_history.push(best_score);
        }

        debug!(
            "annealing finished: best {best_score}, goal {reached_goal}, \
             {accepted_moves}/{iterations} accepted, T = {temperature:.4}"
        );

        Ok(SaResult {
            state: if reached_goal { current } else { best },
            scores,
            best_score,
            reached_goal,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            best_history,
        })
    }

    /// Restarting annealing seeded from `config.seed`.
    pub fn random_restart<S: SearchableState>(
        initial: S,
        config: &SaConfig,
    ) -> Result<SearchResult<S>, Error> {
        let mut rng = crate::rng_from_seed(config.seed);
        Self::random_restart_with_rng(initial, config, &mut rng)
    }

    /// Runs up to `config.num_restarts` annealing runs.
    ///
    /// Each run after the first starts from [`SearchableState::regenerate`].
    /// Stops at the first run that reaches the goal. Returns the best state
    /// across runs and every run's trace concatenated in order.
    pub fn random_restart_with_rng<S: SearchableState, R: Rng>(
        initial: S,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SearchResult<S>, Error> {
        config.validate()?;

        let mut best = initial.clone();
        let mut best_score = best.evaluate();
        let mut start = initial;
        let mut scores = Vec::new();

        for attempt in 0..config.num_restarts {
            let result = Self::run_with_rng(start, config, rng)?;
            scores.extend(result.scores);

            let score = result.state.evaluate();
            let reached_goal = result.state.is_goal();
            debug!("restart {attempt}: annealing ended at {score} (best {best_score})");

            if score > best_score {
                best = result.state;
                best_score = score;
            }
            if reached_goal {
                break;
            }

            start = best.regenerate(rng);
        }

        if scores.is_empty() {
            scores.push(best_score);
        }

        Ok(SearchResult {
            state: best,
            scores,
        })
    }
}
