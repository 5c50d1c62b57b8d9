//! Hill-climbing execution engines.
//!
//! # Policies
//!
//! - **Steepest ascent**: evaluate every neighbor, move to the best one if
//!   it strictly improves; otherwise stop at the local optimum.
//! - **First choice**: visit neighbors in random order and take the first
//!   one scoring at least as well as the current state. Plateau moves are
//!   allowed; cycles are not detected.
//! - **Random restart**: run steepest ascent repeatedly from fresh random
//!   states until one climb reaches the goal or the restart budget runs out.
//!
//! # Reference
//!
//! Russell, S. & Norvig, P. *Artificial Intelligence: A Modern Approach*,
//! section 4.1.1 (hill-climbing search).

use log::debug;
use rand::Rng;

use super::config::HillConfig;
use crate::state::{SearchResult, SearchableState};

/// Hill-climbing runner.
pub struct HillRunner;

impl HillRunner {
    /// Greedy ascent to the best strictly improving neighbor.
    ///
    /// Among equally scored best neighbors the first in enumeration order
    /// wins. Deterministic, so no random source is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::hill::{HillConfig, HillRunner};
    /// use u_localsearch::problems::{TilePuzzle, CANONICAL_GOAL};
    ///
    /// let start = TilePuzzle::solved(CANONICAL_GOAL).unwrap();
    /// let result = HillRunner::steepest_ascent(start, &HillConfig::default());
    /// assert!(result.is_goal());
    /// assert_eq!(result.scores, vec![100.0]);
    /// ```
    pub fn steepest_ascent<S: SearchableState>(initial: S, config: &HillConfig) -> SearchResult<S> {
        let mut current = initial;
        let mut current_score = current.evaluate();
        let mut scores = vec![current_score];

        for _ in 0..config.max_steps {
            if current.is_goal() {
                break;
            }

            let mut best: Option<(S, f64)> = None;
            for neighbor in current.neighbors() {
                let score = neighbor.evaluate();
                if best.as_ref().is_none_or(|&(_, b)| score > b) {
                    best = Some((neighbor, score));
                }
            }

            // Dead end or strict local optimum
            let Some((next, next_score)) = best else {
                break;
            };
            if next_score <= current_score {
                break;
            }

            current = next;
            current_score = next_score;
            scores.push(current_score);
        }

        debug!(
            "steepest ascent finished: score {current_score} after {} moves",
            scores.len() - 1
        );
        SearchResult {
            state: current,
            scores,
        }
    }

    /// First-choice hill climbing seeded from `config.seed`.
    pub fn first_choice<S: SearchableState>(initial: S, config: &HillConfig) -> SearchResult<S> {
        let mut rng = crate::rng_from_seed(config.seed);
        Self::first_choice_with_rng(initial, config, &mut rng)
    }

    /// First-choice hill climbing with an explicit random source.
    ///
    /// Stops when a full scan finds no neighbor scoring at least as well
    /// as the current state.
    pub fn first_choice_with_rng<S: SearchableState, R: Rng>(
        initial: S,
        config: &HillConfig,
        rng: &mut R,
    ) -> SearchResult<S> {
        let mut current = initial;
        let mut current_score = current.evaluate();
        let mut scores = vec![current_score];

        for _ in 0..config.max_steps {
            if current.is_goal() {
                break;
            }

            let mut neighbors = current.neighbors();
            if neighbors.is_empty() {
                break;
            }
            u_numflow::random::shuffle(&mut neighbors, rng);

            let accepted = neighbors
                .into_iter()
                .map(|n| {
                    let score = n.evaluate();
                    (n, score)
                })
                .find(|&(_, score)| score >= current_score);

            match accepted {
                Some((next, next_score)) => {
                    current = next;
                    current_score = next_score;
                    scores.push(current_score);
                }
                None => break,
            }
        }

        debug!(
            "first choice finished: score {current_score} after {} moves",
            scores.len() - 1
        );
        SearchResult {
            state: current,
            scores,
        }
    }

    /// Random-restart hill climbing seeded from `config.seed`.
    pub fn random_restart<S: SearchableState>(initial: S, config: &HillConfig) -> SearchResult<S> {
        let mut rng = crate::rng_from_seed(config.seed);
        Self::random_restart_with_rng(initial, config, &mut rng)
    }

    /// Random-restart hill climbing with an explicit random source.
    ///
    /// Each attempt is a steepest ascent. Failed attempts are followed by a
    /// fresh state from [`SearchableState::regenerate`]. The returned state
    /// is the best across attempts and the trace is every attempt's trace
    /// concatenated in order.
    pub fn random_restart_with_rng<S: SearchableState, R: Rng>(
        initial: S,
        config: &HillConfig,
        rng: &mut R,
    ) -> SearchResult<S> {
        let mut best = initial.clone();
        let mut best_score = best.evaluate();
        let mut start = initial;
        let mut scores = Vec::new();

        for attempt in 0..config.max_restarts {
            let SearchResult {
                state,
                scores: attempt_scores,
            } = Self::steepest_ascent(start, config);
            scores.extend(attempt_scores);

            let score = state.evaluate();
            let reached_goal = state.is_goal();
            debug!("restart {attempt}: climb ended at {score} (best {best_score})");

            if score > best_score {
                best = state;
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

        SearchResult {
            state: best,
            scores,
        }
    }
}
