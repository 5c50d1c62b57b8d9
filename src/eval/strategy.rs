//! A configured algorithm, selectable at runtime.

use rand::Rng;

use crate::error::Error;
use crate::hill::{HillConfig, HillRunner};
use crate::sa::{SaConfig, SaRunner};
use crate::state::{SearchResult, SearchableState};

/// One algorithm entry point together with its configuration.
///
/// Lets a harness treat every algorithm uniformly: given a starting state
/// and a random source, produce a [`SearchResult`]. The `seed` field of the
/// inner config is ignored; the caller's random source is used instead.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    SteepestAscent(HillConfig),
    FirstChoice(HillConfig),
    RandomRestart(HillConfig),
    Anneal(SaConfig),
    RestartAnneal(SaConfig),
}

impl Strategy {
    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::SteepestAscent(_) => "steepest ascent",
            Strategy::FirstChoice(_) => "first choice",
            Strategy::RandomRestart(_) => "random restart",
            Strategy::Anneal(_) => "simulated annealing",
            Strategy::RestartAnneal(_) => "restart annealing",
        }
    }

    /// Runs the algorithm from `initial`.
    ///
    /// Only the annealing variants can fail, on an invalid [`SaConfig`].
    pub fn run<S: SearchableState, R: Rng>(
        &self,
        initial: S,
        rng: &mut R,
    ) -> Result<SearchResult<S>, Error> {
        match self {
            Strategy::SteepestAscent(config) => Ok(HillRunner::steepest_ascent(initial, config)),
            Strategy::FirstChoice(config) => {
                Ok(HillRunner::first_choice_with_rng(initial, config, rng))
            }
            Strategy::RandomRestart(config) => {
                Ok(HillRunner::random_restart_with_rng(initial, config, rng))
            }
            Strategy::Anneal(config) => SaRunner::anneal_with_rng(initial, config, rng),
            Strategy::RestartAnneal(config) => {
                SaRunner::random_restart_with_rng(initial, config, rng)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::{TilePuzzle, CANONICAL_GOAL};
    use u_numflow::random::create_rng;

    #[test]
    fn test_every_strategy_keeps_solved_puzzle() {
        let strategies = [
            Strategy::SteepestAscent(HillConfig::default()),
            Strategy::FirstChoice(HillConfig::default()),
            Strategy::RandomRestart(HillConfig::default()),
            Strategy::Anneal(SaConfig::default()),
            Strategy::RestartAnneal(SaConfig::default()),
        ];
        let start = TilePuzzle::solved(CANONICAL_GOAL).unwrap();
        let mut rng = create_rng(42);

        for strategy in &strategies {
            let result = strategy.run(start.clone(), &mut rng).unwrap();
            assert!(result.is_goal(), "{} lost the goal", strategy.name());
            assert_eq!(result.scores, vec![100.0], "{}", strategy.name());
        }
    }

    #[test]
    fn test_invalid_anneal_config_surfaces() {
        let strategy = Strategy::Anneal(SaConfig::default().with_min_temperature(-1.0));
        let start = TilePuzzle::solved(CANONICAL_GOAL).unwrap();
        let mut rng = create_rng(42);
        assert!(strategy.run(start, &mut rng).is_err());
    }
}
