//! Core trait for searchable states.
//!
//! [`SearchableState`] is the contract between the generic search engines
//! and the problem fixtures. The engines only ever enumerate neighbors,
//! evaluate fitness, test for the goal and ask a state for a fresh random
//! sibling when they restart.

use rand::Rng;

/// Defines a state of a local-search problem.
///
/// States are immutable values: every move allocates a new state, so a
/// state held as "best" is never affected by later steps of the walk.
///
/// # Maximization
///
/// Unlike the cost-minimizing runners elsewhere in the U-Engine family,
/// local search here maximizes [`evaluate`](SearchableState::evaluate).
/// The global optimum is the fixed constant [`OPTIMUM`](SearchableState::OPTIMUM).
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_localsearch::SearchableState;
///
/// #[derive(Clone)]
/// struct Counter(i32);
///
/// impl SearchableState for Counter {
///     const OPTIMUM: f64 = 10.0;
///
///     fn neighbors(&self) -> Vec<Self> {
///         vec![Counter(self.0 - 1), Counter(self.0 + 1)]
///     }
///
///     fn evaluate(&self) -> f64 {
///         10.0 - (10 - self.0).abs() as f64
///     }
///
///     fn regenerate<R: Rng>(&self, rng: &mut R) -> Self {
///         Counter(rng.random_range(-20..20))
///     }
/// }
///
/// assert!(Counter(10).is_goal());
/// assert_eq!(Counter(7).evaluate(), 7.0);
/// ```
pub trait SearchableState: Clone {
    /// Fitness of a global optimum.
    const OPTIMUM: f64 = 100.0;

    /// All states reachable by one atomic perturbation.
    ///
    /// May be empty, which every engine treats as a dead end.
    fn neighbors(&self) -> Vec<Self>;

    /// Fitness of this state. Higher is better, never above `OPTIMUM`.
    fn evaluate(&self) -> f64;

    /// Returns `true` when this state scores exactly `OPTIMUM`.
    fn is_goal(&self) -> bool {
        self.evaluate() == Self::OPTIMUM
    }

    /// Creates a fresh random state of the same problem family.
    ///
    /// Restart strategies call this instead of inspecting the concrete
    /// type, so the instance carries whatever it needs (goal grid, board
    /// size) to build its own replacement.
    fn regenerate<R: Rng>(&self, rng: &mut R) -> Self;
}

/// Outcome of a single search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<S> {
    /// The state returned by the algorithm.
    pub state: S,

    /// Scores recorded at each accepted transition, starting with the
    /// initial score. Never empty.
    pub scores: Vec<f64>,
}

impl<S: SearchableState> SearchResult<S> {
    /// Whether the returned state is a global optimum.
    pub fn is_goal(&self) -> bool {
        self.state.is_goal()
    }

    /// Length of the score trace.
    pub fn steps(&self) -> usize {
        self.scores.len()
    }

    /// Last recorded score.
    pub fn final_score(&self) -> f64 {
        self.scores.last().copied().unwrap_or(f64::NEG_INFINITY)
    }
}
