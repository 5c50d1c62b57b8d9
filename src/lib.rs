//! Domain-agnostic local search over discrete state spaces.
//!
//! Provides generic implementations of classic local-search strategies:
//!
//! - **Hill Climbing**: steepest ascent, first choice (plateau moves
//!   allowed) and random restart.
//! - **Simulated Annealing (SA)**: Metropolis acceptance under a cooling
//!   schedule, with a random-restart wrapper.
//!
//! Every algorithm works purely through the [`SearchableState`] trait and
//! returns the final state plus the score recorded at each accepted move.
//! Two benchmark fixtures live in [`problems`]: the 3x3 sliding-tile puzzle
//! and N-queens. [`eval`] runs repeated trials and aggregates success rate,
//! steps, time and score.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem,
//! depending only on `u-numflow` (Layer 1: Foundation) for seeded random
//! sources. Randomness is always injected: every stochastic entry point has
//! a `*_with_rng` variant, and the plain variant seeds from the config.

pub mod error;
pub mod eval;
pub mod hill;
pub mod problems;
pub mod sa;
mod state;

pub use error::Error;
pub use state::{SearchResult, SearchableState};

use rand::Rng;
use u_numflow::random::create_rng;

/// Random source for the seeded entry points.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> impl Rng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
