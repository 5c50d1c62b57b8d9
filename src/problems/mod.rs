//! Benchmark problems implementing [`SearchableState`](crate::SearchableState).
//!
//! - [`TilePuzzle`]: the 3x3 sliding-tile puzzle scored by Manhattan
//!   distance to a per-instance goal grid.
//! - [`QueensState`]: N-queens with one queen per row, scored by the
//!   number of attacking pairs.
//!
//! Both score `100 - penalty`, so a goal state scores exactly 100.

mod puzzle;
mod queens;

pub use puzzle::{Direction, Grid, TilePuzzle, CANONICAL_GOAL};
pub use queens::{QueensState, DEFAULT_SIZE};
