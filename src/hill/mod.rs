//! Hill climbing.
//!
//! Single-solution local search that only ever moves uphill (or sideways,
//! for first choice). Three neighbor-selection policies share one
//! configuration: steepest ascent, first choice and random restart.
//!
//! # References
//!
//! - Russell, S. & Norvig, P. *Artificial Intelligence: A Modern Approach*,
//!   section 4.1.1.
//! - Selman, B., Levesque, H. & Mitchell, D. (1992). "A New Method for
//!   Solving Hard Satisfiability Problems", *AAAI-92*.

mod config;
mod runner;

pub use config::HillConfig;
pub use runner::HillRunner;
