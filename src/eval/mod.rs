//! Strategy evaluation.
//!
//! Runs configured algorithms many times on freshly generated problem
//! instances and aggregates the observables every run exposes: whether the
//! final state is a goal, the length of the score trace and its last
//! entry, plus wall time.

mod evaluator;
mod strategy;
mod trace;

pub use evaluator::{Evaluator, TrialStats};
pub use strategy::Strategy;
pub use trace::pad_traces;
