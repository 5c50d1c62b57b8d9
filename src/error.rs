//! Error type shared by state construction and algorithm configuration.

use thiserror::Error;

/// Errors surfaced by fallible constructors and configuration checks.
///
/// Search itself never fails: dead ends and exhausted budgets are ordinary
/// terminations reported through [`SearchResult`](crate::SearchResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid tile board: no blank (0) cell")]
    MissingBlank,

    #[error("invalid tile board: value {value} appears more than once")]
    DuplicateTile { value: u8 },

    #[error("invalid tile board: value {value} outside 0..=8")]
    TileOutOfRange { value: u8 },

    #[error("invalid queens board: row {row} has column {col}, board size is {size}")]
    ColumnOutOfRange { row: usize, col: usize, size: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot summarize {what}: samples are empty or not finite")]
    DegenerateSamples { what: &'static str },
}
