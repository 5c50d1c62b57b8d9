//! N-queens placement with one queen per row.

use std::fmt;

use rand::Rng;

use crate::error::Error;
use crate::state::SearchableState;

/// Board size used by [`QueensState::default`].
pub const DEFAULT_SIZE: usize = 8;

/// An N-queens board storing, for each row, the column of its queen.
///
/// Nothing stops two queens from sharing a column or a diagonal; the
/// score counts those conflicts and search drives them to zero.
///
/// # Examples
///
/// ```
/// use u_localsearch::problems::QueensState;
/// use u_localsearch::SearchableState;
///
/// let solved = QueensState::from_columns(&[1, 3, 0, 2]).unwrap();
/// assert!(solved.is_goal());
///
/// let stacked = QueensState::from_columns(&[0, 0, 0, 0]).unwrap();
/// assert_eq!(stacked.evaluate(), 94.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueensState {
    cols: Vec<Option<usize>>,
}

impl Default for QueensState {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl QueensState {
    /// An empty `n`x`n` board.
    pub fn new(n: usize) -> Self {
        Self {
            cols: vec![None; n],
        }
    }

    /// A fully placed board, `cols[row]` giving each row's column.
    ///
    /// Fails with [`Error::ColumnOutOfRange`] if a column is not smaller
    /// than `cols.len()`.
    pub fn from_columns(cols: &[usize]) -> Result<Self, Error> {
        let size = cols.len();
        if let Some((row, &col)) = cols.iter().enumerate().find(|&(_, &c)| c >= size) {
            return Err(Error::ColumnOutOfRange { row, col, size });
        }
        Ok(Self {
            cols: cols.iter().map(|&c| Some(c)).collect(),
        })
    }

    /// One queen per row in a uniformly random column.
    ///
    /// Placement ignores conflicts, so the result usually has attacking
    /// pairs.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let cols = (0..n).map(|_| Some(rng.random_range(0..n))).collect();
        Self { cols }
    }

    /// Board size N.
    pub fn size(&self) -> usize {
        self.cols.len()
    }

    /// Column of the queen in `row`, if one is placed.
    pub fn queen(&self, row: usize) -> Option<usize> {
        self.cols.get(row).copied().flatten()
    }

    /// Per-row columns.
    pub fn columns(&self) -> &[Option<usize>] {
        &self.cols
    }

    /// A copy with the queen of `row` moved to `col`, or `None` when either
    /// index falls outside the board.
    pub fn with_queen(&self, row: usize, col: usize) -> Option<Self> {
        let n = self.size();
        if row >= n || col >= n {
            return None;
        }
        let mut cols = self.cols.clone();
        cols[row] = Some(col);
        Some(Self { cols })
    }

    /// Whether a queen at (`row`, `col`) would be safe from every other
    /// placed queen.
    ///
    /// Advisory only: neither random placement nor neighbor generation
    /// consults it.
    pub fn is_valid_position(&self, row: usize, col: usize) -> bool {
        self.cols.iter().enumerate().all(|(other_row, &other)| match other {
            Some(other_col) if other_row != row => !attacks(row, col, other_row, other_col),
            _ => true,
        })
    }

    /// Number of placed queen pairs sharing a column or a diagonal.
    pub fn attacking_pairs(&self) -> usize {
        let placed: Vec<(usize, usize)> = self
            .cols
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|c| (row, c)))
            .collect();

        let mut pairs = 0;
        for (i, &(r1, c1)) in placed.iter().enumerate() {
            for &(r2, c2) in &placed[i + 1..] {
                if attacks(r1, c1, r2, c2) {
                    pairs += 1;
                }
            }
        }
        pairs
    }
}

fn attacks(r1: usize, c1: usize, r2: usize, c2: usize) -> bool {
    c1 == c2 || r1.abs_diff(r2) == c1.abs_diff(c2)
}

impl SearchableState for QueensState {
    /// Moves one row's queen to each other column, row by row.
    ///
    /// A row with no queen yet contributes one neighbor per column.
    fn neighbors(&self) -> Vec<Self> {
        let n = self.size();
        let mut out = Vec::with_capacity(n * n.saturating_sub(1));
        for row in 0..n {
            let current = self.cols[row];
            for col in 0..n {
                if current != Some(col) {
                    let mut cols = self.cols.clone();
                    cols[row] = Some(col);
                    out.push(Self { cols });
                }
            }
        }
        out
    }

    fn evaluate(&self) -> f64 {
        Self::OPTIMUM - self.attacking_pairs() as f64
    }

    fn regenerate<R: Rng>(&self, rng: &mut R) -> Self {
        Self::random(self.size(), rng)
    }
}

impl fmt::Display for QueensState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for (row, &col) in self.cols.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let cells: Vec<&str> = (0..n)
                .map(|c| if col == Some(c) { "Q" } else { "." })
                .collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_numflow::random::create_rng;

    #[test]
    fn test_four_queens_solution_is_goal() {
        let s = QueensState::from_columns(&[1, 3, 0, 2]).unwrap();
        assert_eq!(s.attacking_pairs(), 0);
        assert_eq!(s.evaluate(), 100.0);
        assert!(s.is_goal());
    }

    #[test]
    fn test_same_column_counts_every_pair() {
        let s = QueensState::from_columns(&[0, 0, 0, 0]).unwrap();
        assert_eq!(s.attacking_pairs(), 6);
        assert_eq!(s.evaluate(), 94.0);
        assert!(!s.is_goal());
    }

    #[test]
    fn test_diagonal_conflict() {
        let s = QueensState::from_columns(&[0, 1, 3, 2]).unwrap();
        // (0,0)-(1,1) and (2,3)-(3,2).
        assert_eq!(s.attacking_pairs(), 2);
    }

    #[test]
    fn test_neighbor_count() {
        let s = QueensState::from_columns(&[0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        let ns = s.neighbors();
        assert_eq!(ns.len(), 8 * 7);
        for n in &ns {
            let changed = n
                .columns()
                .iter()
                .zip(s.columns())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(changed, 1);
        }
    }

    #[test]
    fn test_empty_board() {
        let s = QueensState::new(4);
        assert_eq!(s.attacking_pairs(), 0);
        assert_eq!(s.queen(0), None);
        assert_eq!(s.neighbors().len(), 16);
    }

    #[test]
    fn test_with_queen_bounds() {
        let s = QueensState::new(4);
        assert!(s.with_queen(4, 0).is_none());
        assert!(s.with_queen(0, 4).is_none());
        let placed = s.with_queen(2, 1).unwrap();
        assert_eq!(placed.queen(2), Some(1));
        assert_eq!(s.queen(2), None);
    }

    #[test]
    fn test_is_valid_position() {
        let s = QueensState::new(8).with_queen(0, 0).unwrap();
        assert!(!s.is_valid_position(1, 1));
        assert!(!s.is_valid_position(3, 0));
        assert!(s.is_valid_position(1, 2));
        // The queen's own row is ignored.
        assert!(s.is_valid_position(0, 5));
    }

    #[test]
    fn test_random_fills_every_row() {
        let mut rng = create_rng(11);
        let s = QueensState::random(8, &mut rng);
        assert_eq!(s.size(), 8);
        assert!(s.columns().iter().all(|c| matches!(c, Some(col) if *col < 8)));
        assert_eq!(s.regenerate(&mut rng).size(), 8);
    }

    #[test]
    fn test_default_is_eight() {
        assert_eq!(QueensState::default().size(), 8);
    }

    #[test]
    fn test_from_columns_rejects_out_of_range() {
        assert_eq!(
            QueensState::from_columns(&[0, 4, 1, 2]),
            Err(Error::ColumnOutOfRange {
                row: 1,
                col: 4,
                size: 4
            })
        );
        assert!(QueensState::from_columns(&[]).unwrap().columns().is_empty());
    }

    #[test]
    fn test_display() {
        let s = QueensState::from_columns(&[1, 0]).unwrap();
        assert_eq!(s.to_string(), ". Q\nQ .");
    }
}
