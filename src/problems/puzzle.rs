//! 3x3 sliding-tile puzzle (the 8-puzzle).

use std::fmt;

use rand::Rng;

use crate::error::Error;
use crate::state::SearchableState;

const SIZE: usize = 3;
const TILES: usize = SIZE * SIZE;

/// A 3x3 grid of tile values, 0 marking the blank.
pub type Grid = [[u8; SIZE]; SIZE];

/// The goal used when none is specified: the blank in the top-left corner
/// followed by tiles 1..8 in row-major order.
pub const CANONICAL_GOAL: Grid = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];

/// Direction in which the blank slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A sliding-tile puzzle state together with the goal it is scored against.
///
/// The goal travels with each instance, so neighbors and regenerated
/// states keep scoring against the same target.
///
/// # Examples
///
/// ```
/// use u_localsearch::problems::{TilePuzzle, CANONICAL_GOAL};
/// use u_localsearch::SearchableState;
///
/// let puzzle = TilePuzzle::new([[1, 0, 2], [3, 4, 5], [6, 7, 8]], CANONICAL_GOAL).unwrap();
/// assert_eq!(puzzle.evaluate(), 99.0);
/// assert_eq!(puzzle.neighbors().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePuzzle {
    board: Grid,
    goal: Grid,
    blank: (usize, usize),
}

impl TilePuzzle {
    /// Creates a puzzle, rejecting malformed boards or goals.
    ///
    /// Both grids must hold each of 0..=8 exactly once.
    pub fn new(board: Grid, goal: Grid) -> Result<Self, Error> {
        let blank = validate_grid(&board)?;
        validate_grid(&goal)?;
        Ok(Self { board, goal, blank })
    }

    /// A puzzle already equal to its goal.
    pub fn solved(goal: Grid) -> Result<Self, Error> {
        Self::new(goal, goal)
    }

    /// A uniformly random permutation of the tiles.
    ///
    /// Half of all permutations cannot reach the goal; no check is made.
    /// Use [`random_solvable`](Self::random_solvable) to exclude them.
    pub fn random<R: Rng>(goal: Grid, rng: &mut R) -> Result<Self, Error> {
        validate_grid(&goal)?;
        Ok(Self::shuffled(goal, rng))
    }

    /// A random permutation guaranteed to be able to reach the goal.
    pub fn random_solvable<R: Rng>(goal: Grid, rng: &mut R) -> Result<Self, Error> {
        let mut puzzle = Self::random(goal, rng)?;
        if !puzzle.is_solvable() {
            // Swapping two tiles flips the inversion parity.
            let mut cells: Vec<(usize, usize)> = Vec::with_capacity(2);
            for (r, row) in puzzle.board.iter().enumerate() {
                for (c, &value) in row.iter().enumerate() {
                    if value != 0 && cells.len() < 2 {
                        cells.push((r, c));
                    }
                }
            }
            let (a, b) = (cells[0], cells[1]);
            let tmp = puzzle.board[a.0][a.1];
            puzzle.board[a.0][a.1] = puzzle.board[b.0][b.1];
            puzzle.board[b.0][b.1] = tmp;
        }
        Ok(puzzle)
    }

    fn shuffled<R: Rng>(goal: Grid, rng: &mut R) -> Self {
        let mut values: Vec<u8> = (0..TILES as u8).collect();
        u_numflow::random::shuffle(&mut values, rng);

        let mut board = [[0u8; SIZE]; SIZE];
        let mut blank = (0, 0);
        for (i, &value) in values.iter().enumerate() {
            board[i / SIZE][i % SIZE] = value;
            if value == 0 {
                blank = (i / SIZE, i % SIZE);
            }
        }
        Self { board, goal, blank }
    }

    /// The current grid.
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// The goal grid this instance is scored against.
    pub fn goal(&self) -> &Grid {
        &self.goal
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        self.blank
    }

    /// Directions the blank can legally slide, in enumeration order.
    pub fn possible_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.target(d).is_some())
            .collect()
    }

    /// Slides the blank one step, or `None` when the move leaves the grid.
    pub fn slide(&self, direction: Direction) -> Option<Self> {
        let (r, c) = self.target(direction)?;
        let (br, bc) = self.blank;
        let mut board = self.board;
        board[br][bc] = board[r][c];
        board[r][c] = 0;
        Some(Self {
            board,
            goal: self.goal,
            blank: (r, c),
        })
    }

    fn target(&self, direction: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = direction.offset();
        let r = self.blank.0.checked_add_signed(dr)?;
        let c = self.blank.1.checked_add_signed(dc)?;
        (r < SIZE && c < SIZE).then_some((r, c))
    }

    /// Sum of Manhattan distances of every non-blank tile to its goal cell.
    pub fn manhattan_distance(&self) -> usize {
        let mut goal_pos = [(0usize, 0usize); TILES];
        for (r, row) in self.goal.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                goal_pos[value as usize] = (r, c);
            }
        }

        let mut distance = 0;
        for (r, row) in self.board.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value != 0 {
                    let (gr, gc) = goal_pos[value as usize];
                    distance += r.abs_diff(gr) + c.abs_diff(gc);
                }
            }
        }
        distance
    }

    /// Whether the goal is reachable by slides.
    ///
    /// On an odd-width board a slide never changes the parity of the
    /// inversion count, so board and goal must share it.
    pub fn is_solvable(&self) -> bool {
        inversions(&self.board) % 2 == inversions(&self.goal) % 2
    }
}

impl SearchableState for TilePuzzle {
    fn neighbors(&self) -> Vec<Self> {
        self.possible_moves()
            .into_iter()
            .filter_map(|d| self.slide(d))
            .collect()
    }

    fn evaluate(&self) -> f64 {
        Self::OPTIMUM - self.manhattan_distance() as f64
    }

    fn regenerate<R: Rng>(&self, rng: &mut R) -> Self {
        Self::shuffled(self.goal, rng)
    }
}

impl fmt::Display for TilePuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.board.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

/// Checks that a grid holds 0..=8 exactly once and returns the blank cell.
fn validate_grid(grid: &Grid) -> Result<(usize, usize), Error> {
    let blank = grid
        .iter()
        .enumerate()
        .find_map(|(r, row)| row.iter().position(|&v| v == 0).map(|c| (r, c)))
        .ok_or(Error::MissingBlank)?;

    let mut seen = [false; TILES];
    for &value in grid.iter().flatten() {
        let slot = seen
            .get_mut(value as usize)
            .ok_or(Error::TileOutOfRange { value })?;
        if *slot {
            return Err(Error::DuplicateTile { value });
        }
        *slot = true;
    }
    Ok(blank)
}

fn inversions(grid: &Grid) -> usize {
    let tiles: Vec<u8> = grid.iter().flatten().copied().filter(|&v| v != 0).collect();
    let mut count = 0;
    for i in 0..tiles.len() {
        for j in (i + 1)..tiles.len() {
            if tiles[i] > tiles[j] {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_numflow::random::create_rng;

    fn puzzle(board: Grid) -> TilePuzzle {
        TilePuzzle::new(board, CANONICAL_GOAL).unwrap()
    }

    #[test]
    fn test_solved_puzzle_is_goal() {
        let p = TilePuzzle::solved(CANONICAL_GOAL).unwrap();
        assert_eq!(p.evaluate(), 100.0);
        assert!(p.is_goal());
        assert_eq!(p.blank(), (0, 0));
    }

    #[test]
    fn test_missing_blank_rejected() {
        let err = TilePuzzle::new([[1, 2, 3], [4, 5, 6], [7, 8, 1]], CANONICAL_GOAL).unwrap_err();
        assert_eq!(err, Error::MissingBlank);
    }

    #[test]
    fn test_duplicate_and_range_rejected() {
        let dup = TilePuzzle::new([[0, 2, 2], [3, 4, 5], [6, 7, 8]], CANONICAL_GOAL);
        assert_eq!(dup.unwrap_err(), Error::DuplicateTile { value: 2 });

        let range = TilePuzzle::new([[0, 1, 2], [3, 4, 5], [6, 7, 9]], CANONICAL_GOAL);
        assert_eq!(range.unwrap_err(), Error::TileOutOfRange { value: 9 });

        let bad_goal = TilePuzzle::new(CANONICAL_GOAL, [[1, 1, 2], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(bad_goal.unwrap_err(), Error::MissingBlank);
    }

    #[test]
    fn test_corner_blank_has_two_moves() {
        let p = puzzle(CANONICAL_GOAL);
        assert_eq!(p.possible_moves(), vec![Direction::Down, Direction::Right]);
        assert!(p.slide(Direction::Up).is_none());
        assert!(p.slide(Direction::Left).is_none());
    }

    #[test]
    fn test_center_blank_has_four_moves() {
        let p = puzzle([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        assert_eq!(p.possible_moves().len(), 4);
        assert_eq!(p.neighbors().len(), 4);
    }

    #[test]
    fn test_slide_swaps_blank() {
        let p = puzzle(CANONICAL_GOAL);
        let moved = p.slide(Direction::Right).unwrap();
        assert_eq!(moved.board(), &[[1, 0, 2], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(moved.blank(), (0, 1));
        // Parent untouched.
        assert_eq!(p.board(), &CANONICAL_GOAL);
        assert_eq!(moved.evaluate(), 99.0);
    }

    #[test]
    fn test_manhattan_distance() {
        // 8 and 0 swapped across the grid: tile 8 is 4 away from its cell.
        let p = puzzle([[8, 1, 2], [3, 4, 5], [6, 7, 0]]);
        assert_eq!(p.manhattan_distance(), 4);
        assert_eq!(p.evaluate(), 96.0);
    }

    #[test]
    fn test_goal_is_per_instance() {
        let goal = [[1, 2, 3], [4, 5, 6], [7, 8, 0]];
        let p = TilePuzzle::new(CANONICAL_GOAL, goal).unwrap();
        assert!(!p.is_goal());
        for n in p.neighbors() {
            assert_eq!(n.goal(), &goal);
        }
        let mut rng = create_rng(7);
        assert_eq!(p.regenerate(&mut rng).goal(), &goal);
    }

    #[test]
    fn test_solvability_parity() {
        assert!(puzzle(CANONICAL_GOAL).is_solvable());
        // Swapping two tiles makes the goal unreachable.
        assert!(!puzzle([[0, 2, 1], [3, 4, 5], [6, 7, 8]]).is_solvable());
        // Slides preserve solvability.
        let p = puzzle(CANONICAL_GOAL).slide(Direction::Down).unwrap();
        assert!(p.is_solvable());
    }

    #[test]
    fn test_random_solvable() {
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let p = TilePuzzle::random_solvable(CANONICAL_GOAL, &mut rng).unwrap();
            assert!(p.is_solvable());
        }
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = create_rng(3);
        for _ in 0..20 {
            let p = TilePuzzle::random(CANONICAL_GOAL, &mut rng).unwrap();
            assert!(TilePuzzle::new(*p.board(), CANONICAL_GOAL).is_ok());
            let (r, c) = p.blank();
            assert_eq!(p.board()[r][c], 0);
        }
    }

    #[test]
    fn test_display() {
        let p = puzzle(CANONICAL_GOAL);
        assert_eq!(p.to_string(), "0 1 2\n3 4 5\n6 7 8");
    }
}
