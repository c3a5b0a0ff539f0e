//! Fixed-size queen boards.

use crate::Square;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest supported board dimension.
///
/// Diagonal indices on an `N`-board run up to `2N - 2`, so 32 is the widest
/// board whose diagonals still fit in a 64-bit occupancy mask.
pub const MAX_BOARD_SIZE: usize = 32;

/// Errors that can occur when addressing or parsing a board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("square ({row}, {column}) is outside a {size}x{size} board")]
    OutOfBounds {
        row: usize,
        column: usize,
        size: usize,
    },

    #[error("invalid board: expected {expected} rows, got {found}")]
    RowCount { expected: usize, found: usize },

    #[error("invalid board: row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell '{found}' at ({row}, {column}): expected 'Q' or '.'")]
    InvalidCell {
        row: usize,
        column: usize,
        found: char,
    },
}

/// Write access to a square grid of queen flags.
///
/// Solvers only need to mark the squares of a found placement, so this is
/// the whole surface they write through.
pub trait QueenBoard {
    /// Returns the board dimension.
    fn size(&self) -> usize;

    /// Marks or clears a queen at the given square.
    ///
    /// # Panics
    /// Panics if `row` or `column` is not below [`size`](Self::size).
    fn set(&mut self, row: usize, column: usize, occupied: bool);

    /// Returns true if a queen occupies the given square.
    ///
    /// # Panics
    /// Panics if `row` or `column` is not below [`size`](Self::size).
    fn get(&self, row: usize, column: usize) -> bool;
}

/// An `N`x`N` board where each cell either holds a queen or is empty.
///
/// Cells are stored row-major: `cells[row][column]`.
///
/// `N` may be at most [`MAX_BOARD_SIZE`]:
///
/// ```
/// use queens_core::Board;
///
/// let board = Board::<32>::new();
/// assert_eq!(board.queen_count(), 0);
/// ```
///
/// Wider boards are rejected when the board type is used:
///
/// ```compile_fail
/// use queens_core::Board;
///
/// let board = Board::<33>::new();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board<const N: usize> {
    cells: [[bool; N]; N],
}

impl<const N: usize> Board<N> {
    const SIZE_CHECK: () = assert!(
        N <= MAX_BOARD_SIZE,
        "board dimension exceeds MAX_BOARD_SIZE"
    );

    /// Creates an empty board.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SIZE_CHECK;
        Board {
            cells: [[false; N]; N],
        }
    }

    /// Builds a board from a column-to-row assignment.
    ///
    /// `assignment[column] = row` places one queen in every column.
    ///
    /// # Panics
    /// Panics if any row is not below `N`.
    pub fn from_assignment(assignment: &[u8; N]) -> Self {
        let mut board = Self::new();
        for (column, &row) in assignment.iter().enumerate() {
            board.set(row as usize, column, true);
        }
        board
    }

    /// Sets a cell, rejecting coordinates outside the board.
    pub fn try_set(&mut self, row: usize, column: usize, occupied: bool) -> Result<(), BoardError> {
        Self::check_bounds(row, column)?;
        self.cells[row][column] = occupied;
        Ok(())
    }

    /// Reads a cell, rejecting coordinates outside the board.
    pub fn try_get(&self, row: usize, column: usize) -> Result<bool, BoardError> {
        Self::check_bounds(row, column)?;
        Ok(self.cells[row][column])
    }

    fn check_bounds(row: usize, column: usize) -> Result<(), BoardError> {
        if row < N && column < N {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                row,
                column,
                size: N,
            })
        }
    }

    /// Iterates occupied squares, column by column, top row first.
    pub fn queens(&self) -> impl Iterator<Item = Square> + '_ {
        (0..N).flat_map(move |column| {
            (0..N)
                .filter(move |&row| self.cells[row][column])
                .map(move |row| Square::new(row as u8, column as u8))
        })
    }

    /// Returns the number of queens on the board.
    pub fn queen_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell).count()
    }

    /// Returns the row of the queen in `column`.
    ///
    /// Returns None if the column is empty, holds more than one queen, or is
    /// outside the board.
    pub fn queen_in_column(&self, column: usize) -> Option<u8> {
        if column >= N {
            return None;
        }
        let mut rows = (0..N).filter(|&row| self.cells[row][column]);
        match (rows.next(), rows.next()) {
            (Some(row), None) => Some(row as u8),
            _ => None,
        }
    }

    /// Returns true if the board holds a complete non-attacking placement:
    /// exactly one queen per column and no two queens sharing a row or a
    /// diagonal.
    pub fn is_solution(&self) -> bool {
        if (0..N).any(|column| self.queen_in_column(column).is_none()) {
            return false;
        }
        let queens: Vec<Square> = self.queens().collect();
        queens
            .iter()
            .enumerate()
            .all(|(i, a)| queens[i + 1..].iter().all(|b| !a.attacks(*b)))
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> QueenBoard for Board<N> {
    #[inline]
    fn size(&self) -> usize {
        N
    }

    #[inline]
    fn set(&mut self, row: usize, column: usize, occupied: bool) {
        self.cells[row][column] = occupied;
    }

    #[inline]
    fn get(&self, row: usize, column: usize) -> bool {
        self.cells[row][column]
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (column, &cell) in row.iter().enumerate() {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if cell { 'Q' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<const N: usize> FromStr for Board<N> {
    type Err = BoardError;

    /// Parses the [`Display`](fmt::Display) format.
    ///
    /// Blank lines and whitespace between cells are ignored. `Q` or `q`
    /// marks a queen, `.` an empty cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if rows.len() != N {
            return Err(BoardError::RowCount {
                expected: N,
                found: rows.len(),
            });
        }

        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != N {
                return Err(BoardError::RowWidth {
                    row,
                    expected: N,
                    found: cells.len(),
                });
            }
            for (column, &c) in cells.iter().enumerate() {
                board.cells[row][column] = match c {
                    'Q' | 'q' => true,
                    '.' => false,
                    found => {
                        return Err(BoardError::InvalidCell { row, column, found });
                    }
                };
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUR: &str = "\
. Q . .
. . . Q
Q . . .
. . Q .
";

    #[test]
    fn board_starts_empty() {
        let board = Board::<8>::new();
        assert_eq!(board.queen_count(), 0);
        assert_eq!(board.size(), 8);
        assert!(!board.get(3, 4));
        assert_eq!(board, Board::default());
    }

    #[test]
    fn board_set_and_get() {
        let mut board = Board::<8>::new();
        board.set(2, 5, true);
        assert!(board.get(2, 5));
        assert!(!board.get(5, 2));
        board.set(2, 5, false);
        assert!(!board.get(2, 5));
    }

    #[test]
    fn board_try_set_out_of_bounds() {
        let mut board = Board::<4>::new();
        assert_eq!(
            board.try_set(4, 0, true),
            Err(BoardError::OutOfBounds {
                row: 4,
                column: 0,
                size: 4
            })
        );
        assert!(board.try_get(0, 4).is_err());
        assert_eq!(board.try_set(3, 3, true), Ok(()));
        assert_eq!(board.try_get(3, 3), Ok(true));
    }

    #[test]
    #[should_panic]
    fn board_set_out_of_bounds_panics() {
        let mut board = Board::<4>::new();
        board.set(0, 4, true);
    }

    #[test]
    fn board_from_assignment() {
        let board = Board::<4>::from_assignment(&[2, 0, 3, 1]);
        assert_eq!(board.queen_count(), 4);
        assert_eq!(board.queen_in_column(0), Some(2));
        assert_eq!(board.queen_in_column(3), Some(1));
        assert_eq!(board.queen_in_column(4), None);
        let squares: Vec<Square> = board.queens().collect();
        assert_eq!(
            squares,
            vec![
                Square::new(2, 0),
                Square::new(0, 1),
                Square::new(3, 2),
                Square::new(1, 3)
            ]
        );
    }

    #[test]
    fn board_is_solution() {
        assert!(Board::<4>::from_assignment(&[2, 0, 3, 1]).is_solution());
        assert!(!Board::<4>::from_assignment(&[0, 1, 2, 3]).is_solution());
        assert!(!Board::<4>::from_assignment(&[1, 1, 3, 0]).is_solution());
        assert!(!Board::<4>::new().is_solution());
        assert!(Board::<1>::from_assignment(&[0]).is_solution());
        assert!(Board::<0>::new().is_solution());
    }

    #[test]
    fn board_column_with_two_queens_is_not_solution() {
        let mut board = Board::<4>::from_assignment(&[2, 0, 3, 1]);
        board.set(0, 0, true);
        assert_eq!(board.queen_in_column(0), None);
        assert!(!board.is_solution());
    }

    #[test]
    fn board_display() {
        let board = Board::<4>::from_assignment(&[2, 0, 3, 1]);
        assert_eq!(board.to_string(), FOUR);
        assert_eq!(Board::<0>::new().to_string(), "");
    }

    #[test]
    fn board_parse() {
        let board: Board<4> = FOUR.parse().unwrap();
        assert_eq!(board, Board::from_assignment(&[2, 0, 3, 1]));

        let compact: Board<4> = ".q..\n...Q\n\nQ...\n..Q.\n".parse().unwrap();
        assert_eq!(compact, board);
    }

    #[test]
    fn board_parse_errors() {
        assert_eq!(
            "Q . . .\n. . Q .".parse::<Board<4>>(),
            Err(BoardError::RowCount {
                expected: 4,
                found: 2
            })
        );
        assert_eq!(
            "Q..\n....\n....\n....".parse::<Board<4>>(),
            Err(BoardError::RowWidth {
                row: 0,
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            "....\n..x.\n....\n....".parse::<Board<4>>(),
            Err(BoardError::InvalidCell {
                row: 1,
                column: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn board_error_messages() {
        let err = BoardError::OutOfBounds {
            row: 9,
            column: 1,
            size: 8,
        };
        assert_eq!(err.to_string(), "square (9, 1) is outside a 8x8 board");
    }
}
