//! Board square representation.

use std::fmt;

/// A square on the board, addressed by row and column.
///
/// Both coordinates are zero-based. Row 0 is the top line of the rendered
/// board and column 0 its leftmost file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    column: u8,
}

impl Square {
    /// Creates a square from row and column.
    #[inline]
    pub const fn new(row: u8, column: u8) -> Self {
        Square { row, column }
    }

    /// Returns the row (0-based).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-based).
    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Returns true if a queen on `self` attacks `other`.
    ///
    /// A square never attacks itself.
    pub const fn attacks(self, other: Square) -> bool {
        if self.row == other.row && self.column == other.column {
            return false;
        }
        self.row == other.row
            || self.column == other.column
            || self.row.abs_diff(other.row) == self.column.abs_diff(other.column)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row, self.column)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
