//! Row and diagonal occupancy tracking for a partial placement.
//!
//! On an `N`-board there are `N` rows and `2N - 1` diagonals in each
//! direction. Diagonals are numbered so that every index is non-negative:
//!
//! - `/` diagonals share `row + column`, giving bit `row + column`.
//! - `\` diagonals share `row - column`, offset by `N - 1` to give bit
//!   `row + (N - 1) - column`.
//!
//! Bits are set for occupied lines. Some formulations keep the inverse
//! ("0 = occupied") so that a placement only ever clears bits; the two are
//! equivalent and this module sticks with the conventional encoding.

use crate::Mask;

/// Bit for `row` in the row mask.
#[inline]
pub const fn row_bit(row: u8) -> Mask {
    Mask(1u64 << row)
}

/// Bit for the `/` diagonal through `(row, column)`.
///
/// Equal to `1 << (row + column)`.
#[inline]
pub const fn ne_diagonal_bit(row: u8, column: u8) -> Mask {
    Mask((1u64 << row) << column)
}

/// Bit for the `\` diagonal through `(row, column)` on an `N`-board.
///
/// Equal to `1 << (row + (N - 1) - column)`, computed without a subtraction
/// on the coordinates: start from the top bit of the row range and shift.
#[inline]
pub const fn se_diagonal_bit<const N: usize>(row: u8, column: u8) -> Mask {
    Mask(((1u64 << N.saturating_sub(1)) << row) >> column)
}

/// Occupied rows and diagonals of a partial placement.
///
/// All `2N - 1` diagonal indices must fit in a [`Mask`], so `N` is at most 32:
///
/// ```
/// use queens_engine::Occupancy;
///
/// let mut occupancy = Occupancy::<32>::new();
/// assert!(occupancy.try_place(31, 0));
/// ```
///
/// ```compile_fail
/// use queens_engine::Occupancy;
///
/// let occupancy = Occupancy::<33>::new();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Occupancy<const N: usize> {
    rows: Mask,
    ne_diagonals: Mask,
    se_diagonals: Mask,
}

impl<const N: usize> Occupancy<N> {
    const WIDTH_CHECK: () = assert!(
        2 * N <= Mask::BITS as usize + 1,
        "diagonal indices do not fit in the occupancy mask"
    );

    /// Creates an occupancy with no queens placed.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::WIDTH_CHECK;
        Occupancy {
            rows: Mask::EMPTY,
            ne_diagonals: Mask::EMPTY,
            se_diagonals: Mask::EMPTY,
        }
    }

    /// Places a queen at `(row, column)` if no placed queen shares its row
    /// or either diagonal.
    ///
    /// Returns false and leaves the occupancy untouched on conflict. Columns
    /// are not tracked: callers place at most one queen per column.
    #[inline]
    pub fn try_place(&mut self, row: u8, column: u8) -> bool {
        let row_bit = row_bit(row);
        let ne_bit = ne_diagonal_bit(row, column);
        let se_bit = se_diagonal_bit::<N>(row, column);

        // Non-short-circuiting `|`: one combined test instead of three branches.
        if self.rows.intersects(row_bit)
            | self.ne_diagonals.intersects(ne_bit)
            | self.se_diagonals.intersects(se_bit)
        {
            return false;
        }

        self.rows |= row_bit;
        self.ne_diagonals |= ne_bit;
        self.se_diagonals |= se_bit;
        true
    }

    /// Returns true if the whole assignment is non-attacking.
    ///
    /// Columns are checked in increasing order and checking stops at the
    /// first conflict.
    pub fn admits(assignment: &[u8; N]) -> bool {
        let mut occupancy = Self::new();
        assignment
            .iter()
            .enumerate()
            .all(|(column, &row)| occupancy.try_place(row, column as u8))
    }
}
