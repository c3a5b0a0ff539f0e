//! Solver abstraction for N-queens enumeration.
//!
//! This module provides the [`Solver`] trait, implemented by each search
//! strategy. Every strategy returns the complete solution set in the same
//! canonical order: the order in which an odometer over column-to-row
//! assignments, column 0 least significant, reaches each solution.

mod backtrack;
mod list;

pub use backtrack::BacktrackSolver;
pub use list::ListSolver;

use queens_core::Board;

/// The reference 8-queens solver.
pub type EightQueens = ListSolver<8>;

/// Trait for N-queens search strategies.
///
/// # Example
///
/// ```
/// use queens_engine::{EightQueens, Solver};
///
/// let solutions = EightQueens::new().solve();
/// assert_eq!(solutions.len(), 92);
/// ```
pub trait Solver<const N: usize> {
    /// Returns a short identifier for this strategy.
    fn name(&self) -> &'static str;

    /// Returns every non-attacking placement of `N` queens.
    ///
    /// An empty result means no placement exists for this `N`.
    fn solve(&self) -> Vec<Board<N>>;

    /// Returns the number of placements [`solve`](Self::solve) would return.
    fn count(&self) -> usize {
        self.solve().len()
    }
}
