//! Exhaustive enumeration over every column-to-row assignment.

use super::Solver;
use crate::{Occupancy, Odometer};
use queens_core::Board;

/// Enumerates all `N^N` assignments and keeps the non-attacking ones.
///
/// Each candidate is checked from scratch with a fresh [`Occupancy`],
/// column 0 first, stopping at the first conflict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSolver<const N: usize>;

impl<const N: usize> ListSolver<N> {
    /// Creates the solver.
    pub const fn new() -> Self {
        ListSolver
    }
}

impl<const N: usize> Solver<N> for ListSolver<N> {
    fn name(&self) -> &'static str {
        "list"
    }

    fn solve(&self) -> Vec<Board<N>> {
        let mut odometer = Odometer::<N>::new();
        let mut solutions = Vec::new();
        let mut candidates = 0u64;

        loop {
            candidates += 1;
            if Occupancy::<N>::admits(odometer.digits()) {
                solutions.push(Board::from_assignment(odometer.digits()));
            }
            if !odometer.advance() {
                break;
            }
        }

        tracing::debug!(
            solver = self.name(),
            board_size = N,
            candidates,
            solutions = solutions.len(),
            "enumeration finished"
        );
        solutions
    }
}
