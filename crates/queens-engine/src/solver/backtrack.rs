//! Depth-first search with pruning on partial placements.

use super::Solver;
use crate::Occupancy;
use queens_core::Board;

/// Places queens column by column and abandons a branch at the first
/// conflict.
///
/// The search fixes the last column first and tries rows in ascending
/// order, so complete placements are reached in the same order as
/// [`ListSolver`](super::ListSolver) reaches them, while whole subtrees of
/// conflicting prefixes are never generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktrackSolver<const N: usize>;

impl<const N: usize> BacktrackSolver<N> {
    /// Creates the solver.
    pub const fn new() -> Self {
        BacktrackSolver
    }

    /// Runs the search, calling `on_solution` for each complete placement.
    ///
    /// Returns the number of partial placements tried.
    fn search<F>(&self, on_solution: &mut F) -> u64
    where
        F: FnMut(&[u8; N]),
    {
        let mut assignment = [0u8; N];
        Self::descend(N, Occupancy::new(), &mut assignment, on_solution)
    }

    /// Fills columns `0..remaining` under `occupancy`, highest column first.
    fn descend<F>(
        remaining: usize,
        occupancy: Occupancy<N>,
        assignment: &mut [u8; N],
        on_solution: &mut F,
    ) -> u64
    where
        F: FnMut(&[u8; N]),
    {
        if remaining == 0 {
            on_solution(assignment);
            return 0;
        }

        let column = remaining - 1;
        let mut nodes = 0u64;
        for row in 0..N as u8 {
            nodes += 1;
            let mut next = occupancy;
            if next.try_place(row, column as u8) {
                assignment[column] = row;
                nodes += Self::descend(column, next, assignment, on_solution);
            }
        }
        nodes
    }
}

impl<const N: usize> Solver<N> for BacktrackSolver<N> {
    fn name(&self) -> &'static str {
        "backtrack"
    }

    fn solve(&self) -> Vec<Board<N>> {
        let mut solutions = Vec::new();
        let nodes = self.search(&mut |assignment| {
            solutions.push(Board::from_assignment(assignment));
        });

        tracing::debug!(
            solver = self.name(),
            board_size = N,
            nodes,
            solutions = solutions.len(),
            "search finished"
        );
        solutions
    }

    fn count(&self) -> usize {
        let mut count = 0usize;
        self.search(&mut |_| count += 1);
        count
    }
}
