//! N-queens enumeration with bitmap occupancy tracking.
//!
//! This crate provides:
//! - [`Mask`] - 64-bit occupancy mask for rows and diagonals
//! - [`Odometer`] - counter over every column-to-row assignment
//! - [`Occupancy`] - row and diagonal bookkeeping for one placement
//! - [`Solver`] - trait implemented by [`ListSolver`] and [`BacktrackSolver`]
//!
//! # Architecture
//!
//! A placement is stored as one row index per column, so two queens can never
//! share a column. The remaining constraints are tracked in three masks: one
//! bit per row, one bit per `/` diagonal and one bit per `\` diagonal. A queen
//! can be placed when none of its three bits is already set.
//!
//! All solvers return the same boards in the same order.
//!
//! # Example
//!
//! ```
//! use queens_engine::{ListSolver, Solver};
//!
//! let solutions = ListSolver::<6>::new().solve();
//! assert_eq!(solutions.len(), 4);
//! println!("{}", solutions[0]);
//! ```

mod mask;
mod occupancy;
mod odometer;
pub mod solver;

pub use mask::Mask;
pub use occupancy::{ne_diagonal_bit, row_bit, se_diagonal_bit, Occupancy};
pub use odometer::Odometer;
pub use queens_core::{Board, QueenBoard, Square};
pub use solver::{BacktrackSolver, EightQueens, ListSolver, Solver};
