//! Core types for the N-queens puzzle.
//!
//! This crate provides the types shared by the solvers:
//! - [`Square`] for board coordinates and the queen attack relation
//! - [`Board`] for fixed-size boards, with text rendering and parsing
//! - [`QueenBoard`], the capability solvers write their placements through

mod board;
mod square;

pub use board::{Board, BoardError, QueenBoard, MAX_BOARD_SIZE};
pub use square::Square;
