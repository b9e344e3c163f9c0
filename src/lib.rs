//! Optimal solver for the n-by-n sliding block puzzle.
//!
//! A [`Solver`] runs A* with the Manhattan heuristic on the given [`Board`]
//! and, in lockstep, on its [`Board::twin`]. Only one of the two can ever be
//! solved, so the race settles solvability without a parity check.

mod board;
mod error;
mod min_pq;
mod solver;

pub use board::{Board, Move};
pub use error::{BoardError, SolveError};
pub use min_pq::MinPq;
pub use solver::{Solver, SolverConfig};
