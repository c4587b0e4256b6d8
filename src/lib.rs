//! Nonogram (picross) solver library.
//!
//! Given per-row and per-column filled-block lengths, finds a grid of
//! filled and empty cells satisfying every constraint: each line's possible
//! fillings are enumerated as bitmask candidate sets, shrunk by fixpoint
//! constraint propagation across the two axes, and searched row by row with
//! backtracking.

pub mod grid;
pub mod line;
pub mod parser;
pub mod puzzle;
pub mod solver;

pub use grid::Grid;
pub use puzzle::{Puzzle, PuzzleError};
pub use solver::solve;
