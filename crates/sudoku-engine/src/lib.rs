//! Sudoku engine: puzzle-string codec, constraint validation, and
//! backtracking search.
//!
//! Puzzles travel as flat 81-character strings over the alphabet `1`-`9`
//! plus `.` for empty cells. [`Grid`] holds the decoded 9x9 matrix and its
//! row/column/region neighborhoods; [`Solver`] validates puzzle strings,
//! checks single placements, and searches for a completed grid.
//!
//! The engine is synchronous and transport-free: every call owns its own
//! grid, nothing is shared between calls, and all failures are returned as
//! values.

pub mod grid;
pub mod solver;

pub use grid::{Grid, Position};
pub use solver::{PuzzleError, Solver};
