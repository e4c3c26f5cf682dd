//! Validation, placement checking, and depth-first backtracking search.
//!
//! Two peer-exclusion protocols live here: full-puzzle self-consistency
//! blanks the target cell before checking its value against the remaining
//! peers (`given_conflicts`), while single-placement checks drop the
//! target slot from one line's peer list by coordinate (`line_admits`).
//! The two differ at self-referential coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Grid, Position};

/// Why a puzzle string failed validation or solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleError {
    /// The puzzle string was absent or empty.
    MissingField,
    /// The puzzle string was not exactly 81 characters.
    WrongLength,
    /// The puzzle string contained a character outside `1`-`9` and `.`.
    InvalidCharacter,
    /// The givens contradict each other, or the search exhausted every
    /// candidate without completing the grid.
    Unsolvable,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::MissingField => write!(f, "Required field missing"),
            PuzzleError::WrongLength => write!(f, "Expected puzzle to be 81 characters long"),
            PuzzleError::InvalidCharacter => write!(f, "Invalid characters in puzzle"),
            PuzzleError::Unsolvable => write!(f, "Puzzle cannot be solved"),
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Stateless validation and solving engine; every call clones or decodes
/// its own working grid, so nothing is shared between calls.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Check a puzzle string for structural well-formedness and
    /// self-consistency of its givens.
    ///
    /// Field presence and length fail fast; after that every cell is
    /// scanned once in row-major order, checking character validity and
    /// then peer-consistency, and the first failure wins.
    pub fn validate(&self, puzzle: &str) -> Result<(), PuzzleError> {
        if puzzle.is_empty() {
            return Err(PuzzleError::MissingField);
        }
        if puzzle.chars().count() != 81 {
            return Err(PuzzleError::WrongLength);
        }
        let mut grid = Grid::from_string(puzzle);
        for (i, ch) in puzzle.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            if !('1'..='9').contains(&ch) {
                return Err(PuzzleError::InvalidCharacter);
            }
            let pos = Position::new(i / 9, i % 9);
            if given_conflicts(&mut grid, pos, ch as u8 - b'0') {
                return Err(PuzzleError::Unsolvable);
            }
        }
        Ok(())
    }

    /// Whether `value` is consistent with the other 8 cells in the row of
    /// the given coordinate, independent of what the cell itself holds.
    ///
    /// Row letters `A`-`I` are accepted in either case; columns are 1-9.
    /// A coordinate outside those ranges never validates.
    pub fn check_row_placement(&self, puzzle: &str, row: char, column: u8, value: u8) -> bool {
        let Some(pos) = Position::from_row_letter(row, column) else {
            return false;
        };
        let grid = Grid::from_string(puzzle);
        line_admits(&grid.row_values(pos), pos.col, value)
    }

    /// Whether `value` is consistent with the other 8 cells in the column
    /// of the given coordinate.
    pub fn check_col_placement(&self, puzzle: &str, row: char, column: u8, value: u8) -> bool {
        let Some(pos) = Position::from_row_letter(row, column) else {
            return false;
        };
        let grid = Grid::from_string(puzzle);
        line_admits(&grid.col_values(pos), pos.row, value)
    }

    /// Whether `value` is consistent with the other 8 cells in the 3x3
    /// region of the given coordinate.
    pub fn check_region_placement(&self, puzzle: &str, row: char, column: u8, value: u8) -> bool {
        let Some(pos) = Position::from_row_letter(row, column) else {
            return false;
        };
        let grid = Grid::from_string(puzzle);
        line_admits(
            &grid.region_values(pos),
            (pos.row % 3) * 3 + pos.col % 3,
            value,
        )
    }

    /// Solve the puzzle, returning the completed grid if one exists.
    ///
    /// Cells are filled row-major and candidates tried in ascending order,
    /// so the result and the exploration order are deterministic. A grid
    /// with no empty cells comes back unchanged without any search.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        if solve_recursive(&mut working) {
            Some(working)
        } else {
            None
        }
    }
}

/// Whether `value` already appears in the row, column, or region of the
/// position. The target cell's own content counts; callers testing a
/// filled cell against its peers go through `given_conflicts` instead.
fn conflicts(grid: &Grid, pos: Position, value: u8) -> bool {
    let value = Some(value);
    grid.row_values(pos).contains(&value)
        || grid.col_values(pos).contains(&value)
        || grid.region_values(pos).contains(&value)
}

/// Clear-then-check: blank the cell, test its value against the remaining
/// peers, then restore it. A given must never conflict with itself.
fn given_conflicts(grid: &mut Grid, pos: Position, value: u8) -> bool {
    grid.set(pos, None);
    let hit = conflicts(grid, pos, value);
    grid.set(pos, Some(value));
    hit
}

/// Whether a line of 9 peers admits `value` once the slot at `skip` is
/// excluded. Exclusion is by coordinate, not by value: whatever occupies
/// the target slot has no say.
fn line_admits(line: &[Option<u8>; 9], skip: usize, value: u8) -> bool {
    line.iter()
        .enumerate()
        .filter(|&(slot, _)| slot != skip)
        .all(|(_, &cell)| cell != Some(value))
}

/// First empty cell in row-major order, if any.
fn find_empty_cell(grid: &Grid) -> Option<Position> {
    for row in 0..9 {
        for col in 0..9 {
            let pos = Position::new(row, col);
            if grid.get(pos).is_none() {
                return Some(pos);
            }
        }
    }
    None
}

/// Depth-first search over the empty cells, mutating the grid in place and
/// undoing each placement on backtrack.
fn solve_recursive(grid: &mut Grid) -> bool {
    let Some(pos) = find_empty_cell(grid) else {
        // No empty cell left: the grid is complete.
        return true;
    };

    for value in 1..=9 {
        if conflicts(grid, pos, value) {
            continue;
        }
        grid.set(pos, Some(value));
        if solve_recursive(grid) {
            return true;
        }
        grid.set(pos, None);
    }

    false
}
