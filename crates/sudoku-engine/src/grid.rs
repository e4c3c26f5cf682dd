//! Grid representation: the 9x9 cell matrix, the flat-string codec, and
//! the row/column/region neighborhoods used by constraint checks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A zero-based cell coordinate, both components in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position from zero-based row and column indices.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Translate the external letter-row scheme into a zero-based position.
    ///
    /// Rows `A`-`I` (either case) map to 0-8 and columns `1`-`9` map to
    /// 0-8. This is the only place the letter scheme exists; everything
    /// behind it is numeric.
    pub fn from_row_letter(row: char, column: u8) -> Option<Self> {
        let row_idx = match row.to_ascii_lowercase() {
            ch @ 'a'..='i' => (ch as u8 - b'a') as usize,
            _ => return None,
        };
        if !(1..=9).contains(&column) {
            return None;
        }
        Some(Self::new(row_idx, usize::from(column) - 1))
    }
}

/// A 9x9 Sudoku grid. Each cell holds a digit 1-9 or `None` for empty.
///
/// Serializes as its compact string form, the same 81-character
/// representation puzzles arrive in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct Grid {
    cells: [[Option<u8>; 9]; 9],
}

impl Grid {
    /// Decode a flat puzzle string. Character at index `i` lands in cell
    /// `(i / 9, i % 9)`.
    ///
    /// Decoding is mechanical and never fails: at most 81 characters are
    /// consumed, anything outside `1`-`9` decodes as empty, and short
    /// input leaves the trailing cells empty. Callers that need
    /// well-formedness guarantees run [`Solver::validate`] first.
    ///
    /// [`Solver::validate`]: crate::Solver::validate
    pub fn from_string(puzzle: &str) -> Self {
        let mut cells = [[None; 9]; 9];
        for (i, ch) in puzzle.chars().take(81).enumerate() {
            if let '1'..='9' = ch {
                cells[i / 9][i % 9] = Some(ch as u8 - b'0');
            }
        }
        Self { cells }
    }

    /// Encode the grid as its flat 81-character form, `.` for empty.
    pub fn to_string_compact(&self) -> String {
        let mut out = String::with_capacity(81);
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(value) => out.push((b'0' + value) as char),
                    None => out.push('.'),
                }
            }
        }
        out
    }

    /// Get the value at a position.
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.cells[pos.row][pos.col]
    }

    /// Set or clear the value at a position.
    pub fn set(&mut self, pos: Position, value: Option<u8>) {
        self.cells[pos.row][pos.col] = value;
    }

    /// Whether every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_some())
    }

    /// The 9 values in the position's row, including the cell itself.
    pub fn row_values(&self, pos: Position) -> [Option<u8>; 9] {
        self.cells[pos.row]
    }

    /// The 9 values in the position's column, including the cell itself.
    pub fn col_values(&self, pos: Position) -> [Option<u8>; 9] {
        std::array::from_fn(|row| self.cells[row][pos.col])
    }

    /// The 9 values in the position's 3x3 region, row-major from the
    /// region origin (the coordinate rounded down to a multiple of 3).
    pub fn region_values(&self, pos: Position) -> [Option<u8>; 9] {
        let origin_row = pos.row - pos.row % 3;
        let origin_col = pos.col - pos.col % 3;
        std::array::from_fn(|i| self.cells[origin_row + i / 3][origin_col + i % 3])
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> Self {
        grid.to_string_compact()
    }
}

impl From<String> for Grid {
    fn from(puzzle: String) -> Self {
        Grid::from_string(&puzzle)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 && row % 3 == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, "{}", if col % 3 == 0 { " | " } else { " " })?;
                }
                match cell {
                    Some(value) => write!(f, "{}", value)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
    const SOLUTION: &str =
        "135762984946381257728459613694517832812936745357824196473298561581673429269145378";

    #[test]
    fn test_round_trip() {
        assert_eq!(Grid::from_string(PUZZLE).to_string_compact(), PUZZLE);
        assert_eq!(Grid::from_string(SOLUTION).to_string_compact(), SOLUTION);
    }

    #[test]
    fn test_decode_flat_index_mapping() {
        let grid = Grid::from_string(PUZZLE);
        assert_eq!(grid.get(Position::new(0, 0)), Some(1));
        assert_eq!(grid.get(Position::new(0, 1)), None);
        assert_eq!(grid.get(Position::new(0, 2)), Some(5));
        assert_eq!(grid.get(Position::new(1, 3)), Some(3));
        assert_eq!(grid.get(Position::new(8, 4)), Some(4));
        assert_eq!(grid.get(Position::new(8, 8)), None);
    }

    #[test]
    fn test_decode_ignores_extra_characters() {
        let padded = format!("{}999", PUZZLE);
        assert_eq!(Grid::from_string(&padded), Grid::from_string(PUZZLE));
    }

    #[test]
    fn test_decode_short_input_leaves_tail_empty() {
        let grid = Grid::from_string("123");
        assert_eq!(grid.get(Position::new(0, 0)), Some(1));
        assert_eq!(grid.get(Position::new(0, 2)), Some(3));
        assert_eq!(grid.get(Position::new(0, 3)), None);
        assert_eq!(grid.get(Position::new(8, 8)), None);
    }

    #[test]
    fn test_row_values() {
        let grid = Grid::from_string(SOLUTION);
        let row = grid.row_values(Position::new(0, 4));
        assert_eq!(row.map(Option::unwrap), [1, 3, 5, 7, 6, 2, 9, 8, 4]);
    }

    #[test]
    fn test_col_values() {
        let grid = Grid::from_string(SOLUTION);
        let col = grid.col_values(Position::new(4, 0));
        assert_eq!(col.map(Option::unwrap), [1, 9, 7, 6, 8, 3, 4, 5, 2]);
    }

    #[test]
    fn test_region_values_row_major_from_origin() {
        let grid = Grid::from_string(SOLUTION);
        // Top-left region, queried from a non-origin cell.
        let region = grid.region_values(Position::new(1, 2));
        assert_eq!(region.map(Option::unwrap), [1, 3, 5, 9, 4, 6, 7, 2, 8]);
        // Center region.
        let region = grid.region_values(Position::new(4, 4));
        assert_eq!(region.map(Option::unwrap), [5, 1, 7, 9, 3, 6, 8, 2, 4]);
    }

    #[test]
    fn test_neighborhoods_do_not_mutate() {
        let grid = Grid::from_string(PUZZLE);
        let before = grid.clone();
        grid.row_values(Position::new(4, 4));
        grid.col_values(Position::new(4, 4));
        grid.region_values(Position::new(4, 4));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_from_row_letter() {
        assert_eq!(Position::from_row_letter('a', 1), Some(Position::new(0, 0)));
        assert_eq!(Position::from_row_letter('A', 1), Some(Position::new(0, 0)));
        assert_eq!(Position::from_row_letter('e', 5), Some(Position::new(4, 4)));
        assert_eq!(Position::from_row_letter('I', 9), Some(Position::new(8, 8)));
    }

    #[test]
    fn test_from_row_letter_rejects_out_of_range() {
        assert_eq!(Position::from_row_letter('j', 1), None);
        assert_eq!(Position::from_row_letter('1', 1), None);
        assert_eq!(Position::from_row_letter('a', 0), None);
        assert_eq!(Position::from_row_letter('a', 10), None);
    }

    #[test]
    fn test_display_borders() {
        let rendered = Grid::from_string(PUZZLE).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "1 . 5 | . . 2 | . 8 4");
        assert_eq!(lines[3], "------+-------+------");
    }

    #[test]
    fn test_serde_uses_compact_string_form() {
        let grid = Grid::from_string(PUZZLE);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, format!("\"{}\"", PUZZLE));
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
