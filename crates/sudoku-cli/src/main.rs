//! Command-line front end for the Sudoku engine.
//!
//! Each subcommand prints a single JSON object on stdout: a solution, a
//! validity verdict, or an error message. Input screening (puzzle shape,
//! coordinate, candidate value) happens here so the engine only ever sees
//! well-formed placement queries.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use sudoku_engine::{Grid, PuzzleError, Solver};

/// Validate, solve, and placement-check 9x9 Sudoku puzzles given as flat
/// 81-character strings (`1`-`9` for givens, `.` for empty cells).
#[derive(Parser)]
#[command(name = "sudoku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle and print `{"solution": "..."}`.
    Solve {
        /// Flat 81-character puzzle string.
        puzzle: String,
        /// Print the solved grid with region borders instead of JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// Validate a puzzle string and print `{"valid": true}` on success.
    Validate {
        /// Flat 81-character puzzle string.
        puzzle: String,
    },
    /// Check a single placement, e.g. `check <PUZZLE> A1 7`.
    Check {
        /// Flat 81-character puzzle string.
        puzzle: String,
        /// Two-character coordinate: row letter `A`-`I` plus column `1`-`9`.
        coordinate: String,
        /// Candidate digit `1`-`9`.
        value: String,
    },
}

/// JSON body for `validate` and `check` verdicts. `conflict` only appears
/// on a failed check.
#[derive(Serialize)]
struct Verdict {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    conflict: Option<Vec<&'static str>>,
}

/// JSON body for every error outcome.
#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { puzzle, pretty } => run_solve(&puzzle, pretty),
        Command::Validate { puzzle } => run_validate(&puzzle),
        Command::Check {
            puzzle,
            coordinate,
            value,
        } => run_check(&puzzle, &coordinate, &value),
    }
}

/// Validates, solves, and prints the solution.
fn run_solve(puzzle: &str, pretty: bool) -> ExitCode {
    let solver = Solver::new();
    if let Err(e) = solver.validate(puzzle) {
        return fail(&e.to_string());
    }

    match solver.solve(&Grid::from_string(puzzle)) {
        Some(solution) => {
            if pretty {
                print!("{}", solution);
            } else {
                emit(&serde_json::json!({ "solution": solution.to_string_compact() }));
            }
            ExitCode::SUCCESS
        }
        None => fail(&PuzzleError::Unsolvable.to_string()),
    }
}

/// Runs the validator and prints the verdict.
fn run_validate(puzzle: &str) -> ExitCode {
    match Solver::new().validate(puzzle) {
        Ok(()) => {
            emit(&Verdict {
                valid: true,
                conflict: None,
            });
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e.to_string()),
    }
}

/// Screens the check inputs (puzzle shape, then coordinate, then value),
/// runs the three placement checks, and prints the verdict.
fn run_check(puzzle: &str, coordinate: &str, value: &str) -> ExitCode {
    if puzzle.chars().count() != 81 {
        return fail(&PuzzleError::WrongLength.to_string());
    }
    if !puzzle
        .chars()
        .all(|ch| ch == '.' || ('1'..='9').contains(&ch))
    {
        return fail(&PuzzleError::InvalidCharacter.to_string());
    }
    let Some((row, column)) = parse_coordinate(coordinate) else {
        return fail("Invalid coordinate");
    };
    let Some(value) = parse_value(value) else {
        return fail("Invalid value");
    };

    let solver = Solver::new();
    let row_ok = solver.check_row_placement(puzzle, row, column, value);
    let col_ok = solver.check_col_placement(puzzle, row, column, value);
    let region_ok = solver.check_region_placement(puzzle, row, column, value);

    let verdict = if row_ok && col_ok && region_ok {
        Verdict {
            valid: true,
            conflict: None,
        }
    } else {
        let mut conflict = Vec::new();
        if !row_ok {
            conflict.push("row");
        }
        if !col_ok {
            conflict.push("column");
        }
        if !region_ok {
            conflict.push("region");
        }
        Verdict {
            valid: false,
            conflict: Some(conflict),
        }
    };

    emit(&verdict);
    ExitCode::SUCCESS
}

/// Parse a coordinate such as `A1`: exactly two characters, a row letter
/// `A`-`I` in either case and a column digit `1`-`9`.
fn parse_coordinate(coordinate: &str) -> Option<(char, u8)> {
    let mut chars = coordinate.chars();
    let row = chars.next()?;
    let column = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if !('a'..='i').contains(&row.to_ascii_lowercase()) {
        return None;
    }
    let column = column.to_digit(10)?;
    if !(1..=9).contains(&column) {
        return None;
    }
    Some((row, column as u8))
}

/// Parse a candidate value: a number 1-9.
fn parse_value(value: &str) -> Option<u8> {
    let digit: u8 = value.parse().ok()?;
    (1..=9).contains(&digit).then_some(digit)
}

fn emit(body: &impl Serialize) {
    println!("{}", serde_json::to_string(body).unwrap_or_default());
}

fn fail(message: &str) -> ExitCode {
    emit(&ErrorBody { error: message });
    ExitCode::FAILURE
}
