//! Parser for the `.non` puzzle description format.
//!
//! A `.non` file is line oriented:
//!
//! ```text
//! title "Lighthouse"
//! width 5
//! height 5
//!
//! columns
//! 1
//! 3
//! 5
//! 3
//! 1
//!
//! rows
//! 1
//! 3
//! 5
//! 3
//! 1
//! ```
//!
//! Constraint lines are comma-separated block lengths, one per column (left
//! to right) then one per row (top to bottom). A literal `0` marks a line
//! with no filled cells. Lines that match nothing are ignored, which keeps
//! the parser tolerant of the format's assorted extensions.

use std::fmt;
use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::Path;

use crate::puzzle::{Blocks, Puzzle, PuzzleError};

/// Reasons a `.non` document fails to produce a puzzle.
#[derive(Debug)]
pub enum ParseError {
    Io(io::Error),
    Int(ParseIntError),
    /// The document never declared this dimension.
    MissingDimension(&'static str),
    /// A section's line count disagrees with the declared dimension.
    CountMismatch {
        axis: &'static str,
        declared: usize,
        found: usize,
    },
    /// The constraints parsed but do not form a valid puzzle.
    Puzzle(PuzzleError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(err) => write!(f, "cannot read puzzle file: {err}"),
            ParseError::Int(err) => write!(f, "malformed number: {err}"),
            ParseError::MissingDimension(name) => write!(f, "missing `{name}` declaration"),
            ParseError::CountMismatch {
                axis,
                declared,
                found,
            } => write!(f, "declared {declared} {axis} but found {found}"),
            ParseError::Puzzle(err) => write!(f, "invalid puzzle: {err}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(err) => Some(err),
            ParseError::Int(err) => Some(err),
            ParseError::Puzzle(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        ParseError::Io(err)
    }
}

impl From<ParseIntError> for ParseError {
    fn from(err: ParseIntError) -> Self {
        ParseError::Int(err)
    }
}

impl From<PuzzleError> for ParseError {
    fn from(err: PuzzleError) -> Self {
        ParseError::Puzzle(err)
    }
}

enum Section {
    Preamble,
    Columns,
    Rows,
}

/// Reads and parses a `.non` file.
pub fn parse_file(path: &Path) -> Result<Puzzle, ParseError> {
    parse(&fs::read_to_string(path)?)
}

/// Parses a `.non` document.
pub fn parse(input: &str) -> Result<Puzzle, ParseError> {
    let mut width: Option<usize> = None;
    let mut height: Option<usize> = None;
    let mut title: Option<String> = None;
    let mut cols: Vec<Blocks> = Vec::new();
    let mut rows: Vec<Blocks> = Vec::new();
    let mut section = Section::Preamble;

    for raw in input.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("width ") {
            width = Some(rest.trim().parse()?);
        } else if let Some(rest) = line.strip_prefix("height ") {
            height = Some(rest.trim().parse()?);
        } else if let Some(rest) = line.strip_prefix("title ") {
            title = Some(rest.trim().trim_matches('"').to_string());
        } else if line == "columns" {
            section = Section::Columns;
        } else if line == "rows" {
            section = Section::Rows;
        } else if line.chars().all(|c| c.is_ascii_digit() || c == ',') {
            let blocks = parse_blocks(line)?;
            match section {
                Section::Columns => cols.push(blocks),
                Section::Rows => rows.push(blocks),
                // stray numbers before any section header
                Section::Preamble => {}
            }
        }
    }

    let width = width.ok_or(ParseError::MissingDimension("width"))?;
    let height = height.ok_or(ParseError::MissingDimension("height"))?;
    if cols.len() != width {
        return Err(ParseError::CountMismatch {
            axis: "columns",
            declared: width,
            found: cols.len(),
        });
    }
    if rows.len() != height {
        return Err(ParseError::CountMismatch {
            axis: "rows",
            declared: height,
            found: rows.len(),
        });
    }

    Ok(Puzzle::new(rows, cols)?.with_title(title))
}

/// Parses one comma-separated constraint line; a single `0` denotes a line
/// with no blocks.
fn parse_blocks(line: &str) -> Result<Blocks, ParseError> {
    let blocks: Blocks = line
        .split(',')
        .map(|token| token.trim().parse::<usize>())
        .collect::<Result<_, _>>()?;
    if blocks == [0] {
        Ok(Vec::new())
    } else {
        Ok(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIAMOND: &str = "\
title \"Diamond\"
width 5
height 5

columns
1
3
5
3
1

rows
1
3
5
3
1
";

    #[test]
    fn test_parse_well_formed_document() {
        let puzzle = parse(DIAMOND).unwrap();
        assert_eq!(puzzle.title(), Some("Diamond"));
        assert_eq!(puzzle.width(), 5);
        assert_eq!(puzzle.height(), 5);
        assert_eq!(puzzle.row_blocks()[1], vec![3]);
        assert_eq!(puzzle.col_blocks()[2], vec![5]);
    }

    #[test]
    fn test_parse_comma_separated_blocks_and_zero() {
        let input = "width 3\nheight 1\ncolumns\n1\n0\n1\nrows\n1,1\n";
        let puzzle = parse(input).unwrap();
        assert_eq!(puzzle.row_blocks()[0], vec![1, 1]);
        assert_eq!(puzzle.col_blocks()[0], vec![1]);
        assert!(puzzle.col_blocks()[1].is_empty());
    }

    #[test]
    fn test_unknown_lines_are_ignored() {
        let input = "by \"someone\"\nwidth 1\nheight 1\ncolumns\n1\nrows\n1\n";
        let puzzle = parse(input).unwrap();
        assert_eq!(puzzle.width(), 1);
    }

    #[test]
    fn test_missing_dimension() {
        let err = parse("height 1\ncolumns\n1\nrows\n1\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingDimension("width")));
    }

    #[test]
    fn test_count_mismatch() {
        let err = parse("width 2\nheight 1\ncolumns\n1\nrows\n1\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::CountMismatch {
                axis: "columns",
                declared: 2,
                found: 1,
            }
        ));
    }

    #[test]
    fn test_parse_bundled_sample_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("puzzles/sample.non");
        let puzzle = parse_file(&path).unwrap();
        assert_eq!(puzzle.title(), Some("Sample 15x15"));
        assert_eq!(puzzle.width(), 15);
        assert_eq!(puzzle.height(), 15);
        assert_eq!(puzzle.col_blocks()[7], vec![10, 3]);
    }

    #[test]
    fn test_invalid_puzzle_is_wrapped() {
        // the single row asks for more cells than the width provides
        let err = parse("width 1\nheight 1\ncolumns\n1\nrows\n2\n").unwrap_err();
        assert!(matches!(err, ParseError::Puzzle(_)));
    }
}
