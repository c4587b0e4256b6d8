//! Puzzle definitions: per-line block constraints plus upfront validation.
//!
//! A puzzle is just the two constraint tables; the grid dimensions follow
//! from their lengths. Validation rejects the constraints that could never
//! enumerate a candidate (zero-length blocks, blocks that cannot fit their
//! line) so those surface as a distinct error instead of a silent
//! "no solution". Cross-axis contradictions are left to the solver.

use std::fmt;

use crate::line::MAX_LINE_LEN;

/// Block lengths for one row or column, in scan order.
pub type Blocks = Vec<usize>;

/// A nonogram: block constraints for every row and every column.
///
/// Rows are listed top to bottom and read left to right; columns are listed
/// left to right and read top to bottom. Width is the number of column
/// constraints, height the number of row constraints.
#[derive(Debug, Clone)]
pub struct Puzzle {
    title: Option<String>,
    row_blocks: Vec<Blocks>,
    col_blocks: Vec<Blocks>,
}

/// A structurally invalid puzzle definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// No rows or no columns.
    EmptyAxis(&'static str),
    /// More lines on an axis than fit a `u64` line mask.
    TooLarge { axis: &'static str, len: usize },
    /// A block of length zero (empty lines are an empty block list).
    ZeroBlock { axis: &'static str, index: usize },
    /// Blocks plus mandatory gaps exceed the line length.
    Overfull {
        axis: &'static str,
        index: usize,
        needed: usize,
        len: usize,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::EmptyAxis(axis) => write!(f, "puzzle has no {axis}"),
            PuzzleError::TooLarge { axis, len } => {
                write!(f, "{len} {axis} exceed the limit of {MAX_LINE_LEN}")
            }
            PuzzleError::ZeroBlock { axis, index } => {
                write!(f, "{axis} {index} contains a zero-length block")
            }
            PuzzleError::Overfull {
                axis,
                index,
                needed,
                len,
            } => write!(
                f,
                "{axis} {index} needs {needed} cells but the line has {len}"
            ),
        }
    }
}

impl std::error::Error for PuzzleError {}

impl Puzzle {
    /// Builds a validated puzzle from row and column constraint tables.
    pub fn new(row_blocks: Vec<Blocks>, col_blocks: Vec<Blocks>) -> Result<Puzzle, PuzzleError> {
        if row_blocks.is_empty() {
            return Err(PuzzleError::EmptyAxis("rows"));
        }
        if col_blocks.is_empty() {
            return Err(PuzzleError::EmptyAxis("columns"));
        }
        if row_blocks.len() > MAX_LINE_LEN {
            return Err(PuzzleError::TooLarge {
                axis: "rows",
                len: row_blocks.len(),
            });
        }
        if col_blocks.len() > MAX_LINE_LEN {
            return Err(PuzzleError::TooLarge {
                axis: "columns",
                len: col_blocks.len(),
            });
        }
        check_axis("row", &row_blocks, col_blocks.len())?;
        check_axis("column", &col_blocks, row_blocks.len())?;
        Ok(Puzzle {
            title: None,
            row_blocks,
            col_blocks,
        })
    }

    /// Convenience constructor over constant tables.
    pub fn from_slices(rows: &[&[usize]], cols: &[&[usize]]) -> Result<Puzzle, PuzzleError> {
        Puzzle::new(
            rows.iter().map(|blocks| blocks.to_vec()).collect(),
            cols.iter().map(|blocks| blocks.to_vec()).collect(),
        )
    }

    /// Attaches a display title.
    pub fn with_title(mut self, title: Option<String>) -> Puzzle {
        self.title = title;
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn width(&self) -> usize {
        self.col_blocks.len()
    }

    pub fn height(&self) -> usize {
        self.row_blocks.len()
    }

    pub fn row_blocks(&self) -> &[Blocks] {
        &self.row_blocks
    }

    pub fn col_blocks(&self) -> &[Blocks] {
        &self.col_blocks
    }
}

/// Checks every constraint of one axis against its line length.
fn check_axis(axis: &'static str, lines: &[Blocks], line_len: usize) -> Result<(), PuzzleError> {
    for (index, blocks) in lines.iter().enumerate() {
        if blocks.contains(&0) {
            return Err(PuzzleError::ZeroBlock { axis, index });
        }
        if !blocks.is_empty() {
            let needed = blocks.iter().sum::<usize>() + blocks.len() - 1;
            if needed > line_len {
                return Err(PuzzleError::Overfull {
                    axis,
                    index,
                    needed,
                    len: line_len,
                });
            }
        }
    }
    Ok(())
}

/// Row constraints of the bundled 15x15 sample puzzle, used by the
/// benchmarks and integration tests.
pub const SAMPLE_ROWS: &[&[usize]] = &[
    &[1, 2, 1],
    &[1, 4, 1],
    &[1, 4, 1],
    &[1, 2, 1],
    &[1, 1],
    &[1, 2, 1],
    &[1, 1, 2, 1],
    &[1, 1, 1, 1, 3],
    &[1, 2, 1, 2],
    &[2, 2, 1, 2],
    &[6, 4, 2],
    &[1],
    &[2, 3],
    &[8],
    &[3],
];

/// Column constraints of the bundled 15x15 sample puzzle.
pub const SAMPLE_COLS: &[&[usize]] = &[
    &[10],
    &[2],
    &[2, 2, 1],
    &[4, 1, 1, 1],
    &[4, 2, 1, 1],
    &[2, 2, 1],
    &[2],
    &[10, 3],
    &[1, 2],
    &[1, 1],
    &[1, 3],
    &[3, 3],
    &[2, 3],
    &[1, 2, 1],
    &[1, 2, 1],
];
