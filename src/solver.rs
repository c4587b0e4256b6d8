//! Backtracking nonogram solver with candidate-set constraint propagation.
//!
//! Key design points:
//! - Every row and column keeps the full set of line masks that satisfy its
//!   blocks; the sets only ever shrink.
//! - Forced cells (filled in every surviving candidate of a row or of the
//!   crossing column) are a per-row `u64` mask, so filtering a candidate is
//!   one AND plus one compare.
//! - Propagation repeats force-then-filter until the total candidate count
//!   stops dropping.
//! - The search commits one row at a time, seeds propagation with the
//!   committed line, and hands each branch its own cloned sets, so
//!   backtracking needs no rollback.

use crate::grid::Grid;
use crate::line::{self, LineSet};
use crate::puzzle::Puzzle;

/// Candidate sets for every line along one axis.
type AxisCandidates = Vec<LineSet>;

/// Solves the puzzle, returning the first solution found.
///
/// `None` means the constraints admit no grid; that is an expected outcome,
/// not an error. Which solution is returned for ambiguous puzzles depends on
/// set iteration order.
pub fn solve(puzzle: &Puzzle) -> Option<Grid> {
    let width = puzzle.width();
    let height = puzzle.height();

    let rows: AxisCandidates = puzzle
        .row_blocks()
        .iter()
        .map(|blocks| line::enumerate(blocks, width))
        .collect();
    let cols: AxisCandidates = puzzle
        .col_blocks()
        .iter()
        .map(|blocks| line::enumerate(blocks, height))
        .collect();

    let (rows, cols) = propagate(rows, cols, None, width, height);

    let mut grid = Grid::new(width, height);
    if solve_from(&mut grid, 0, &rows, &cols, puzzle) {
        Some(grid)
    } else {
        None
    }
}

/// Bitwise AND over every line in the set, masked to `length` bits.
///
/// An empty set yields the full mask; the crossing lines then filter down to
/// nothing and the branch dies at the next commit attempt.
fn forced_in(set: &LineSet, length: usize) -> u64 {
    set.iter()
        .fold(line::line_mask(length), |forced, &candidate| {
            forced & candidate
        })
}

/// The forced-filled matrix as one width-bit mask per row: a bit is set when
/// every surviving candidate of the row, or of the crossing column, fills
/// that cell.
fn forced_cells(
    rows: &AxisCandidates,
    cols: &AxisCandidates,
    width: usize,
    height: usize,
) -> Vec<u64> {
    let mut fixed: Vec<u64> = rows.iter().map(|set| forced_in(set, width)).collect();
    for (x, set) in cols.iter().enumerate() {
        let col_forced = forced_in(set, height);
        for (y, row_fixed) in fixed.iter_mut().enumerate() {
            *row_fixed |= (col_forced >> y & 1) << x;
        }
    }
    fixed
}

/// Column `x` of the forced matrix as a height-bit mask.
fn forced_column(fixed: &[u64], x: usize) -> u64 {
    fixed
        .iter()
        .enumerate()
        .fold(0, |col, (y, row)| col | ((row >> x & 1) << y))
}

fn total_candidates(rows: &AxisCandidates, cols: &AxisCandidates) -> usize {
    rows.iter().map(LineSet::len).sum::<usize>() + cols.iter().map(LineSet::len).sum::<usize>()
}

/// Shrinks both candidate axes to a fixpoint.
///
/// Each round computes the forced matrix and drops every candidate that
/// leaves one of its line's forced cells empty (the candidate must cover the
/// forced bits). `seed` replaces the first round's forced matrix; the search
/// uses it to inject a freshly committed row as certain knowledge instead of
/// re-deriving that row from still-plural candidates.
fn propagate(
    mut rows: AxisCandidates,
    mut cols: AxisCandidates,
    mut seed: Option<Vec<u64>>,
    width: usize,
    height: usize,
) -> (AxisCandidates, AxisCandidates) {
    loop {
        let before = total_candidates(&rows, &cols);

        let fixed = match seed.take() {
            Some(fixed) => fixed,
            None => forced_cells(&rows, &cols, width, height),
        };

        for (set, &row_fixed) in rows.iter_mut().zip(&fixed) {
            set.retain(|&candidate| candidate & row_fixed == row_fixed);
        }
        for (x, set) in cols.iter_mut().enumerate() {
            let col_fixed = forced_column(&fixed, x);
            set.retain(|&candidate| candidate & col_fixed == col_fixed);
        }

        if total_candidates(&rows, &cols) == before {
            return (rows, cols);
        }
    }
}

/// Tries every candidate for row `idx`, re-propagating after each commit.
///
/// At the terminal index the committed grid is accepted iff every column
/// verifies against its blocks; rows need no re-check because committed
/// lines are drawn from sets that satisfy their blocks by construction.
fn solve_from(
    grid: &mut Grid,
    idx: usize,
    rows: &AxisCandidates,
    cols: &AxisCandidates,
    puzzle: &Puzzle,
) -> bool {
    let width = grid.width();
    let height = grid.height();

    if idx == height {
        return (0..width)
            .all(|x| line::satisfies(grid.column(x), height, &puzzle.col_blocks()[x]));
    }

    for &candidate in &rows[idx] {
        grid.set_row(idx, candidate);

        let mut fixed = forced_cells(rows, cols, width, height);
        fixed[idx] = candidate;
        let (next_rows, next_cols) =
            propagate(rows.clone(), cols.clone(), Some(fixed), width, height);

        if solve_from(grid, idx + 1, &next_rows, &next_cols, puzzle) {
            return true;
        }
    }
    false
}
