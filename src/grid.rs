//! Row-major bitmask grid holding committed cell states.
//!
//! Each row is stored as a `u64` line mask (bit `x` set = cell `(x, y)`
//! filled), so committing a row candidate is a single store and extracting a
//! column is a bit-gather across rows.

/// A `width` x `height` grid of filled/empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<u64>,
}

impl Grid {
    /// Creates an all-empty grid.
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            rows: vec![0; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns row `y` as a line mask.
    #[inline]
    pub fn row(&self, y: usize) -> u64 {
        self.rows[y]
    }

    /// Overwrites row `y` with a line mask.
    #[inline]
    pub fn set_row(&mut self, y: usize, line: u64) {
        self.rows[y] = line;
    }

    /// Gathers column `x` into a line mask (bit `y` set = cell `(x, y)`
    /// filled).
    pub fn column(&self, x: usize) -> u64 {
        self.rows
            .iter()
            .enumerate()
            .fold(0, |col, (y, row)| col | ((row >> x & 1) << y))
    }

    /// Whether cell `(x, y)` is filled.
    #[inline]
    pub fn filled(&self, x: usize, y: usize) -> bool {
        self.rows[y] >> x & 1 == 1
    }

    /// Renders the grid as text, one row per line: `█` filled, `.` empty.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.height * (self.width + 1));
        for &row in &self.rows {
            for x in 0..self.width {
                out.push(if row >> x & 1 == 1 { '█' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}
