//! Line-level primitives: block verification and candidate enumeration.
//!
//! A line (one row or one column) is a `u64` bitmask where bit `i` set means
//! cell `i` is filled. Grid dimensions are capped at 64 so every line fits in
//! a single word, which turns the hot operations of the solver — forced-cell
//! intersection and superset filtering — into single AND instructions.

use rustc_hash::FxHashSet;

/// Maximum cells per line (one `u64` bitmask).
pub const MAX_LINE_LEN: usize = 64;

/// The set of lines still considered possible for one row or column.
pub type LineSet = FxHashSet<u64>;

/// Bitmask with the lowest `length` bits set.
#[inline(always)]
pub const fn line_mask(length: usize) -> u64 {
    if length >= MAX_LINE_LEN {
        u64::MAX
    } else {
        (1u64 << length) - 1
    }
}

/// Bitmask with bits `start..start + len` set.
#[inline(always)]
pub const fn run_mask(start: usize, len: usize) -> u64 {
    line_mask(len) << start
}

/// Checks whether `line` realizes `blocks` exactly: scanning left to right,
/// the maximal filled runs must match the block lengths in order, with no
/// filled cells left over.
///
/// An empty block list succeeds only on an all-empty line. Requesting a
/// block when the scan is already past the end fails.
pub fn satisfies(line: u64, length: usize, blocks: &[usize]) -> bool {
    let mut x = 0;
    for &block in blocks {
        if x >= length {
            return false;
        }
        while x < length && line >> x & 1 == 0 {
            x += 1;
        }
        let run_start = x;
        while x < length && line >> x & 1 == 1 {
            x += 1;
        }
        if x - run_start != block {
            return false;
        }
    }
    while x < length && line >> x & 1 == 0 {
        x += 1;
    }
    x == length
}

/// Enumerates every line of `length` cells whose filled runs match `blocks`.
///
/// Blocks are placed constructively: each block slides over the positions
/// its predecessor left open, with one mandatory gap cell in between. This
/// produces exactly the lines the exhaustive 2^length filter would keep,
/// without visiting the invalid assignments.
pub fn enumerate(blocks: &[usize], length: usize) -> LineSet {
    let mut lines = LineSet::default();
    place_blocks(blocks, 0, 0, length, &mut lines);
    lines
}

/// Places the first of `blocks` at every position from `pos` on, then
/// recurses on the rest. With no blocks left, the accumulated line is
/// complete and recorded.
fn place_blocks(blocks: &[usize], line: u64, pos: usize, length: usize, out: &mut LineSet) {
    let Some((&block, rest)) = blocks.split_first() else {
        out.insert(line);
        return;
    };
    if pos + block > length {
        // no more space
        return;
    }
    for start in pos..=length - block {
        place_blocks(rest, line | run_mask(start, block), start + block + 1, length, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfies_exact_blocks() {
        assert!(satisfies(0b0110, 4, &[2]));
        assert!(satisfies(0b101, 3, &[1, 1]));
        assert!(satisfies(0b11111, 5, &[5]));
        assert!(satisfies(0b10110, 5, &[2, 1]));
    }

    #[test]
    fn test_satisfies_rejects_merged_blocks() {
        // one contiguous run of 4 is not two runs of 2
        assert!(!satisfies(0b1111, 4, &[2, 2]));
    }

    #[test]
    fn test_satisfies_rejects_wrong_run_length() {
        assert!(!satisfies(0b0110, 4, &[3]));
        assert!(!satisfies(0b1000, 4, &[2]));
        assert!(!satisfies(0b0111, 4, &[2]));
    }

    #[test]
    fn test_satisfies_empty_blocks_need_empty_line() {
        assert!(satisfies(0, 4, &[]));
        assert!(!satisfies(0b0010, 4, &[]));
    }

    #[test]
    fn test_satisfies_rejects_missing_block() {
        assert!(!satisfies(0, 2, &[1, 1]));
        assert!(!satisfies(0b1, 1, &[1, 1]));
    }

    #[test]
    fn test_satisfies_block_on_zero_length_line() {
        assert!(!satisfies(0, 0, &[1]));
        assert!(satisfies(0, 0, &[]));
    }

    #[test]
    fn test_satisfies_rejects_extra_filled_cells() {
        assert!(!satisfies(0b10011, 5, &[2]));
    }

    #[test]
    fn test_enumerate_empty_blocks() {
        let lines = enumerate(&[], 5);
        assert_eq!(lines.len(), 1);
        assert!(lines.contains(&0));
    }

    #[test]
    fn test_enumerate_full_line() {
        let lines = enumerate(&[5], 5);
        assert_eq!(lines.len(), 1);
        assert!(lines.contains(&0b11111));
    }

    #[test]
    fn test_enumerate_overfull_blocks_is_empty() {
        assert!(enumerate(&[3, 3], 5).is_empty());
        assert!(enumerate(&[6], 5).is_empty());
    }

    #[test]
    fn test_enumerate_counts() {
        // one block of 1 in n cells has n placements
        assert_eq!(enumerate(&[1], 7).len(), 7);
        // 1,2 in 5 cells: gap distribution gives C(3,2) = 3
        assert_eq!(enumerate(&[1, 2], 5).len(), 3);
    }

    /// Reference implementation: the exhaustive filter over all 2^length
    /// assignments.
    fn brute_force(blocks: &[usize], length: usize) -> LineSet {
        (0..1u64 << length)
            .filter(|&line| satisfies(line, length, blocks))
            .collect()
    }

    #[test]
    fn test_enumerate_matches_brute_force() {
        let cases: &[(&[usize], usize)] = &[
            (&[], 6),
            (&[1], 1),
            (&[1, 1], 3),
            (&[2, 2], 7),
            (&[1, 2, 1], 8),
            (&[3], 10),
            (&[2, 1, 2], 10),
            (&[4], 4),
            (&[1, 1, 1], 9),
        ];
        for &(blocks, length) in cases {
            assert_eq!(
                enumerate(blocks, length),
                brute_force(blocks, length),
                "mismatch for blocks {blocks:?} in length {length}"
            );
        }
    }

    #[test]
    fn test_enumerate_members_all_satisfy() {
        let blocks = [1, 2, 2, 3];
        for &line in &enumerate(&blocks, 14) {
            assert!(satisfies(line, 14, &blocks), "invalid member {line:#b}");
        }
    }

    #[test]
    fn test_masks() {
        assert_eq!(line_mask(0), 0);
        assert_eq!(line_mask(3), 0b111);
        assert_eq!(line_mask(64), u64::MAX);
        assert_eq!(run_mask(2, 3), 0b11100);
        assert_eq!(run_mask(0, 64), u64::MAX);
    }
}
