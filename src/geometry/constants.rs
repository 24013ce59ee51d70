// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants for 2×2 contingency table geometry.
//!
//! A table has four cells `(a, b, c, d)`. The conservation invariant pairs
//! cell `i` with cell `i + 2`, so the table splits into two halves:
//! `{0, 2}` and `{1, 3}`.

/// Number of cells in a 2×2 contingency table.
pub const TABLE_LEN: usize = 4;

/// Number of conserved halves (`{0, 2}` and `{1, 3}`).
pub const NHALVES: usize = 2;

/// Number of unit offsets around a single table, the all-zero offset included.
pub const NOFFSETS: usize = pow3(TABLE_LEN);

/// Number of non-zero offsets of a correlated pair that keep the halves
/// balanced. Each half admits 19 `(x1[i], x1[i+2], x2[i], x2[i+2])` choices.
pub const NPAIRED_OFFSETS: usize = 19 * 19 - 1;

/// Compute 3^n at compile time.
const fn pow3(n: usize) -> usize {
    match n {
        0 => 1,
        _ => 3 * pow3(n - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_counts() {
        assert_eq!(NOFFSETS, 81);
        assert_eq!(NPAIRED_OFFSETS, 360);
        assert_eq!(TABLE_LEN, 2 * NHALVES);
    }
}
