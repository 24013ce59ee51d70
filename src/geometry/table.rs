// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tables and steps.
//!
//! A table is never stored directly during search. It is described by a
//! fixed `base` (the upper bound of each cell) and a `step`, and the absolute
//! cell counts are `base - step`. A step is in bounds when
//! `0 <= step[i] <= base[i]`.
//!
//! # Examples
//!
//! ```
//! use gini_basins::geometry::table::{diff, conserves};
//!
//! let base = [10, 20, 20, 10];
//! let step = [1, 2, 3, 4];
//! assert_eq!(diff(&base, &step), [9, 18, 17, 6]);
//! assert_eq!(diff(&base, &diff(&base, &step)), step);
//!
//! assert!(conserves(&[1, 0, 1, 3], &[2, 1, 0, 2]));
//! ```

use crate::geometry::constants::{NHALVES, TABLE_LEN};

/// The four cells `(a, b, c, d)` of a 2×2 contingency table, or a step/offset
/// in the same coordinates.
pub type Table = [i32; TABLE_LEN];

/// Component-wise `a - b`.
pub fn diff(a: &Table, b: &Table) -> Table {
    std::array::from_fn(|i| a[i] - b[i])
}

/// Component-wise `a + b`.
pub fn add(a: &Table, b: &Table) -> Table {
    std::array::from_fn(|i| a[i] + b[i])
}

/// True if any component is negative.
pub fn any_negative(v: &[i32]) -> bool {
    v.iter().any(|&x| x < 0)
}

/// True if `step` lies in `0 <= step[i] <= base[i]`.
pub fn in_bounds(base: &Table, step: &Table) -> bool {
    step.iter().zip(base).all(|(&s, &b)| s >= 0 && s <= b)
}

/// The conservation invariant between two correlated vectors:
/// `s1[0]+s1[2] == s2[0]+s2[2]` and `s1[1]+s1[3] == s2[1]+s2[3]`.
pub fn conserves(s1: &[i32], s2: &[i32]) -> bool {
    (0..NHALVES).all(|i| s1[i] + s1[i + 2] == s2[i] + s2[i + 2])
}

/// L1 size of a correlated step: total absolute movement of both tables.
pub fn step_norm(s1: &Table, s2: &Table) -> i32 {
    s1.iter().chain(s2).map(|x| x.abs()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_and_add() {
        let base = [5, 3, 6, 7];
        let step = [1, 0, 2, 7];
        let cells = diff(&base, &step);
        assert_eq!(cells, [4, 3, 4, 0]);
        assert_eq!(add(&cells, &step), base);
    }

    #[test]
    fn test_any_negative() {
        assert!(!any_negative(&[0, 0, 0, 0]));
        assert!(any_negative(&[0, -1, 0, 0]));
        assert!(!any_negative(&[]));
    }

    #[test]
    fn test_in_bounds() {
        let base = [2, 2, 2, 2];
        assert!(in_bounds(&base, &[0, 0, 2, 2]));
        assert!(!in_bounds(&base, &[0, 0, 3, 0]));
        assert!(!in_bounds(&base, &[-1, 0, 0, 0]));
    }

    #[test]
    fn test_conserves() {
        assert!(conserves(&[0; 4], &[0; 4]));
        assert!(conserves(&[-1; 4], &[-1; 4]));
        assert!(conserves(&[3, 1, 0, 0], &[1, 0, 2, 1]));
        assert!(!conserves(&[3, 1, 0, 0], &[1, 0, 2, 0]));
    }

    #[test]
    fn test_step_norm() {
        assert_eq!(step_norm(&[0; 4], &[0; 4]), 0);
        assert_eq!(step_norm(&[1, 2, 0, 0], &[0, 0, 1, 2]), 6);
        assert_eq!(step_norm(&[-1, 0, 0, 1], &[0, 0, 0, 0]), 2);
    }
}
