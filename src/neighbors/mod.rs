// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Unit-step neighbor offsets.
//!
//! The neighbors of a point are reached by offsets whose components are in
//! `{-1, 0, 1}`. For a single vector, [`step_neighbor`] walks every non-zero
//! offset. For a correlated pair, [`step_neighbor_paired`] walks every pair of
//! offsets `(x1, x2)` that keeps the conservation invariant, so stepping both
//! tables by the offsets preserves the equality of their marginal sums.
//!
//! Both use the seed convention: the caller starts at all `-1`, uses that
//! state as the first offset, and calls the stepper until it returns false.
//! On exhaustion the offsets are back at all `-1`.
//!
//! # Example
//!
//! ```
//! use gini_basins::neighbors::step_neighbor;
//!
//! let mut dx = [-1; 4];
//! let mut count = 1;
//! while step_neighbor(&mut dx) {
//!     assert!(dx.iter().any(|&x| x != 0));
//!     count += 1;
//! }
//! assert_eq!(count, 80);
//! assert_eq!(dx, [-1; 4]);
//! ```

use crate::geometry::table::conserves;
use crate::geometry::{Table, NHALVES};

/// Advance a ternary odometer over `{-1, 0, 1}`, `step[0]` least significant.
/// Returns false, with `step` back at all `-1`, when it wraps.
fn advance_ternary(step: &mut [i32]) -> bool {
    for x in step.iter_mut() {
        *x += 1;
        if *x <= 1 {
            return true;
        }
        *x = -1;
    }
    false
}

/// Advance `step` to the next non-zero unit offset.
///
/// Returns false, and resets `step` to all `-1`, once every offset has been
/// produced. Together with the all `-1` seed this yields the `3^n - 1`
/// non-zero offsets.
pub fn step_neighbor(step: &mut [i32]) -> bool {
    loop {
        if !advance_ternary(step) {
            return false;
        }
        if step.iter().any(|&x| x != 0) {
            return true;
        }
    }
}

/// Reset half `i` of `x2` to its first split of `x1[i] + x1[i+2]` within
/// `[-1, 1]`.
fn reset_offset_component(x1: &Table, x2: &mut Table, i: usize) {
    let total = x1[i] + x1[i + 2];
    x2[i] = (total - 1).max(-1);
    x2[i + 2] = total - x2[i];
}

fn advance_paired(x1: &mut Table, x2: &mut Table) -> bool {
    for i in 0..NHALVES {
        x2[i] += 1;
        x2[i + 2] -= 1;
        if x2[i] <= 1 && x2[i + 2] >= -1 {
            return true;
        }
        reset_offset_component(x1, x2, i);
    }

    // x1 may pass through zero here: x2 still moves the second table.
    let advanced = advance_ternary(x1);
    for i in 0..NHALVES {
        reset_offset_component(x1, x2, i);
    }
    advanced
}

/// Advance a correlated pair of offsets to the next pair that keeps the
/// conservation invariant.
///
/// Each half `{i, i+2}` of `x2` moves in lockstep: one unit leaves `x2[i+2]`
/// as one unit enters `x2[i]`, so `x2[i] + x2[i+2]` stays equal to
/// `x1[i] + x1[i+2]`. An exhausted half resets and carries into the next
/// half; when both carry, `x1` takes one ternary step and `x2` is re-derived.
/// The all-zero pair (the point itself) is skipped.
///
/// Returns false, with both offsets back at all `-1`, when exhausted.
///
/// # Panics
///
/// Panics if `(x1, x2)` does not conserve on entry.
pub fn step_neighbor_paired(x1: &mut Table, x2: &mut Table) -> bool {
    assert!(
        conserves(x1, x2),
        "Conservation invariant broken: x1={:?} x2={:?}",
        x1,
        x2
    );
    loop {
        if !advance_paired(x1, x2) {
            return false;
        }
        if x1.iter().chain(x2.iter()).any(|&x| x != 0) {
            return true;
        }
    }
}

/// Iterator over every paired neighbor offset, seed first.
///
/// # Example
///
/// ```
/// use gini_basins::geometry::NPAIRED_OFFSETS;
/// use gini_basins::neighbors::PairedOffsets;
///
/// assert_eq!(PairedOffsets::new().count(), NPAIRED_OFFSETS);
/// ```
#[derive(Debug, Clone)]
pub struct PairedOffsets {
    next: Option<(Table, Table)>,
}

impl PairedOffsets {
    pub fn new() -> Self {
        Self {
            next: Some(([-1; 4], [-1; 4])),
        }
    }
}

impl Default for PairedOffsets {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PairedOffsets {
    type Item = (Table, Table);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let (mut x1, mut x2) = current;
        if step_neighbor_paired(&mut x1, &mut x2) {
            self.next = Some((x1, x2));
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{NOFFSETS, NPAIRED_OFFSETS};
    use std::collections::HashSet;

    #[test]
    fn test_step_neighbor_visits_all_nonzero() {
        let mut dx = [-1; 4];
        let mut found = HashSet::new();
        loop {
            assert!(dx.iter().filter(|&&x| x == 0).count() < 4);
            found.insert(dx);
            if !step_neighbor(&mut dx) {
                break;
            }
        }
        assert_eq!(found.len(), NOFFSETS - 1);
        assert_eq!(dx, [-1; 4]);
    }

    #[test]
    fn test_step_neighbor_order() {
        let mut dx = [-1, -1];
        assert!(step_neighbor(&mut dx));
        assert_eq!(dx, [0, -1]);
        assert!(step_neighbor(&mut dx));
        assert_eq!(dx, [1, -1]);
        assert!(step_neighbor(&mut dx));
        assert_eq!(dx, [-1, 0]);
        // [0, 0] is skipped
        assert!(step_neighbor(&mut dx));
        assert_eq!(dx, [1, 0]);
    }

    #[test]
    fn test_step_neighbor_single_dimension() {
        let mut dx = [-1];
        assert!(step_neighbor(&mut dx));
        assert_eq!(dx, [1]);
        assert!(!step_neighbor(&mut dx));
        assert_eq!(dx, [-1]);
    }

    #[test]
    fn test_reset_offset_component() {
        let mut x2 = [9; 4];
        reset_offset_component(&[1, -1, 1, -1], &mut x2, 0);
        assert_eq!(&x2[..], &[1, 9, 1, 9]);
        reset_offset_component(&[1, -1, 1, -1], &mut x2, 1);
        assert_eq!(x2, [1, -1, 1, -1]);
        reset_offset_component(&[1, 0, -1, 0], &mut x2, 0);
        assert_eq!(x2[0], -1);
        assert_eq!(x2[2], 1);
    }

    #[test]
    fn test_step_neighbor_paired_traversal() {
        let mut x1 = [-1; 4];
        let mut x2 = [-1; 4];
        let mut found = HashSet::new();
        loop {
            assert!(conserves(&x1, &x2));
            assert!(x1.iter().chain(&x2).all(|x| (-1..=1).contains(x)));
            assert!(x1.iter().chain(&x2).any(|&x| x != 0));
            assert!(found.insert((x1, x2)), "duplicate offset {:?} {:?}", x1, x2);
            if !step_neighbor_paired(&mut x1, &mut x2) {
                break;
            }
        }
        assert_eq!(found.len(), NPAIRED_OFFSETS);
        assert_eq!((x1, x2), ([-1; 4], [-1; 4]));
    }

    #[test]
    fn test_paired_offsets_include_second_table_only_moves() {
        // The first table stays put while the second shifts within a half.
        let moves: Vec<_> = PairedOffsets::new()
            .filter(|(x1, _)| *x1 == [0; 4])
            .collect();
        // 3 splits of zero per half, minus the all-zero pair
        assert_eq!(moves.len(), 3 * 3 - 1);
        assert!(moves.contains(&([0; 4], [1, 0, -1, 0])));
    }

    #[test]
    #[should_panic(expected = "Conservation invariant broken")]
    fn test_step_neighbor_paired_rejects_broken_invariant() {
        step_neighbor_paired(&mut [-1; 4], &mut [0; 4]);
    }
}
