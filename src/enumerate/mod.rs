// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded enumeration of steps.
//!
//! [`increment`] walks a counter vector through the cartesian product
//! `prod_i [0..=bound[i]]`, pruned to vectors whose sum is at most `limit`.
//! [`increment_paired`] walks two correlated step vectors together so that
//! the conservation invariant holds at every state.
//!
//! Both follow the do/while convention: the all-zero start state is a member
//! of the enumeration, visited before the first call.
//!
//! # Example
//!
//! ```
//! use gini_basins::enumerate::increment;
//!
//! let mut e = [0, 0];
//! let mut count = 1;
//! while increment(&mut e, &[4, 3], 2) {
//!     count += 1;
//! }
//! assert_eq!(count, 6);
//! assert_eq!(e, [0, 0]);
//! ```

use crate::geometry::table::conserves;
use crate::geometry::{Table, NHALVES};

/// Advance `e` to the next vector with `0 <= e[i] <= bound[i]` and
/// `sum(e) <= limit`, odometer style with `e[0]` least significant.
///
/// Returns false when the sequence wraps back to all zeros. A vector whose
/// sum already exceeds `limit` is left untouched and false is returned.
///
/// # Panics
///
/// Panics if `e` and `bound` differ in length.
pub fn increment(e: &mut [i32], bound: &[i32], limit: i32) -> bool {
    assert_eq!(e.len(), bound.len(), "Counter and bound lengths differ");
    let mut sum: i32 = e.iter().sum();
    if sum > limit {
        return false;
    }
    for i in 0..e.len() {
        e[i] += 1;
        sum += 1;
        if e[i] <= bound[i] && sum <= limit {
            return true;
        }
        sum -= e[i];
        e[i] = 0;
    }
    false
}

/// Advance a correlated pair of steps.
///
/// `e1` walks through all values in the style of [`increment`]. For a fixed
/// `e1`, each half `{i, i+2}` of `e2` walks through every split of
/// `e1[i] + e1[i+2]` that fits in `bound2`, by moving one unit from `e2[i+2]`
/// to `e2[i]`. An exhausted half is reset and carries into the next half;
/// when both carry, `e1` advances and `e2` is re-derived from it.
///
/// Returns false exactly when `e1` wraps back to all zeros, in which case
/// `e2` is reset to all zeros as well.
///
/// # Panics
///
/// Panics if the conservation invariant does not hold for `(e1, e2)` or for
/// `(bound1, bound2)`.
pub fn increment_paired(
    e1: &mut Table,
    e2: &mut Table,
    bound1: &Table,
    bound2: &Table,
    limit: i32,
) -> bool {
    assert!(
        conserves(e1, e2),
        "Conservation invariant broken: e1={:?} e2={:?}",
        e1,
        e2
    );
    assert!(
        conserves(bound1, bound2),
        "Bounds do not conserve: bound1={:?} bound2={:?}",
        bound1,
        bound2
    );

    for i in 0..NHALVES {
        e2[i] += 1;
        e2[i + 2] -= 1;
        if e2[i] <= bound2[i] && e2[i + 2] >= 0 {
            return true;
        }
        reset_pair_component(e1, e2, bound2, i);
    }

    let advanced = increment(e1, bound1, limit);
    for i in 0..NHALVES {
        reset_pair_component(e1, e2, bound2, i);
    }
    advanced
}

/// Reset half `i` of `e2` to its first split of `e1[i] + e1[i+2]`.
///
/// Everything goes to `e2[i+2]`, clamped to `bound2[i+2]`, with the remainder
/// pushed back into `e2[i]`.
pub fn reset_pair_component(e1: &Table, e2: &mut Table, bound2: &Table, i: usize) {
    let total = e1[i] + e1[i + 2];
    e2[i] = 0;
    e2[i + 2] = total;
    if e2[i + 2] > bound2[i + 2] {
        e2[i + 2] = bound2[i + 2];
        e2[i] = total - e2[i + 2];
    }
}

/// Iterator over every correlated pair visited by [`increment_paired`],
/// starting with the all-zero pair.
///
/// # Example
///
/// ```
/// use gini_basins::enumerate::Pairs;
/// use gini_basins::geometry::table::conserves;
///
/// let pairs: Vec<_> = Pairs::new([5, 3, 6, 7], [5, 3, 6, 7], 4).collect();
/// assert_eq!(pairs.len(), 397);
/// assert!(pairs.iter().all(|(s1, s2)| conserves(s1, s2)));
/// ```
#[derive(Debug, Clone)]
pub struct Pairs {
    bound1: Table,
    bound2: Table,
    limit: i32,
    next: Option<(Table, Table)>,
}

impl Pairs {
    /// Create an iterator over correlated steps bounded by `bound1`/`bound2`
    /// whose first step sums to at most `limit`.
    ///
    /// # Panics
    ///
    /// Panics if the bounds do not conserve.
    pub fn new(bound1: Table, bound2: Table, limit: i32) -> Self {
        assert!(
            conserves(&bound1, &bound2),
            "Bounds do not conserve: bound1={:?} bound2={:?}",
            bound1,
            bound2
        );
        Self {
            bound1,
            bound2,
            limit,
            next: Some(([0; 4], [0; 4])),
        }
    }
}

impl Iterator for Pairs {
    type Item = (Table, Table);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let (mut e1, mut e2) = current;
        if increment_paired(&mut e1, &mut e2, &self.bound1, &self.bound2, self.limit) {
            self.next = Some((e1, e2));
        }
        Some(current)
    }
}
