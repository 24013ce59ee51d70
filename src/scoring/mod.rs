// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gini split-quality scores.
//!
//! A 2×2 table `(a, b, c, d)` describes a fork: one side holds `a` samples of
//! the first class and `b` of the second, the other side `c` and `d`. The
//! split gain is the Gini impurity of the unsplit population less the
//! impurities of the two sides. A split that leaves the class balance
//! unchanged scores zero; a split that separates the classes scores high.
//!
//! # Examples
//!
//! ```
//! use gini_basins::scoring::{compare_gain, split_gain};
//!
//! assert_eq!(split_gain(&[10, 10, 10, 10]), 0.0);
//! assert_eq!(split_gain(&[10, 0, 0, 10]), 5.0);
//! assert!(compare_gain(&[10, 0, 0, 10], &[10, 10, 10, 10]) > 0.0);
//! ```

use crate::geometry::Table;

/// Gini score for two counts, `a*b/(a+b)`. Largest when the counts are equal.
///
/// # Panics
///
/// Panics if `a + b == 0`. Callers must never score an empty side.
pub fn gini_score(a: f64, b: f64) -> f64 {
    let total = a + b;
    assert!(total != 0.0, "Gini score of empty population ({} + {})", a, b);
    a * b / total
}

/// Whether `v` can be scored: both sides of the fork hold at least one
/// sample. Cells are assumed non-negative.
pub fn scorable(v: &Table) -> bool {
    v[0] + v[1] > 0 && v[2] + v[3] > 0
}

/// Decrease in Gini impurity due to the split described by `v`.
///
/// `gini(a+c, b+d) - gini(a, b) - gini(c, d)`
///
/// # Panics
///
/// Panics unless [`scorable`] holds for `v`.
pub fn split_gain(v: &Table) -> f64 {
    let [a, b, c, d] = v.map(f64::from);
    gini_score(a + c, b + d) - gini_score(a, b) - gini_score(c, d)
}

/// Degree to which split `a` is better than split `b`. Positive if `a` is
/// more informative.
pub fn compare_gain(a: &Table, b: &Table) -> f64 {
    split_gain(a) - split_gain(b)
}
