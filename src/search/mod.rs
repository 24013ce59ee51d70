// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Searches over correlated table pairs.
//!
//! - [`basin_search`]: memoized depth-first coloring of attraction basins
//! - [`top_k_search`]: exhaustive enumeration keeping the best K tables
//! - [`sweep`]: seeds a basin search from every pair within a step budget
//!
//! All searches minimize the *signed score* `sign * compare_gain(n1, n2)`,
//! so [`Sign::Minimize`] looks for pairs where the second table splits best
//! relative to the first and [`Sign::Maximize`] for the opposite.

pub mod basin;
pub mod sweep;
pub mod top_k;

pub use basin::{basin_search, BasinSearch};
pub use sweep::{sweep, SweepReport};
pub use top_k::{top_k_search, ScoredSolution, TopK};

use strum_macros::{Display, EnumString};

use crate::geometry::Color;

/// Which extremum of `compare_gain` the search looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Sign {
    /// Signed score is `+compare_gain`.
    Minimize,
    /// Signed score is `-compare_gain`.
    Maximize,
}

impl Sign {
    /// The factor applied to `compare_gain`.
    pub fn factor(self) -> f64 {
        match self {
            Sign::Minimize => 1.0,
            Sign::Maximize => -1.0,
        }
    }
}

/// Which neighbors the basin search descends into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SearchMode {
    /// Every in-bounds neighbor, bounded only by the depth limit.
    Exhaustive,
    /// Only neighbors whose signed score is no worse than the current point.
    Greedy,
}

/// Result of searching from one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The depth limit ran out before the point was reached.
    DepthExhausted,
    /// The point has a negative cell in one of its tables.
    OutOfBounds,
    /// The point is on the current recursion stack.
    InProgress,
    /// The point belongs to the basin of this color.
    Resolved(Color),
}

impl Outcome {
    /// Integer form: -2 depth exhausted, -3 out of bounds, -1 in progress,
    /// the color when resolved.
    pub fn code(self) -> i32 {
        match self {
            Outcome::DepthExhausted => -2,
            Outcome::OutOfBounds => -3,
            Outcome::InProgress => -1,
            Outcome::Resolved(color) => color.code(),
        }
    }

    /// The color, if resolved.
    pub fn color(self) -> Option<Color> {
        match self {
            Outcome::Resolved(color) => Some(color),
            _ => None,
        }
    }
}
