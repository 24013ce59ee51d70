// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Attraction basins of the Gini split-gain landscape.
//!
//! A 2×2 contingency table `(a, b, c, d)` scores a decision-tree split by
//! how much it reduces Gini impurity. This crate compares two tables whose
//! marginal sums are tied together by a conservation invariant, and maps the
//! landscape of their score difference: which pairs are local optima, which
//! pairs lead to each optimum, and which pairs score best overall.
//!
//! # Coordinates
//!
//! Each table is described as a fixed `base` minus a `step`. Two steps are
//! *correlated* when `step1[0]+step1[2] == step2[0]+step2[2]` and
//! `step1[1]+step1[3] == step2[1]+step2[3]`. Every paired enumeration and
//! every neighbor move preserves this.
//!
//! # Layers
//!
//! 1. **geometry**: tables, step arithmetic, basin colors
//! 2. **scoring**: Gini score, split gain, gain comparison
//! 3. **enumerate** / **neighbors**: bounded odometers over steps and
//!    unit offsets, single and paired
//! 4. **state**: the history store that memoizes the basin search
//! 5. **search**: basin coloring, top-K ranking, and the sweep driver
//!
//! # Search Algorithm
//!
//! The basin search is a memoized depth-first search. A point is marked in
//! progress on entry, so cycles in the neighbor graph end immediately, and
//! marked with a resolved color on exit. A point whose neighbors resolve to
//! no color is a local optimum and gets a fresh color.
//!
//! Everything is single-threaded. A history store belongs to one search
//! session; independent sessions share nothing.

pub mod config;
pub mod enumerate;
pub mod error;
pub mod geometry;
pub mod neighbors;
pub mod scoring;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use search::{basin_search, sweep, top_k_search, Outcome, SearchMode, Sign};
pub use state::HistoryStore;
