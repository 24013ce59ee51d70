// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recursive search for local minima and their attraction basins.
//!
//! Each point `(step1, step2)` is searched by recursing into its paired
//! neighbors. The history tells us whether a point was already visited:
//! resolved points return their color, and points on the current recursion
//! stack are marked in progress so that cycles in the neighbor graph end
//! immediately. Whenever a neighbor resolves to a color, we keep it if its
//! recorded best score beats the best seen so far. When no neighbor resolves,
//! the point is a new local optimum: it gets a fresh color, and its own score
//! becomes that color's best.
//!
//! # Example
//!
//! ```
//! use gini_basins::search::{basin_search, Outcome, SearchMode, Sign};
//! use gini_basins::state::HistoryStore;
//!
//! let base1 = [30, 10, 10, 30];
//! let base2 = [25, 15, 15, 25];
//! let mut history = HistoryStore::new();
//! let outcome = basin_search(
//!     &base1, &[0; 4], &base2, &[0; 4],
//!     3, Sign::Minimize, &mut history, SearchMode::Greedy,
//! ).unwrap();
//! assert!(matches!(outcome, Outcome::Resolved(_)));
//! assert_eq!(history.in_progress_count(), 0);
//! ```

use crate::error::{check_conservation, Result};
use crate::geometry::table::{add, any_negative, diff, in_bounds};
use crate::geometry::{Color, Table};
use crate::neighbors::PairedOffsets;
use crate::scoring::{compare_gain, scorable};
use crate::search::{Outcome, SearchMode, Sign};
use crate::state::{Counters, HistoryStore, Mark};

/// Search from `(step1, step2)` relative to `(base1, base2)`, recursing at
/// most `limit` steps deep.
///
/// Returns the outcome for the root point; every point resolved along the way
/// is recorded in `history`. Points with a negative cell, or with an empty
/// side in either table, are [`Outcome::OutOfBounds`] and are never scored.
///
/// # Errors
///
/// Returns [`SearchError::InvariantViolation`](crate::error::SearchError) if
/// the bases or the steps do not conserve. Nothing is searched in that case.
#[allow(clippy::too_many_arguments)]
pub fn basin_search(
    base1: &Table,
    step1: &Table,
    base2: &Table,
    step2: &Table,
    limit: i32,
    sign: Sign,
    history: &mut HistoryStore,
    mode: SearchMode,
) -> Result<Outcome> {
    check_conservation("bases", base1, base2)?;
    check_conservation("steps", step1, step2)?;
    let search = BasinSearch::new(*base1, *base2, sign, mode);
    let outcome = search.search(history, step1, step2, limit);
    log::debug!(
        "Basin search from {:?}/{:?} (limit {}): {:?}, {} pairs marked",
        step1,
        step2,
        limit,
        outcome,
        history.mark_count()
    );
    Ok(outcome)
}

/// Fixed parameters of a basin search: the two bases, the sign and the mode.
#[derive(Debug, Clone, Copy)]
pub struct BasinSearch {
    base1: Table,
    base2: Table,
    sign: Sign,
    mode: SearchMode,
}

impl BasinSearch {
    pub fn new(base1: Table, base2: Table, sign: Sign, mode: SearchMode) -> Self {
        Self {
            base1,
            base2,
            sign,
            mode,
        }
    }

    /// The two tables at `(step1, step2)`, if both lie inside their bases
    /// and have samples on each side of the fork.
    pub fn cells(&self, step1: &Table, step2: &Table) -> Option<(Table, Table)> {
        let n1 = diff(&self.base1, step1);
        let n2 = diff(&self.base2, step2);
        if any_negative(&n1) || any_negative(&n2) || !scorable(&n1) || !scorable(&n2) {
            return None;
        }
        Some((n1, n2))
    }

    /// Signed score of a point, `None` when [`cells`](Self::cells) rejects it.
    pub fn score(&self, step1: &Table, step2: &Table) -> Option<f64> {
        self.cells(step1, step2)
            .map(|(n1, n2)| self.sign.factor() * compare_gain(&n1, &n2))
    }

    /// Recursive search. The caller is responsible for the conservation of
    /// `(step1, step2)`; neighbors preserve it.
    ///
    /// The recursion is at most `limit + 1` frames deep.
    pub fn search(
        &self,
        history: &mut HistoryStore,
        step1: &Table,
        step2: &Table,
        limit: i32,
    ) -> Outcome {
        if limit < 0 {
            history.count(Counters::DepthExhausted);
            return Outcome::DepthExhausted;
        }
        let Some((n1, n2)) = self.cells(step1, step2) else {
            history.count(Counters::OutOfBounds);
            return Outcome::OutOfBounds;
        };
        match history.get_color(step1, step2) {
            Mark::Resolved(color) => {
                history.count(Counters::MemoHits);
                return Outcome::Resolved(color);
            }
            Mark::InProgress => {
                history.count(Counters::CycleHits);
                return Outcome::InProgress;
            }
            Mark::Unexplored => {}
        }

        history.mark(step1, step2, Mark::InProgress);
        history.count(Counters::Visits);
        let v = self.sign.factor() * compare_gain(&n1, &n2);
        log::trace!("Visit {:?}/{:?} score {:.4} limit {}", step1, step2, v, limit);

        let mut chosen: Option<(Color, f64)> = None;
        for (x1, x2) in PairedOffsets::new() {
            let m1 = add(step1, &x1);
            let m2 = add(step2, &x2);
            if !in_bounds(&self.base1, &m1) || !in_bounds(&self.base2, &m2) {
                history.count(Counters::OutOfBounds);
                continue;
            }
            let Some(vn) = self.score(&m1, &m2) else {
                history.count(Counters::OutOfBounds);
                continue;
            };
            if self.mode == SearchMode::Greedy && vn > v {
                history.count(Counters::GreedyPruned);
                continue;
            }
            if let Outcome::Resolved(color) = self.search(history, &m1, &m2, limit - 1) {
                let best = history.get_best(color);
                if best < chosen.map_or(f64::INFINITY, |(_, b)| b) {
                    chosen = Some((color, best));
                }
            }
        }

        let color = match chosen {
            Some((color, _)) => color,
            None => {
                let color = history.next_color();
                history.set_best(color, v);
                history.count(Counters::LocalOptima);
                color
            }
        };
        history.mark(step1, step2, Mark::Resolved(color));
        Outcome::Resolved(color)
    }
}
