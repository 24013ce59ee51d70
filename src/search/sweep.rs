// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sweep the landscape by seeding basin searches from every correlated pair.
//!
//! The sweep walks the paired enumeration under `(base1, base2, budget)`.
//! Each pair spends part of the budget on its own distance from the bases;
//! what remains is the depth limit of the basin search seeded there. Pairs
//! already colored by an earlier search are skipped.

use std::collections::BTreeMap;

use crate::enumerate::Pairs;
use crate::error::{check_conservation, Result};
use crate::geometry::table::step_norm;
use crate::geometry::{Color, Table};
use crate::search::{BasinSearch, SearchMode, Sign};
use crate::state::{Basin, HistoryStore, Mark};

/// Number of marked pairs at which the first progress report is logged.
/// Each report doubles the threshold.
const FIRST_PROGRESS_REPORT: usize = 10_000;

/// Summary of a sweep.
#[derive(Debug, Clone)]
pub struct SweepReport {
    /// Basin searches started.
    pub roots: usize,
    /// Pairs marked in the history when the sweep ended.
    pub marked: usize,
    /// Colors allocated when the sweep ended.
    pub colors: u32,
    /// Basins above the configured minimum size.
    pub histogram: BTreeMap<Color, Basin>,
}

/// Run a basin search from every unexplored pair whose step norm is below
/// `budget`, with the rest of the budget as its depth limit.
///
/// # Errors
///
/// Returns [`SearchError::InvariantViolation`](crate::error::SearchError) if
/// the bases do not conserve.
///
/// # Example
///
/// ```
/// use gini_basins::search::{sweep, SearchMode, Sign};
/// use gini_basins::state::HistoryStore;
///
/// let mut history = HistoryStore::new();
/// let report = sweep(
///     &[30, 10, 10, 30], &[25, 15, 15, 25], 4,
///     Sign::Minimize, SearchMode::Greedy, &mut history,
/// ).unwrap();
/// assert!(report.roots > 0);
/// assert_eq!(report.marked, history.mark_count());
/// ```
pub fn sweep(
    base1: &Table,
    base2: &Table,
    budget: i32,
    sign: Sign,
    mode: SearchMode,
    history: &mut HistoryStore,
) -> Result<SweepReport> {
    check_conservation("bases", base1, base2)?;
    let search = BasinSearch::new(*base1, *base2, sign, mode);
    let mut roots = 0;
    let mut next_report = FIRST_PROGRESS_REPORT;

    for (step1, step2) in Pairs::new(*base1, *base2, budget) {
        let remainder = budget - step_norm(&step1, &step2);
        if remainder <= 0 || history.get_color(&step1, &step2) != Mark::Unexplored {
            continue;
        }
        search.search(history, &step1, &step2, remainder);
        roots += 1;

        if history.mark_count() > next_report {
            next_report *= 2;
            log::info!(
                "{} pairs marked, {} basins after {} roots",
                history.mark_count(),
                history.color_count(),
                roots
            );
            for (color, basin) in history.histogram() {
                log::debug!("{:>3} {:>9} {:.3}", color, basin.count, basin.value);
            }
        }
    }

    let report = SweepReport {
        roots,
        marked: history.mark_count(),
        colors: history.color_count(),
        histogram: history.histogram(),
    };
    log::info!(
        "Sweep {} of {:?}/{:?} (budget {}): {} roots, {} pairs, {} basins; {}",
        mode,
        base1,
        base2,
        budget,
        report.roots,
        report.marked,
        report.colors,
        history.statistics()
    );
    Ok(report)
}
