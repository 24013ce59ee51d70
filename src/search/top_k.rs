// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search for the best-scoring table pairs.
//!
//! Every correlated pair within the step limit is scored, and the best
//! `capacity` are kept in a bounded ranking. Candidates outside a fixed
//! window above the running best are never inserted, so memory stays bounded
//! whatever the size of the enumeration.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::config::SearchConfig;
use crate::enumerate::Pairs;
use crate::error::Result;
use crate::geometry::table::{any_negative, diff};
use crate::geometry::Table;
use crate::scoring::{compare_gain, scorable};
use crate::search::Sign;

/// A scored pair of tables.
///
/// `score` is the signed score, lower is better. `id` records creation order
/// within one ranking and only breaks ties: the earlier solution ranks first.
#[derive(Debug, Clone)]
pub struct ScoredSolution {
    pub score: f64,
    pub id: u64,
    pub x1: Table,
    pub x2: Table,
}

impl PartialEq for ScoredSolution {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredSolution {}

impl PartialOrd for ScoredSolution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredSolution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Bounded ranking of the best solutions offered so far.
///
/// The heap keeps the worst retained solution on top so that it can be
/// evicted as soon as the ranking overflows.
#[derive(Debug, Clone)]
pub struct TopK {
    heap: BinaryHeap<ScoredSolution>,
    capacity: usize,
    next_id: u64,
}

impl TopK {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "TopK capacity must be positive");
        Self {
            heap: BinaryHeap::with_capacity(capacity + 1),
            capacity,
            next_id: 0,
        }
    }

    /// Offer a solution, evicting the worst one if the ranking overflows.
    pub fn offer(&mut self, score: f64, x1: Table, x2: Table) {
        let id = self.next_id;
        self.next_id += 1;
        self.heap.push(ScoredSolution { score, id, x1, x2 });
        while self.heap.len() > self.capacity {
            self.heap.pop();
        }
    }

    /// The worst solution still retained.
    pub fn worst(&self) -> Option<&ScoredSolution> {
        self.heap.peek()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Solutions in ascending score order, ties by creation order.
    pub fn into_ranked(self) -> Vec<ScoredSolution> {
        self.heap.into_sorted_vec()
    }
}

/// Score every correlated pair of steps under `(base, base, limit)` and
/// return the best `config.top_k_capacity`, best first.
///
/// A pair is offered to the ranking only while its score is below
/// `best + config.top_k_slack`, where `best` is the running best at the time.
/// Entries that fall outside the window of the final best are dropped before
/// returning. Pairs with an empty side in either table are not scored.
///
/// # Errors
///
/// Returns [`SearchError::InvalidConfig`](crate::error::SearchError) if the
/// configuration does not validate.
///
/// # Example
///
/// ```
/// use gini_basins::config::SearchConfig;
/// use gini_basins::search::{top_k_search, Sign};
///
/// let ranked = top_k_search(&[10, 20, 20, 10], 6, Sign::Minimize, &SearchConfig::default()).unwrap();
/// assert!(ranked.len() <= 20);
/// assert!(ranked.windows(2).all(|w| w[0].score <= w[1].score));
/// ```
pub fn top_k_search(
    base: &Table,
    limit: i32,
    sign: Sign,
    config: &SearchConfig,
) -> Result<Vec<ScoredSolution>> {
    config.validate()?;
    let mut ranking = TopK::new(config.top_k_capacity);
    let mut best = f64::INFINITY;
    let mut scored = 0usize;

    for (step1, step2) in Pairs::new(*base, *base, limit) {
        let x1 = diff(base, &step1);
        let x2 = diff(base, &step2);
        if any_negative(&x1) || any_negative(&x2) || !scorable(&x1) || !scorable(&x2) {
            continue;
        }
        scored += 1;
        let v = sign.factor() * compare_gain(&x1, &x2);
        if v < best {
            best = v;
        }
        if v < best + config.top_k_slack {
            ranking.offer(v, x1, x2);
        }
    }

    log::debug!(
        "Top-K over {:?} (limit {}): scored {} pairs, best {:.4}, kept {}",
        base,
        limit,
        scored,
        best,
        ranking.len()
    );
    let mut ranked = ranking.into_ranked();
    ranked.retain(|solution| solution.score < best + config.top_k_slack);
    Ok(ranked)
}
