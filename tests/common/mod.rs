// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use gini_basins::enumerate::{increment, increment_paired};
use gini_basins::geometry::table::conserves;
use gini_basins::geometry::Table;
use gini_basins::state::{HistoryStore, Mark};

/// Run [`increment`] from all zeros to exhaustion, checking every state,
/// and return the number of vectors visited.
pub fn count_single(bound: &[i32], limit: i32) -> usize {
    let mut e = vec![0; bound.len()];
    let mut seen = HashSet::new();
    loop {
        for (i, (&x, &k)) in e.iter().zip(bound).enumerate() {
            assert!(x >= 0 && x <= k, "bad value for e[{}]: {}", i, x);
        }
        assert!(e.iter().sum::<i32>() <= limit);
        assert!(seen.insert(e.clone()), "duplicate {:?}", e);
        if !increment(&mut e, bound, limit) {
            break;
        }
    }
    assert!(e.iter().all(|&x| x == 0));
    let product: usize = bound.iter().map(|&k| (k + 1) as usize).product();
    assert!(seen.len() <= product);
    seen.len()
}

/// Run [`increment_paired`] from all zeros to exhaustion, checking the
/// conservation invariant, bounds, and uniqueness at every state.
/// Returns every pair visited.
pub fn visit_paired(k1: &Table, k2: &Table, limit: i32) -> HashSet<(Table, Table)> {
    let mut e1 = [0; 4];
    let mut e2 = [0; 4];
    let mut seen = HashSet::new();
    loop {
        assert!(conserves(&e1, &e2), "invariant broken: {:?} {:?}", e1, e2);
        for i in 0..4 {
            assert!(e1[i] >= 0 && e1[i] <= k1[i], "bad value for e1[{}]: {}", i, e1[i]);
            assert!(e2[i] >= 0 && e2[i] <= k2[i], "bad value for e2[{}]: {}", i, e2[i]);
        }
        assert!(seen.insert((e1, e2)), "duplicate {:?} {:?}", e1, e2);
        if !increment_paired(&mut e1, &mut e2, k1, k2, limit) {
            break;
        }
    }
    assert_eq!((e1, e2), ([0; 4], [0; 4]));
    seen
}

/// Snapshot of every mark in a history, for comparing sessions.
pub fn snapshot(history: &HistoryStore) -> HashMap<(Table, Table), Mark> {
    history.iter().map(|(key, mark)| (*key, *mark)).collect()
}
