// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! History of a basin search session.
//!
//! The history maps each visited correlated pair `(step1, step2)` to a
//! [`Mark`]:
//!
//! - absent: the pair has never been explored ([`Mark::Unexplored`])
//! - [`Mark::InProgress`]: the pair is on the current recursion stack, and
//!   will be resolved as the recursion retreats
//! - [`Mark::Resolved`]: the pair belongs to the basin of that color
//!
//! Alongside the marks it keeps the best score recorded for each color, the
//! color counter, and the session's statistics.

use std::collections::{BTreeMap, HashMap};

use crate::config::SearchConfig;
use crate::geometry::{Color, Table};
use crate::state::statistics::{Counters, Statistics};

/// Exploration state of one correlated pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Never visited.
    Unexplored,
    /// On the current recursion stack.
    InProgress,
    /// Belongs to the basin of this color.
    Resolved(Color),
}

impl Mark {
    /// Integer form: 0 unexplored, -1 in progress, the color when resolved.
    pub fn code(self) -> i32 {
        match self {
            Mark::Unexplored => 0,
            Mark::InProgress => -1,
            Mark::Resolved(color) => color.code(),
        }
    }

    /// The color, if resolved.
    pub fn color(self) -> Option<Color> {
        match self {
            Mark::Resolved(color) => Some(color),
            _ => None,
        }
    }
}

/// Aggregate of one basin: how many pairs carry its color, and the score at
/// its optimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basin {
    pub count: usize,
    pub value: f64,
}

/// Memory of a basin search session.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    marks: HashMap<(Table, Table), Mark>,
    /// Best score per color, indexed by color value. Slot 0 is unused.
    best: Vec<f64>,
    max_color: u32,
    min_basin_size: usize,
    statistics: Statistics,
}

impl HistoryStore {
    /// Create an empty history with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&SearchConfig::default())
    }

    /// Create an empty history whose histogram uses `config.min_basin_size`.
    pub fn with_config(config: &SearchConfig) -> Self {
        Self {
            marks: HashMap::new(),
            best: vec![0.0; 2],
            max_color: 0,
            min_basin_size: config.min_basin_size,
            statistics: Statistics::new(),
        }
    }

    /// Record `mark` for the pair, overwriting any earlier mark.
    ///
    /// # Panics
    ///
    /// Panics if `mark` is [`Mark::Unexplored`]; entries are never removed.
    pub fn mark(&mut self, step1: &Table, step2: &Table, mark: Mark) {
        assert!(
            mark != Mark::Unexplored,
            "Cannot unmark {:?} {:?}",
            step1,
            step2
        );
        self.marks.insert((*step1, *step2), mark);
    }

    /// Current mark of the pair, [`Mark::Unexplored`] if never marked.
    pub fn get_color(&self, step1: &Table, step2: &Table) -> Mark {
        self.marks
            .get(&(*step1, *step2))
            .copied()
            .unwrap_or(Mark::Unexplored)
    }

    /// Allocate the next basin color. Colors start at 1.
    pub fn next_color(&mut self) -> Color {
        self.max_color += 1;
        log::debug!("Allocated basin color {}", self.max_color);
        Color::new(self.max_color)
    }

    /// Best score recorded for `color`, 0.0 if none was recorded.
    pub fn get_best(&self, color: Color) -> f64 {
        self.best.get(color.as_usize()).copied().unwrap_or(0.0)
    }

    /// Record the best score for `color`, growing the table as needed.
    pub fn set_best(&mut self, color: Color, value: f64) {
        let index = color.as_usize();
        if self.best.len() <= index {
            let grown = (2 * self.best.len() + 1).max(index + 1);
            self.best.resize(grown, 0.0);
        }
        self.best[index] = value;
    }

    /// Basins with more than the configured minimum number of pairs, keyed by
    /// color.
    pub fn histogram(&self) -> BTreeMap<Color, Basin> {
        let mut counts: BTreeMap<Color, usize> = BTreeMap::new();
        for color in self.marks.values().filter_map(|mark| mark.color()) {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .filter(|&(_, count)| count > self.min_basin_size)
            .map(|(color, count)| {
                let basin = Basin {
                    count,
                    value: self.get_best(color),
                };
                (color, basin)
            })
            .collect()
    }

    /// Number of pairs marked so far.
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    /// Number of colors allocated so far.
    pub fn color_count(&self) -> u32 {
        self.max_color
    }

    /// Number of pairs still marked in progress. Zero between searches.
    pub fn in_progress_count(&self) -> usize {
        self.marks
            .values()
            .filter(|&&mark| mark == Mark::InProgress)
            .count()
    }

    /// All marked pairs with their marks, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&(Table, Table), &Mark)> {
        self.marks.iter()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub(crate) fn count(&mut self, counter: Counters) {
        self.statistics.increment_counter(counter);
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmarked_is_unexplored() {
        let history = HistoryStore::new();
        assert_eq!(history.get_color(&[0; 4], &[0; 4]), Mark::Unexplored);
        assert_eq!(history.get_color(&[0; 4], &[0; 4]).code(), 0);
        assert_eq!(history.mark_count(), 0);
    }

    #[test]
    fn test_mark_overwrites() {
        let mut history = HistoryStore::new();
        let s1 = [1, 0, 0, 0];
        let s2 = [0, 0, 1, 0];
        history.mark(&s1, &s2, Mark::InProgress);
        assert_eq!(history.get_color(&s1, &s2).code(), -1);
        assert_eq!(history.in_progress_count(), 1);

        let c = history.next_color();
        history.mark(&s1, &s2, Mark::Resolved(c));
        assert_eq!(history.get_color(&s1, &s2), Mark::Resolved(c));
        assert_eq!(history.mark_count(), 1);
        assert_eq!(history.in_progress_count(), 0);

        // Keys are ordered pairs.
        assert_eq!(history.get_color(&s2, &s1), Mark::Unexplored);
    }

    #[test]
    #[should_panic(expected = "Cannot unmark")]
    fn test_mark_unexplored_panics() {
        let mut history = HistoryStore::new();
        history.mark(&[0; 4], &[0; 4], Mark::Unexplored);
    }

    #[test]
    fn test_next_color_is_monotonic() {
        let mut history = HistoryStore::new();
        assert_eq!(history.next_color(), Color::new(1));
        assert_eq!(history.next_color(), Color::new(2));
        assert_eq!(history.next_color(), Color::new(3));
        assert_eq!(history.color_count(), 3);
    }

    #[test]
    fn test_best_grows() {
        let mut history = HistoryStore::new();
        history.set_best(Color::new(1), -2.5);
        history.set_best(Color::new(17), 4.0);
        assert_eq!(history.get_best(Color::new(1)), -2.5);
        assert_eq!(history.get_best(Color::new(17)), 4.0);
        assert_eq!(history.get_best(Color::new(9)), 0.0);
        assert_eq!(history.get_best(Color::new(1000)), 0.0);
    }

    #[test]
    fn test_histogram_threshold() {
        let mut history = HistoryStore::with_config(&SearchConfig::default().with_min_basin_size(2));
        let big = history.next_color();
        let small = history.next_color();
        history.set_best(big, -1.0);
        history.set_best(small, -3.0);
        for i in 0..3 {
            history.mark(&[i, 0, 0, 0], &[0, 0, i, 0], Mark::Resolved(big));
        }
        for i in 0..2 {
            history.mark(&[0, i, 0, 0], &[0, 0, 0, i + 10], Mark::Resolved(small));
        }
        history.mark(&[9, 9, 9, 9], &[9, 9, 9, 9], Mark::InProgress);

        let histogram = history.histogram();
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram[&big], Basin { count: 3, value: -1.0 });
        assert!(!histogram.contains_key(&small));
    }
}
