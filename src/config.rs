// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tunable constants of a search session.
//!
//! # Example
//!
//! ```
//! use gini_basins::config::SearchConfig;
//!
//! let config = SearchConfig::default().with_top_k_capacity(5);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.min_basin_size, 5);
//! ```

use crate::error::{Result, SearchError};

/// Default minimum number of pairs a basin needs to appear in a histogram.
pub const DEFAULT_MIN_BASIN_SIZE: usize = 5;

/// Default number of solutions kept by the top-K search.
pub const DEFAULT_TOP_K_CAPACITY: usize = 20;

/// Default score window above the running best inside which top-K
/// candidates are kept.
pub const DEFAULT_TOP_K_SLACK: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Basins with this many pairs or fewer are left out of histograms.
    pub min_basin_size: usize,
    /// Capacity of the top-K ranking.
    pub top_k_capacity: usize,
    /// Candidates scoring `best + top_k_slack` or worse are never ranked.
    pub top_k_slack: f64,
}

impl SearchConfig {
    pub fn with_min_basin_size(mut self, min_basin_size: usize) -> Self {
        self.min_basin_size = min_basin_size;
        self
    }

    pub fn with_top_k_capacity(mut self, top_k_capacity: usize) -> Self {
        self.top_k_capacity = top_k_capacity;
        self
    }

    pub fn with_top_k_slack(mut self, top_k_slack: f64) -> Self {
        self.top_k_slack = top_k_slack;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.top_k_capacity == 0 {
            return Err(SearchError::InvalidConfig(
                "top-K capacity must be at least 1".to_string(),
            ));
        }
        if !self.top_k_slack.is_finite() || self.top_k_slack < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "top-K slack must be finite and non-negative, got {}",
                self.top_k_slack
            )));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_basin_size: DEFAULT_MIN_BASIN_SIZE,
            top_k_capacity: DEFAULT_TOP_K_CAPACITY,
            top_k_slack: DEFAULT_TOP_K_SLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.min_basin_size, 5);
        assert_eq!(config.top_k_capacity, 20);
        assert_eq!(config.top_k_slack, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = SearchConfig::default().with_top_k_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_slack_rejected() {
        for slack in [-0.5, f64::NAN, f64::INFINITY] {
            let config = SearchConfig::default().with_top_k_slack(slack);
            assert!(config.validate().is_err(), "slack {} accepted", slack);
        }
        assert!(SearchConfig::default().with_top_k_slack(0.0).validate().is_ok());
    }
}
