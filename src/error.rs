// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for search entry points.
//!
//! Only caller-supplied data is reported through [`SearchError`]. Broken
//! invariants inside the enumeration primitives are contract violations and
//! panic, and out-of-bounds or depth-limited branches are ordinary search
//! outcomes (see [`Outcome`](crate::search::Outcome)).

use crate::geometry::Table;

/// Errors reported by the public search entry points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Two correlated vectors do not have equal half sums.
    #[error("{what} do not conserve: {left:?} vs {right:?}")]
    InvariantViolation {
        what: &'static str,
        left: Table,
        right: Table,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A vector given on the command line could not be parsed.
    #[error("Invalid vector '{input}': {reason}")]
    InvalidVector { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, SearchError>;

/// Check the conservation invariant, naming the offending vectors on failure.
pub fn check_conservation(what: &'static str, left: &Table, right: &Table) -> Result<()> {
    if crate::geometry::table::conserves(left, right) {
        Ok(())
    } else {
        Err(SearchError::InvariantViolation {
            what,
            left: *left,
            right: *right,
        })
    }
}
