// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.
//!
//! - HistoryStore: marks of visited pairs, best score per basin color
//! - Statistics: per-session counters

pub mod history;
pub mod statistics;

pub use history::{Basin, HistoryStore, Mark};
pub use statistics::{Counters, Statistics};
