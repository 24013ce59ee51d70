// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for contingency-table search.
//!
//! This module contains the primitives every other module works in:
//! - Table: the four cells of a 2×2 table, also used for steps and offsets
//! - Color: basin identifiers handed out by the history store
//! - Constants: table length, halves and offset counts

pub mod color;
pub mod constants;
pub mod table;

// Re-export for convenience
pub use color::Color;
pub use constants::*;
pub use table::Table;
