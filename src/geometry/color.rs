// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Basin colors.
//!
//! Every resolved point of the basin search carries a color naming the local
//! optimum its neighbor chain leads to. Colors are handed out by the
//! [`HistoryStore`](crate::state::HistoryStore) in increasing order of
//! discovery, starting at 1.

use std::fmt;

/// A resolved basin identifier (always positive).
///
/// This is a newtype wrapper so that basin ids cannot be mixed up with the
/// integer sentinels used by the search (`0`, `-1`, `-2`, `-3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u32);

impl Color {
    /// Largest color. Colors share the signed code space of the search
    /// outcomes, so they stay within `i32`.
    pub const MAX: u32 = i32::MAX as u32;

    /// Create a new color, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value == 0` (reserved for unexplored points) or
    /// `value > Color::MAX`.
    pub fn new(value: u32) -> Self {
        assert!(
            value > 0 && value <= Self::MAX,
            "Color out of range: {}",
            value
        );
        Self(value)
    }

    /// Try to create a new color, returning None when out of range.
    pub fn try_new(value: u32) -> Option<Self> {
        if value > 0 && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the underlying value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// The color as a positive outcome code.
    pub fn code(self) -> i32 {
        self.0 as i32
    }

    /// Get the color as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let c = Color::new(1);
        assert_eq!(c.value(), 1);

        let c = Color::new(42);
        assert_eq!(c.as_usize(), 42);
    }

    #[test]
    #[should_panic(expected = "Color out of range")]
    fn test_color_zero() {
        Color::new(0);
    }

    #[test]
    #[should_panic(expected = "Color out of range")]
    fn test_color_too_large() {
        Color::new(Color::MAX + 1);
    }

    #[test]
    fn test_color_try_new() {
        assert!(Color::try_new(0).is_none());
        assert!(Color::try_new(1).is_some());
        assert!(Color::try_new(Color::MAX + 1).is_none());
        assert_eq!(Color::new(Color::MAX).code(), i32::MAX);
    }

    #[test]
    fn test_color_ordering() {
        assert!(Color::new(2) < Color::new(3));
        assert_eq!(format!("{}", Color::new(7)), "7");
    }
}
