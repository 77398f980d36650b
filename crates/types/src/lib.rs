//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (machine logic, text rendering, CLI parsing).
//!
//! # Board Geometry
//!
//! A machine with `n` slots has `n` peg rows. Row `y` holds `y + 1` pegs, and the
//! logical position of a bean on row `y` is `x` with `0 <= x <= y`:
//!
//! ```text
//!                      (0, 0)
//!               (0, 1)        (1, 1)
//!        (0, 2)        (1, 2)        (2, 2)
//!  (0, 3)       (1, 3)        (2, 3)       (3, 3)
//! [Slot0]       [Slot1]       [Slot2]      [Slot3]
//! ```
//!
//! A bean leaving the bottom row lands in the slot whose index equals its final `x`.
//!
//! # Layout Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_SLOT_COUNT` | 1 | Smallest valid machine |
//! | `X_SPACING` | 3 | Blank columns between pegs in the text board |
//! | `SLOT_FIELD_WIDTH` | 4 | Width of one peg or slot field in the default text board |
//!
//! # Examples
//!
//! ```
//! use bean_counter_types::{Mode, MIN_SLOT_COUNT};
//!
//! // Parse from string (case-insensitive)
//! let mode = Mode::from_str("Luck").unwrap();
//! assert_eq!(mode, Mode::Luck);
//! assert_eq!(mode.as_str(), "luck");
//!
//! assert_eq!(Mode::from_str("chance"), None);
//! assert_eq!(MIN_SLOT_COUNT, 1);
//! ```

use std::fmt;

/// Smallest slot count a machine can be built with.
pub const MIN_SLOT_COUNT: usize = 1;

/// Number of blank columns between neighbouring pegs in the text board.
///
/// Must be odd so that pegs on adjacent rows interleave evenly.
pub const X_SPACING: usize = 3;

/// Width of a single right-aligned slot count in the slot line.
pub const SLOT_FIELD_WIDTH: usize = X_SPACING + 1;

/// Trajectory policy of a bean
///
/// - **Luck**: each peg is an independent fair coin flip between `x` and `x + 1`
/// - **Skill**: the bean steers toward a landing slot fixed when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Luck,
    Skill,
}

impl Mode {
    /// Parse mode from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use bean_counter_types::Mode;
    ///
    /// assert_eq!(Mode::from_str("luck"), Some(Mode::Luck));
    /// assert_eq!(Mode::from_str("SKILL"), Some(Mode::Skill));
    /// assert_eq!(Mode::from_str("debug"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "luck" => Some(Mode::Luck),
            "skill" => Some(Mode::Skill),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Luck => "luck",
            Mode::Skill => "skill",
        }
    }

    /// All modes, in CLI listing order.
    pub fn all() -> [Mode; 2] {
        [Mode::Luck, Mode::Skill]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_constants() {
        assert_eq!(X_SPACING % 2, 1, "peg spacing must be odd");
        assert_eq!(SLOT_FIELD_WIDTH, 4);
        assert_eq!(MIN_SLOT_COUNT, 1);
    }

    #[test]
    fn test_mode_string_roundtrip() {
        for mode in Mode::all() {
            assert_eq!(Mode::from_str(mode.as_str()), Some(mode));
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn test_mode_rejects_unknown() {
        assert_eq!(Mode::from_str(""), None);
        assert_eq!(Mode::from_str("lucky"), None);
        assert_eq!(Mode::from_str(" skill"), None);
    }
}
