//! BoardView: maps a `core::Machine` into fixed-width text.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is drawn as a triangle of pegs, one text line per row. A peg with a
//! bean above it prints `1`, every other peg prints `0`. The last line holds the
//! bean count of every slot, each right-aligned in `x_spacing + 1` columns:
//!
//! ```text
//!        1
//!      0   0
//!    0   0   0
//!    2   5   1
//! ```

use std::fmt;

use crate::core::Machine;
use crate::types::SLOT_FIELD_WIDTH;

/// Text renderer for a bean counter machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    /// Width of one peg or slot field: the peg spacing plus the digit column.
    field: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            field: SLOT_FIELD_WIDTH,
        }
    }
}

impl BoardView {
    /// View with `x_spacing` blank columns between pegs. Odd values keep rows interleaved.
    pub fn new(x_spacing: usize) -> Self {
        Self {
            field: x_spacing + 1,
        }
    }

    pub fn x_spacing(&self) -> usize {
        self.field - 1
    }

    fn field(&self) -> usize {
        self.field
    }

    /// Leading field width for the first peg on row `y`.
    fn indent(&self, slot_count: usize, y: usize) -> usize {
        let root = slot_count.saturating_sub(1) * self.field() / 2 + self.field();
        root.saturating_sub(self.field() / 2 * y)
    }

    /// Slot counts only, e.g. `"   0   3   5"`.
    pub fn slot_string(&self, machine: &Machine) -> String {
        SlotLine {
            view: self,
            machine,
        }
        .to_string()
    }

    /// Whole machine: every peg row followed by the slot line.
    pub fn board_string(&self, machine: &Machine) -> String {
        BoardText {
            view: self,
            machine,
        }
        .to_string()
    }
}

struct SlotLine<'a> {
    view: &'a BoardView,
    machine: &'a Machine,
}

impl fmt::Display for SlotLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.view.field();
        for i in 0..self.machine.slot_count() {
            write!(f, "{:>width$}", self.machine.slot_bean_count(i), width = width)?;
        }
        Ok(())
    }
}

struct BoardText<'a> {
    view: &'a BoardView,
    machine: &'a Machine,
}

impl fmt::Display for BoardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot_count = self.machine.slot_count();
        for y in 0..slot_count {
            let bean_x = self.machine.in_flight_bean_x_pos(y);
            for x in 0..=y {
                let width = if x == 0 {
                    self.view.indent(slot_count, y)
                } else {
                    self.view.field()
                };
                let mark = if bean_x == Some(x) { 1 } else { 0 };
                write!(f, "{:>width$}", mark, width = width)?;
            }
            writeln!(f)?;
        }

        let slots = SlotLine {
            view: self.view,
            machine: self.machine,
        };
        fmt::Display::fmt(&slots, f)
    }
}
