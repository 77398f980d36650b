//! Machine module - the bean counter state machine
//!
//! The machine owns three containers of beans:
//!
//! - `waiting`: beans not yet dropped, in drop order
//! - `in_flight`: one entry per peg row, each empty or holding exactly one bean
//! - `slots`: one FIFO queue per landing slot, in landing order
//!
//! Beans themselves live in an arena (`beans`) and the containers hold stable
//! [`BeanId`]s into it, so moving a bean between containers never moves the bean.
//!
//! The board height equals the slot count. A full run finishes after at most
//! `slot_count + bean_count` ticks: the pipeline is `slot_count` rows deep and
//! at most one bean enters per tick.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::bean::Bean;
use crate::error::MachineError;
use crate::snapshot::MachineSnapshot;
use crate::types::MIN_SLOT_COUNT;

/// Stable handle of a bean inside a machine (its position in the load order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BeanId(usize);

/// The bean counter machine
#[derive(Debug, Clone)]
pub struct Machine {
    slot_count: usize,
    beans: Vec<Bean>,
    waiting: VecDeque<BeanId>,
    /// Indexed by row (y position); `in_flight.len() == slot_count`.
    in_flight: Vec<Option<BeanId>>,
    slots: Vec<VecDeque<BeanId>>,
    /// Beans tracked since the last reset/repeat, minus those filtered out.
    loaded: usize,
}

impl Machine {
    /// Create an idle machine with `slot_count` slots and peg rows.
    ///
    /// # Panics
    ///
    /// Panics if `slot_count` is zero. Use [`Machine::try_new`] at input boundaries.
    pub fn new(slot_count: usize) -> Self {
        match Self::try_new(slot_count) {
            Ok(machine) => machine,
            Err(err) => panic!("{}", err),
        }
    }

    /// Checked constructor.
    pub fn try_new(slot_count: usize) -> Result<Self, MachineError> {
        if slot_count < MIN_SLOT_COUNT {
            return Err(MachineError::TooFewSlots {
                slot_count,
                min: MIN_SLOT_COUNT,
            });
        }

        Ok(Self {
            slot_count,
            beans: Vec::new(),
            waiting: VecDeque::new(),
            in_flight: vec![None; slot_count],
            slots: vec![VecDeque::new(); slot_count],
            loaded: 0,
        })
    }

    /// Hard reset: load `beans` and drop the first one onto the top peg.
    ///
    /// All previous state is discarded. Every bean is returned to its origin and
    /// queued in input order. An empty load leaves the machine idle.
    pub fn reset(&mut self, beans: Vec<Bean>) {
        self.beans = beans;
        self.waiting.clear();
        self.in_flight.fill(None);
        for slot in &mut self.slots {
            slot.clear();
        }

        for (i, bean) in self.beans.iter_mut().enumerate() {
            bean.reset();
            self.waiting.push_back(BeanId(i));
        }
        self.loaded = self.beans.len();

        self.drop_next();
        debug!(
            slot_count = self.slot_count,
            beans = self.loaded,
            "machine reset"
        );
    }

    /// Repeat the experiment with the beans currently tracked.
    ///
    /// Slot beans (slot 0 upward, FIFO within each slot) and then in-flight beans
    /// (row 0 downward) are reset and queued behind any beans still waiting.
    pub fn repeat(&mut self) {
        let mut scooped = 0usize;

        for slot in &mut self.slots {
            while let Some(id) = slot.pop_front() {
                self.beans[id.0].reset();
                self.waiting.push_back(id);
                scooped += 1;
            }
        }

        for row in &mut self.in_flight {
            if let Some(id) = row.take() {
                self.beans[id.0].reset();
                self.waiting.push_back(id);
                scooped += 1;
            }
        }

        self.loaded = self.waiting.len();
        self.drop_next();
        debug!(scooped, beans = self.loaded, "machine repeat");
    }

    /// Advance the machine one tick.
    ///
    /// Rows are processed bottom-up so that a bean moved into row `r + 1` is never
    /// visited again in the same tick. The bottom-row bean lands in the slot
    /// matching its `x`; every other bean falls one row; then the next waiting
    /// bean (if any) enters row 0.
    ///
    /// Returns `false` exactly when nothing was in flight and nothing was waiting,
    /// i.e. the run is over.
    pub fn advance_step(&mut self) -> bool {
        let mut changed = false;
        let bottom = self.slot_count - 1;

        if let Some(id) = self.in_flight[bottom].take() {
            let slot = self.beans[id.0].x_pos();
            debug_assert!(slot < self.slot_count);
            self.slots[slot].push_back(id);
            trace!(bean = id.0, slot, "bean landed");
            changed = true;
        }

        for row in (0..bottom).rev() {
            if let Some(id) = self.in_flight[row].take() {
                debug_assert!(self.in_flight[row + 1].is_none());
                self.beans[id.0].advance();
                self.in_flight[row + 1] = Some(id);
                changed = true;
            }
        }

        if self.drop_next() {
            changed = true;
        }

        changed
    }

    /// Step until the machine reports no change; returns the number of changing ticks.
    pub fn run_to_completion(&mut self) -> usize {
        let mut ticks = 0;
        while self.advance_step() {
            ticks += 1;
        }
        ticks
    }

    /// Keep the lower half of the landed beans.
    ///
    /// Removes `floor(T / 2)` of the `T` landed beans, scanning from the highest
    /// slot downward and taking from the front of a partially drained slot.
    /// Returns the number of beans removed.
    pub fn lower_half(&mut self) -> usize {
        let removed = self.discard_half((0..self.slot_count).rev());
        debug!(removed, remaining = self.landed_bean_count(), "kept lower half");
        removed
    }

    /// Keep the upper half of the landed beans.
    ///
    /// Mirror image of [`Machine::lower_half`], scanning from slot 0 upward.
    pub fn upper_half(&mut self) -> usize {
        let removed = self.discard_half(0..self.slot_count);
        debug!(removed, remaining = self.landed_bean_count(), "kept upper half");
        removed
    }

    fn discard_half(&mut self, order: impl Iterator<Item = usize>) -> usize {
        let removed = self.landed_bean_count() / 2;
        let mut to_remove = removed;

        for i in order {
            if to_remove == 0 {
                break;
            }
            let slot = &mut self.slots[i];
            if slot.len() <= to_remove {
                to_remove -= slot.len();
                slot.clear();
            } else {
                slot.drain(..to_remove);
                to_remove = 0;
            }
        }

        self.loaded -= removed;
        removed
    }

    /// Move the head of the waiting queue onto row 0. Returns whether a bean entered.
    fn drop_next(&mut self) -> bool {
        match self.waiting.pop_front() {
            Some(id) => {
                debug_assert!(self.in_flight[0].is_none());
                self.in_flight[0] = Some(id);
                true
            }
            None => false,
        }
    }

    /// Hand every loaded bean back (reset to origin), leaving the machine idle.
    ///
    /// Beans removed by a half filter are returned too.
    pub fn take_beans(&mut self) -> Vec<Bean> {
        self.waiting.clear();
        self.in_flight.fill(None);
        for slot in &mut self.slots {
            slot.clear();
        }
        self.loaded = 0;

        let mut beans = std::mem::take(&mut self.beans);
        for bean in &mut beans {
            bean.reset();
        }
        beans
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Number of beans waiting to be dropped.
    pub fn remaining_bean_count(&self) -> usize {
        self.waiting.len()
    }

    /// `x` of the bean on row `y`, or `None` if the row is empty.
    ///
    /// # Panics
    ///
    /// Panics if `y >= slot_count`.
    pub fn in_flight_bean_x_pos(&self, y: usize) -> Option<usize> {
        self.in_flight[y].map(|id| self.beans[id.0].x_pos())
    }

    pub fn in_flight_bean_count(&self) -> usize {
        self.in_flight.iter().filter(|row| row.is_some()).count()
    }

    /// Number of beans in slot `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= slot_count`.
    pub fn slot_bean_count(&self, i: usize) -> usize {
        self.slots[i].len()
    }

    pub fn slot_bean_counts(&self) -> Vec<usize> {
        self.slots.iter().map(VecDeque::len).collect()
    }

    pub fn landed_bean_count(&self) -> usize {
        self.slots.iter().map(VecDeque::len).sum()
    }

    /// Beans currently tracked: waiting + in flight + landed.
    pub fn total_bean_count(&self) -> usize {
        self.remaining_bean_count() + self.in_flight_bean_count() + self.landed_bean_count()
    }

    /// Beans loaded by the last reset/repeat, less any removed by filtering.
    pub fn loaded_bean_count(&self) -> usize {
        self.loaded
    }

    /// Mean slot index over all landed beans; `0.0` when nothing has landed.
    pub fn average_slot_bean_count(&self) -> f64 {
        let (weighted, total) = self
            .slots
            .iter()
            .enumerate()
            .fold((0.0, 0usize), |(weighted, total), (i, slot)| {
                (weighted + (i * slot.len()) as f64, total + slot.len())
            });

        if total == 0 {
            0.0
        } else {
            weighted / total as f64
        }
    }

    /// `true` once nothing is waiting or in flight.
    pub fn is_idle(&self) -> bool {
        self.waiting.is_empty() && self.in_flight.iter().all(Option::is_none)
    }

    pub fn bean(&self, id: BeanId) -> &Bean {
        &self.beans[id.0]
    }

    /// Waiting beans in drop order.
    pub fn waiting_beans(&self) -> impl Iterator<Item = BeanId> + '_ {
        self.waiting.iter().copied()
    }

    /// Beans in slot `i`, in landing order.
    ///
    /// # Panics
    ///
    /// Panics if `i >= slot_count`.
    pub fn slot_beans(&self, i: usize) -> impl Iterator<Item = BeanId> + '_ {
        self.slots[i].iter().copied()
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            slot_count: self.slot_count,
            remaining: self.remaining_bean_count(),
            in_flight: (0..self.slot_count)
                .map(|y| self.in_flight_bean_x_pos(y))
                .collect(),
            slots: self.slot_bean_counts(),
            landed: self.landed_bean_count(),
            average: self.average_slot_bean_count(),
        }
    }
}
