//! Core machine logic module - pure, deterministic, and testable
//!
//! This module contains the bean counter (Galton board) state machine and the
//! beans that fall through it. It has **no dependencies** on terminals, argument
//! parsing, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical runs
//! - **Testable**: Every invariant is checked by unit and property tests
//! - **Portable**: Can run headless, in a CLI, or behind any other front end
//!
//! # Module Structure
//!
//! - [`bean`]: A bean, its logical position, and its luck/skill trajectory
//! - [`machine`]: Waiting queue, in-flight rows, landing slots, and the tick
//! - [`rng`]: Seedable random source used when beans are created
//! - [`snapshot`]: Serializable point-in-time view of a machine
//!
//! # Machine Rules
//!
//! - **Height**: A machine with `n` slots has `n` peg rows
//! - **Tick**: Every in-flight bean falls one row (bottom row lands), then one
//!   waiting bean enters the top row
//! - **Termination**: [`Machine::advance_step`] returns `false` once nothing is in
//!   flight or waiting
//! - **Filtering**: [`Machine::lower_half`] / [`Machine::upper_half`] discard
//!   `floor(T / 2)` of the `T` landed beans
//! - **Repeat**: [`Machine::repeat`] scoops every landed and in-flight bean back
//!   into the waiting queue
//!
//! # Example
//!
//! ```
//! use bean_counter_core::{Bean, BeanRng, Machine};
//! use bean_counter_types::Mode;
//!
//! let mut rng = BeanRng::new(12345);
//! let beans = Bean::batch(200, 10, Mode::Luck, &mut rng);
//!
//! let mut machine = Machine::new(10);
//! machine.reset(beans);
//! while machine.advance_step() {}
//!
//! assert_eq!(machine.landed_bean_count(), 200);
//! assert!((machine.average_slot_bean_count() - 4.5).abs() < 0.5);
//! ```

pub mod bean;
pub mod error;
pub mod machine;
pub mod rng;
pub mod snapshot;

pub use bean_counter_types as types;

// Re-export commonly used types for convenience
pub use bean::{skill_target, Bean, Trajectory};
pub use error::MachineError;
pub use machine::{BeanId, Machine};
pub use rng::{BeanRng, RandomSource};
pub use snapshot::MachineSnapshot;
