//! Bean counter (workspace facade crate).
//!
//! The machine logic, text rendering, and shared types live in dedicated crates under
//! `crates/` and are re-exported here as `bean_counter::{core,term,types}`. This crate
//! adds the command-line surface, run configuration, logging bootstrap, and the
//! experiment driver used by the `bean-counter` binary.

pub use bean_counter_core as core;
pub use bean_counter_term as term;
pub use bean_counter_types as types;

pub mod cli;
pub mod config;
pub mod runner;
pub mod telemetry;
