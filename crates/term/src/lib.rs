//! Terminal text rendering for the bean counter.
//!
//! Renders a machine into plain fixed-width strings for the CLI's debug trace and
//! final report. Rendering only reads the machine's public queries, keeping
//! `core` free of any presentation concern.

pub mod board_view;

pub use bean_counter_core as core;
pub use bean_counter_types as types;

pub use board_view::BoardView;
