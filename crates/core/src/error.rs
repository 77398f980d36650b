//! Error types for machine construction.

use thiserror::Error;

/// Errors raised when building a machine from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error("slot count {slot_count} is invalid: a machine needs at least {min} slot")]
    TooFewSlots { slot_count: usize, min: usize },
}
