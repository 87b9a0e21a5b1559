//! Runtime error type.

use logix_core::CircuitError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The kernel rejected or aborted an edit.
    #[error(transparent)]
    Circuit(#[from] CircuitError),

    /// A journal entry arrived out of order.
    #[error("sequence violation: expected {expected}, got {got}")]
    SequenceViolation { expected: u64, got: u64 },

    /// Two replays of the same journal disagreed.
    #[error("determinism failure: replays produced {first} and {second}")]
    DeterminismFailure { first: String, second: String },
}
