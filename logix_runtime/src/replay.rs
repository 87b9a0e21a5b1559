//! Replay orchestrator: rebuild a circuit from journaled edits.
//!
//! Delegates all circuit logic to `logix_core`. No shortcuts, no
//! cached state.

use log::warn;
use logix_core::hashing::canonical_hash;
use logix_core::{Circuit, CircuitError, EditCommand, PropagationLimits};

use crate::error::SessionError;

/// Rebuild a circuit by applying `commands` in order to a fresh one.
///
/// `CyclicGraph` is tolerated: the live session kept the partial
/// mutations of that edit, and replaying it reproduces them. Any other
/// error means the journal is not one a session could have produced.
pub fn rebuild_circuit<'a>(
    commands: impl IntoIterator<Item = &'a EditCommand>,
    limits: PropagationLimits,
) -> Result<Circuit, CircuitError> {
    let mut circuit = Circuit::with_limits(limits);
    for command in commands {
        match circuit.apply(command) {
            Ok(_) => {}
            Err(err @ CircuitError::CyclicGraph { .. }) => {
                warn!("replayed {} hit the cycle guard again: {}", command.name(), err);
            }
            Err(err) => return Err(err),
        }
    }
    Ok(circuit)
}

/// Rebuild and return only the canonical hash.
pub fn rebuild_hash<'a>(
    commands: impl IntoIterator<Item = &'a EditCommand>,
    limits: PropagationLimits,
) -> Result<String, CircuitError> {
    Ok(canonical_hash(rebuild_circuit(commands, limits)?.state()))
}

/// Replay the same commands twice and require identical hashes.
pub fn verify_determinism(
    commands: &[EditCommand],
    limits: PropagationLimits,
) -> Result<String, SessionError> {
    let first = rebuild_hash(commands, limits)?;
    let second = rebuild_hash(commands, limits)?;
    if first != second {
        return Err(SessionError::DeterminismFailure { first, second });
    }
    Ok(first)
}
