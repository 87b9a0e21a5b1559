//! Session: one editor's circuit plus the journal of its edits.
//!
//! Apply-before-journal order:
//!   1. circuit.apply(command)  : may fail
//!   2. journal.append(entry)   : only if step 1 changed the circuit
//!
//! Rejected edits (unknown node, duplicate id, arity, slot) leave the
//! circuit untouched and are not journaled. `CyclicGraph` aborts keep
//! their partial mutations, so those edits are journaled before the
//! error is returned.

use log::debug;
use logix_core::hashing::canonical_hash;
use logix_core::{Circuit, CircuitError, CircuitState, EditCommand, PropagationLimits};

use crate::drift::{compare_states, DriftReport};
use crate::error::SessionError;
use crate::journal::{Journal, JournalEntry};
use crate::replay;

pub struct Session {
    session_id: String,
    circuit: Circuit,
    journal: Journal,
}

impl Session {
    pub fn new(session_id: &str, limits: PropagationLimits) -> Self {
        Self {
            session_id: session_id.to_string(),
            circuit: Circuit::with_limits(limits),
            journal: Journal::new(),
        }
    }

    /// Apply one edit and journal it.
    ///
    /// Returns what changed, for the editor to redraw.
    pub fn apply(&mut self, command: EditCommand) -> Result<DriftReport, SessionError> {
        let before = self.circuit.state().clone();
        let outcome = self.circuit.apply(&command);

        match outcome {
            Ok(_) | Err(CircuitError::CyclicGraph { .. }) => {
                let sequence = self.journal.last_sequence() + 1;
                debug!("{}: journaled #{} {}", self.session_id, sequence, command.name());
                self.journal.append(JournalEntry { sequence, command })?;
            }
            Err(_) => {}
        }

        outcome?;
        Ok(compare_states(&before, self.circuit.state()))
    }

    /// Apply edits in order, stopping at the first failure.
    pub fn apply_sequence(
        &mut self,
        commands: impl IntoIterator<Item = EditCommand>,
    ) -> Result<&CircuitState, SessionError> {
        for command in commands {
            self.apply(command)?;
        }
        Ok(self.circuit.state())
    }

    /// Rebuild the circuit from the journal and replace the live one.
    ///
    /// Returns the rebuilt state's canonical hash.
    pub fn replay_full(&mut self) -> Result<String, SessionError> {
        let limits = *self.circuit.limits();
        let rebuilt = replay::rebuild_circuit(self.journal.commands(), limits)?;
        let hash = canonical_hash(rebuilt.state());
        self.circuit = rebuilt;
        Ok(hash)
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn state(&self) -> &CircuitState {
        self.circuit.state()
    }

    pub fn current_hash(&self) -> String {
        canonical_hash(self.circuit.state())
    }

    pub fn current_sequence(&self) -> u64 {
        self.journal.last_sequence()
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}
