//! Append-only edit journal, held in memory.
//!
//! Rules:
//!   - Strict append only: no mutation, no deletion, no reordering
//!   - Sequence strictly increasing from 1, no gaps
//!   - Only edits that changed the circuit are journaled (see `Session`)

use logix_core::EditCommand;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// One journaled edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub sequence: u64,
    pub command: EditCommand,
}

#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, validating strict sequence ordering.
    pub fn append(&mut self, entry: JournalEntry) -> Result<(), SessionError> {
        let expected = self.last_sequence() + 1;
        if entry.sequence != expected {
            return Err(SessionError::SequenceViolation {
                expected,
                got: entry.sequence,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Sequence of the last entry, 0 when empty.
    pub fn last_sequence(&self) -> u64 {
        self.entries.last().map_or(0, |e| e.sequence)
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Commands in sequence order.
    pub fn commands(&self) -> impl Iterator<Item = &EditCommand> {
        self.entries.iter().map(|e| &e.command)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(sequence: u64) -> JournalEntry {
        JournalEntry {
            sequence,
            command: EditCommand::ChangeOutput {
                id: "sw".to_string(),
                value: sequence % 2 == 0,
            },
        }
    }

    #[test]
    fn appends_in_order() {
        let mut journal = Journal::new();
        journal.append(entry(1)).unwrap();
        journal.append(entry(2)).unwrap();
        assert_eq!(journal.last_sequence(), 2);
        assert_eq!(journal.len(), 2);
        assert_eq!(journal.commands().count(), 2);
    }

    #[test]
    fn rejects_gaps_and_repeats() {
        let mut journal = Journal::new();
        assert_eq!(
            journal.append(entry(2)),
            Err(SessionError::SequenceViolation { expected: 1, got: 2 })
        );
        journal.append(entry(1)).unwrap();
        assert_eq!(
            journal.append(entry(1)),
            Err(SessionError::SequenceViolation { expected: 2, got: 1 })
        );
        assert_eq!(journal.len(), 1);
    }
}
