//! Logix Core: Error Type
//!
//! Every fallible core operation returns `Result<_, CircuitError>`.
//! Errors are reported synchronously and never retried.

use thiserror::Error;

use crate::gates::Logic;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircuitError {
    /// An operation referenced a node id that is not in the graph.
    #[error("unknown node {id:?}")]
    UnknownNode { id: String },

    /// A node was declared with an input count its logic cannot consume.
    #[error("node {id:?} ({logic}) has {actual} inputs, expected {}", .logic.expected_inputs())]
    ArityMismatch {
        id: String,
        logic: Logic,
        actual: usize,
    },

    /// Propagation hit its traversal or depth guard without settling.
    #[error(
        "propagation from {origin:?} did not settle after {traversals} edge traversals ({})",
        describe_cycle(.cycle)
    )]
    CyclicGraph {
        origin: String,
        traversals: usize,
        cycle: Vec<String>,
    },

    /// A node id was added twice.
    #[error("node {id:?} already exists")]
    DuplicateNode { id: String },

    /// An edge targets an input slot the destination does not have.
    #[error("slot {slot} is out of range for node {dest:?} with {arity} inputs")]
    SlotOutOfRange {
        dest: String,
        slot: usize,
        arity: usize,
    },

    /// A gate name did not match any catalogue entry.
    #[error("unknown gate kind {0:?}")]
    UnknownGateKind(String),

    /// An adopted circuit state failed structural validation.
    #[error("invalid circuit state: {0}")]
    InvalidState(String),
}

fn describe_cycle(cycle: &[String]) -> String {
    if cycle.is_empty() {
        "no cycle located".to_string()
    } else {
        format!("cycle: {}", cycle.join(" -> "))
    }
}
