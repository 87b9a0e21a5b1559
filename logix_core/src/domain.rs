//! Logix Core: Core Domain Types
//!
//! Pure data. Nodes keyed by externally chosen id, edges stored as
//! adjacency lists keyed by source id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::gates::Logic;

/// A gate, a forced input (switch, button, constant) or an output sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Node {
    pub id: String,
    pub logic: Logic,
    pub inputs: Vec<bool>, // fixed length, set at creation
    pub output: bool,
}

impl Node {
    /// A node with `num_inputs` false slots. Arity is not checked here.
    pub fn new(id: impl Into<String>, logic: Logic, num_inputs: usize, output: bool) -> Self {
        Self {
            id: id.into(),
            logic,
            inputs: vec![false; num_inputs],
            output,
        }
    }
}

/// Outgoing wire from a source node into one input slot of `dest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Edge {
    pub dest: String,
    pub slot: usize, // 0 = top input, 1 = bottom input
}

/// Complete circuit graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CircuitState {
    pub nodes: BTreeMap<String, Node>,
    /// Source id → edges in insertion order.
    pub edges: BTreeMap<String, Vec<Edge>>,
}

impl CircuitState {
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}
