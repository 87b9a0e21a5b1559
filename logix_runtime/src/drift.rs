//! Signal drift: per-node differences between two circuit states.
//!
//! The editor compares the state before and after an edit to decide
//! which wires to recolor and which indicators to swap.

use logix_core::CircuitState;

/// Structured state comparison. All id lists are sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriftReport {
    pub node_count_a: usize,
    pub node_count_b: usize,
    pub edge_count_a: usize,
    pub edge_count_b: usize,
    pub added_nodes: Vec<String>,
    /// Output went false -> true.
    pub raised: Vec<String>,
    /// Output went true -> false.
    pub lowered: Vec<String>,
    /// Input vector differs, output may or may not.
    pub inputs_changed: Vec<String>,
}

impl DriftReport {
    /// Nodes whose outgoing wires need recoloring.
    pub fn toggled(&self) -> impl Iterator<Item = &str> {
        self.raised.iter().chain(&self.lowered).map(String::as_str)
    }

    pub fn is_quiet(&self) -> bool {
        self.added_nodes.is_empty()
            && self.raised.is_empty()
            && self.lowered.is_empty()
            && self.inputs_changed.is_empty()
            && self.edge_count_a == self.edge_count_b
    }
}

/// Compare `state_a` (before) with `state_b` (after).
///
/// Nodes are never deleted, so only additions are listed.
pub fn compare_states(state_a: &CircuitState, state_b: &CircuitState) -> DriftReport {
    let mut report = DriftReport {
        node_count_a: state_a.nodes.len(),
        node_count_b: state_b.nodes.len(),
        edge_count_a: state_a.edge_count(),
        edge_count_b: state_b.edge_count(),
        ..DriftReport::default()
    };

    for (id, after) in &state_b.nodes {
        let Some(before) = state_a.nodes.get(id) else {
            report.added_nodes.push(id.clone());
            continue;
        };
        match (before.output, after.output) {
            (false, true) => report.raised.push(id.clone()),
            (true, false) => report.lowered.push(id.clone()),
            _ => {}
        }
        if before.inputs != after.inputs {
            report.inputs_changed.push(id.clone());
        }
    }

    report
}
