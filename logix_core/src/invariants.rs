//! Logix Core: Invariant Checks
//!
//! Structural validation of a circuit state handed in from outside.
//! Cycles are not checked: they are legal topology and only fail when
//! a propagation runs through them.

use crate::domain::CircuitState;
use crate::error::CircuitError;

/// Run every check. Returns the first failure.
pub fn validate_invariants(state: &CircuitState) -> Result<(), CircuitError> {
    check_node_keys(state)?;
    check_arity(state)?;
    check_edge_refs(state)?;
    check_edge_slots(state)?;
    Ok(())
}

/// Map key and node id must agree.
fn check_node_keys(state: &CircuitState) -> Result<(), CircuitError> {
    for (key, node) in &state.nodes {
        if *key != node.id {
            return Err(CircuitError::InvalidState(format!(
                "node stored under {:?} has id {:?}",
                key, node.id
            )));
        }
    }
    Ok(())
}

fn check_arity(state: &CircuitState) -> Result<(), CircuitError> {
    for node in state.nodes.values() {
        if !node.logic.accepts_inputs(node.inputs.len()) {
            return Err(CircuitError::ArityMismatch {
                id: node.id.clone(),
                logic: node.logic,
                actual: node.inputs.len(),
            });
        }
    }
    Ok(())
}

/// Both ends of every edge must exist.
fn check_edge_refs(state: &CircuitState) -> Result<(), CircuitError> {
    for (source, edges) in &state.edges {
        if !state.nodes.contains_key(source) {
            return Err(CircuitError::UnknownNode { id: source.clone() });
        }
        for edge in edges {
            if !state.nodes.contains_key(&edge.dest) {
                return Err(CircuitError::UnknownNode { id: edge.dest.clone() });
            }
        }
    }
    Ok(())
}

fn check_edge_slots(state: &CircuitState) -> Result<(), CircuitError> {
    for edge in state.edges.values().flatten() {
        let arity = state.nodes.get(&edge.dest).map_or(0, |n| n.inputs.len());
        if edge.slot >= arity {
            return Err(CircuitError::SlotOutOfRange {
                dest: edge.dest.clone(),
                slot: edge.slot,
                arity,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Edge, Node};
    use crate::gates::{GateKind, Logic};

    fn valid_state() -> CircuitState {
        let mut state = CircuitState::default();
        state.nodes.insert("sw".to_string(), Node::new("sw", Logic::Passive, 0, false));
        state
            .nodes
            .insert("not".to_string(), Node::new("not", Logic::Gate(GateKind::Not), 1, true));
        state
            .edges
            .insert("sw".to_string(), vec![Edge { dest: "not".to_string(), slot: 0 }]);
        state
    }

    #[test]
    fn valid_state_passes() {
        assert_eq!(validate_invariants(&valid_state()), Ok(()));
    }

    #[test]
    fn mismatched_key_is_rejected() {
        let mut state = valid_state();
        let node = Node::new("other", Logic::Passive, 0, false);
        state.nodes.insert("lamp".to_string(), node);
        assert!(matches!(validate_invariants(&state), Err(CircuitError::InvalidState(_))));
    }

    #[test]
    fn dangling_edge_is_rejected() {
        let mut state = valid_state();
        state
            .edges
            .insert("not".to_string(), vec![Edge { dest: "ghost".to_string(), slot: 0 }]);
        assert_eq!(
            validate_invariants(&state),
            Err(CircuitError::UnknownNode { id: "ghost".to_string() })
        );
    }

    #[test]
    fn bad_slot_is_rejected() {
        let mut state = valid_state();
        state
            .edges
            .insert("sw".to_string(), vec![Edge { dest: "not".to_string(), slot: 1 }]);
        assert!(matches!(
            validate_invariants(&state),
            Err(CircuitError::SlotOutOfRange { slot: 1, arity: 1, .. })
        ));
    }

    #[test]
    fn bad_arity_is_rejected() {
        let mut state = valid_state();
        if let Some(node) = state.nodes.get_mut("not") {
            node.inputs.push(false);
        }
        assert!(matches!(validate_invariants(&state), Err(CircuitError::ArityMismatch { .. })));
    }
}
