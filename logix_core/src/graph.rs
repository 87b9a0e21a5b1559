//! Logix Core: Graph Store
//!
//! Insert-only node and edge storage plus cycle lookup.
//! No deletion, no mutation of topology once an edge is in.

use std::collections::BTreeMap;

use crate::domain::{CircuitState, Edge, Node};
use crate::error::CircuitError;

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

pub fn node<'a>(state: &'a CircuitState, id: &str) -> Result<&'a Node, CircuitError> {
    state.nodes.get(id).ok_or_else(|| CircuitError::UnknownNode { id: id.to_string() })
}

pub fn node_mut<'a>(state: &'a mut CircuitState, id: &str) -> Result<&'a mut Node, CircuitError> {
    state
        .nodes
        .get_mut(id)
        .ok_or_else(|| CircuitError::UnknownNode { id: id.to_string() })
}

/// Outgoing edges of `id` in insertion order. Empty for unknown ids.
pub fn outgoing<'a>(state: &'a CircuitState, id: &str) -> &'a [Edge] {
    state.edges.get(id).map(Vec::as_slice).unwrap_or(&[])
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Register a node. Arity and id uniqueness are checked; the inputs are
/// stored as given.
pub fn insert_node(state: &mut CircuitState, node: Node) -> Result<(), CircuitError> {
    if !node.logic.accepts_inputs(node.inputs.len()) {
        return Err(CircuitError::ArityMismatch {
            id: node.id,
            logic: node.logic,
            actual: node.inputs.len(),
        });
    }
    if state.nodes.contains_key(&node.id) {
        return Err(CircuitError::DuplicateNode { id: node.id });
    }
    state.nodes.insert(node.id.clone(), node);
    Ok(())
}

/// Append `source → dest` feeding `slot`. Several edges may feed the same
/// slot; whichever is propagated last wins.
pub fn insert_edge(
    state: &mut CircuitState,
    source: &str,
    dest: &str,
    slot: usize,
) -> Result<(), CircuitError> {
    node(state, source)?;
    let arity = node(state, dest)?.inputs.len();
    if slot >= arity {
        return Err(CircuitError::SlotOutOfRange {
            dest: dest.to_string(),
            slot,
            arity,
        });
    }
    state.edges.entry(source.to_string()).or_default().push(Edge {
        dest: dest.to_string(),
        slot,
    });
    Ok(())
}

// ---------------------------------------------------------------------------
// Cycle lookup
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq)]
enum Colour {
    White,
    Grey,
    Black,
}

/// First cycle reachable from `start`, as a closed path
/// (`[a, b, a]`), or `None` when everything downstream is acyclic.
///
/// Iterative DFS with explicit colour tracking; edges are walked in
/// insertion order so the reported cycle is deterministic.
pub fn find_cycle_from(state: &CircuitState, start: &str) -> Option<Vec<String>> {
    let mut colour: BTreeMap<&str, Colour> = BTreeMap::new();
    let mut stack: Vec<(&str, usize)> = vec![(start, 0)];
    colour.insert(start, Colour::Grey);

    while let Some(&(node_id, idx)) = stack.last() {
        let edges = outgoing(state, node_id);
        let Some(edge) = edges.get(idx) else {
            colour.insert(node_id, Colour::Black);
            stack.pop();
            continue;
        };
        if let Some(top) = stack.last_mut() {
            top.1 = idx + 1;
        }

        let next = edge.dest.as_str();
        match colour.get(next).copied().unwrap_or(Colour::White) {
            Colour::Grey => {
                // Back edge: the stack from `next` upward is the cycle.
                let mut cycle: Vec<String> = stack
                    .iter()
                    .map(|(id, _)| *id)
                    .skip_while(|id| *id != next)
                    .map(str::to_string)
                    .collect();
                cycle.push(next.to_string());
                return Some(cycle);
            }
            Colour::White => {
                colour.insert(next, Colour::Grey);
                stack.push((next, 0));
            }
            Colour::Black => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::{GateKind, Logic};

    fn gate(id: &str, kind: GateKind) -> Node {
        Node::new(id, Logic::Gate(kind), kind.arity(), false)
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let mut state = CircuitState::default();
        insert_node(&mut state, gate("g", GateKind::And)).unwrap();
        let err = insert_node(&mut state, gate("g", GateKind::Or)).unwrap_err();
        assert_eq!(err, CircuitError::DuplicateNode { id: "g".to_string() });
        assert_eq!(state.nodes["g"].logic, Logic::Gate(GateKind::And));
    }

    #[test]
    fn insert_rejects_arity_mismatch() {
        let mut state = CircuitState::default();
        let err = insert_node(&mut state, Node::new("n", Logic::Gate(GateKind::Not), 2, false))
            .unwrap_err();
        assert!(matches!(err, CircuitError::ArityMismatch { actual: 2, .. }));
        assert!(state.nodes.is_empty());
    }

    #[test]
    fn edge_requires_known_nodes_and_valid_slot() {
        let mut state = CircuitState::default();
        insert_node(&mut state, Node::new("sw", Logic::Passive, 0, false)).unwrap();
        insert_node(&mut state, gate("not", GateKind::Not)).unwrap();

        assert_eq!(
            insert_edge(&mut state, "ghost", "not", 0),
            Err(CircuitError::UnknownNode { id: "ghost".to_string() })
        );
        assert_eq!(
            insert_edge(&mut state, "sw", "not", 1),
            Err(CircuitError::SlotOutOfRange { dest: "not".to_string(), slot: 1, arity: 1 })
        );
        assert!(matches!(
            insert_edge(&mut state, "not", "sw", 0),
            Err(CircuitError::SlotOutOfRange { arity: 0, .. })
        ));
        insert_edge(&mut state, "sw", "not", 0).unwrap();
        assert_eq!(outgoing(&state, "sw"), &[Edge { dest: "not".to_string(), slot: 0 }]);
        assert_eq!(state.edge_count(), 1);
    }

    #[test]
    fn finds_two_node_cycle() {
        let mut state = CircuitState::default();
        insert_node(&mut state, gate("g1", GateKind::Buffer)).unwrap();
        insert_node(&mut state, gate("g2", GateKind::Not)).unwrap();
        insert_edge(&mut state, "g1", "g2", 0).unwrap();
        insert_edge(&mut state, "g2", "g1", 0).unwrap();

        assert_eq!(
            find_cycle_from(&state, "g1"),
            Some(vec!["g1".to_string(), "g2".to_string(), "g1".to_string()])
        );
    }

    #[test]
    fn diamond_is_not_a_cycle() {
        let mut state = CircuitState::default();
        insert_node(&mut state, Node::new("s", Logic::Passive, 0, false)).unwrap();
        insert_node(&mut state, gate("n", GateKind::Not)).unwrap();
        insert_node(&mut state, gate("x", GateKind::Xor)).unwrap();
        insert_edge(&mut state, "s", "n", 0).unwrap();
        insert_edge(&mut state, "n", "x", 0).unwrap();
        insert_edge(&mut state, "s", "x", 1).unwrap();

        assert_eq!(find_cycle_from(&state, "s"), None);
    }
}
