//! Logix Core: Propagation Engine
//!
//! Depth-first push of a changed output along outgoing edges.
//!
//! Semantics:
//!   - No memoization, no topological order. A node reachable through
//!     several paths is recomputed once per path; downstream nodes may
//!     see transient values until the last path has been walked.
//!   - Every visited gate is recomputed and every visited node is
//!     recursed into, whether or not its output changed.
//!   - Native recursion is replaced by an explicit stack of
//!     (node, next edge index) frames. On an acyclic graph the stack is
//!     a simple path, so it never holds more frames than there are
//!     nodes; a push past that bound means a node is on the stack twice.
//!     That bound and the traversal cap convert a cycle into
//!     `CircuitError::CyclicGraph`.
//!   - Mutations made before a guard trips are kept.

use log::{trace, warn};

use crate::config::PropagationLimits;
use crate::domain::{CircuitState, Node};
use crate::error::CircuitError;
use crate::gates::Logic;
use crate::graph;

/// Counters for one completed propagation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Edges walked, counting revisits.
    pub traversals: usize,
    /// Deepest stack reached, the origin frame included.
    pub max_depth: usize,
}

/// Push `origin`'s output to everything downstream of it.
pub fn propagate(
    state: &mut CircuitState,
    origin: &str,
    limits: &PropagationLimits,
) -> Result<PropagationReport, CircuitError> {
    graph::node(state, origin)?;

    let mut report = PropagationReport {
        traversals: 0,
        max_depth: 1,
    };
    let mut stack: Vec<(String, usize)> = vec![(origin.to_string(), 0)];

    while let Some((source, idx)) = stack.last_mut() {
        let Some(edge) = graph::outgoing(state, source).get(*idx).cloned() else {
            stack.pop();
            continue;
        };
        *idx += 1;

        let value = graph::node(state, source)?.output;
        trace!("{} -> {}[{}] = {}", source, edge.dest, edge.slot, value);

        report.traversals += 1;
        if report.traversals > limits.max_traversals || stack.len() >= state.nodes.len() {
            return Err(guard_tripped(state, origin, report.traversals));
        }

        let dest = graph::node_mut(state, &edge.dest)?;
        apply_input(dest, edge.slot, value)?;

        stack.push((edge.dest, 0));
        report.max_depth = report.max_depth.max(stack.len());
    }

    Ok(report)
}

/// Write `value` into `slot` and recompute the node's output.
///
/// Gates run their table function. Passive sinks with a single slot
/// mirror it, so indicators can be read from `output`. Passive sources
/// have no slots and are left untouched.
pub fn apply_input(node: &mut Node, slot: usize, value: bool) -> Result<(), CircuitError> {
    if let Some(input) = node.inputs.get_mut(slot) {
        *input = value;
    }

    match node.logic {
        Logic::Gate(kind) => {
            node.output = kind.evaluate(&node.inputs).ok_or_else(|| CircuitError::ArityMismatch {
                id: node.id.clone(),
                logic: node.logic,
                actual: node.inputs.len(),
            })?;
        }
        Logic::Passive => {
            if let [only] = node.inputs.as_slice() {
                node.output = *only;
            }
        }
    }
    Ok(())
}

fn guard_tripped(state: &CircuitState, origin: &str, traversals: usize) -> CircuitError {
    let cycle = graph::find_cycle_from(state, origin).unwrap_or_default();
    warn!(
        "propagation from {:?} aborted after {} traversals; cycle: {:?}",
        origin, traversals, cycle
    );
    CircuitError::CyclicGraph {
        origin: origin.to_string(),
        traversals,
        cycle,
    }
}
