//! Logix Core: Circuit
//!
//! The in-process API the editor drives: create node, create edge,
//! force an output, read node state back. Storage is delegated to
//! `graph`, signal flow to `propagation`.
//!
//! Every call runs to completion before returning. On
//! `CircuitError::CyclicGraph` the mutations already applied are kept.

use log::debug;

use crate::config::PropagationLimits;
use crate::domain::{CircuitState, Edge, Node};
use crate::error::CircuitError;
use crate::events::EditCommand;
use crate::gates::{GateKind, Logic};
use crate::graph;
use crate::invariants::validate_invariants;
use crate::propagation::{self, PropagationReport};

#[derive(Debug, Clone, Default)]
pub struct Circuit {
    state: CircuitState,
    limits: PropagationLimits,
}

impl Circuit {
    /// An empty circuit with default propagation limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: PropagationLimits) -> Self {
        Self {
            state: CircuitState::default(),
            limits,
        }
    }

    /// Adopt a state built elsewhere, after invariant validation.
    /// Signals are taken as-is; nothing is propagated.
    pub fn from_state(state: CircuitState, limits: PropagationLimits) -> Result<Self, CircuitError> {
        validate_invariants(&state)?;
        Ok(Self { state, limits })
    }

    // -- Edits ---------------------------------------------------------------

    /// Register a node with `num_inputs` false input slots.
    pub fn add_node(
        &mut self,
        id: &str,
        logic: Logic,
        num_inputs: usize,
        output: bool,
    ) -> Result<(), CircuitError> {
        graph::insert_node(&mut self.state, Node::new(id, logic, num_inputs, output))?;
        debug!("added node {:?} ({}, {} inputs, output={})", id, logic, num_inputs, output);
        Ok(())
    }

    /// A gate with the arity its kind requires.
    pub fn add_gate(&mut self, id: &str, kind: GateKind) -> Result<(), CircuitError> {
        self.add_node(id, Logic::Gate(kind), kind.arity(), false)
    }

    /// A switch, button or constant: no inputs, forced output.
    pub fn add_input(&mut self, id: &str, output: bool) -> Result<(), CircuitError> {
        self.add_node(id, Logic::Passive, 0, output)
    }

    /// An indicator such as a light bulb: one input, mirrored to output.
    pub fn add_output(&mut self, id: &str) -> Result<(), CircuitError> {
        self.add_node(id, Logic::Passive, 1, false)
    }

    /// Wire `source` into `slot` of `dest`, then propagate from `source`
    /// so `dest` reflects the current value immediately.
    pub fn add_edge(
        &mut self,
        source: &str,
        dest: &str,
        slot: usize,
    ) -> Result<PropagationReport, CircuitError> {
        graph::insert_edge(&mut self.state, source, dest, slot)?;
        debug!("added edge {:?} -> {:?}[{}]", source, dest, slot);
        propagation::propagate(&mut self.state, source, &self.limits)
    }

    /// Force `id`'s output and propagate from it.
    ///
    /// Meant for passive input nodes. Forcing a gate leaves it out of
    /// step with its own inputs until something upstream changes.
    pub fn change_output(&mut self, id: &str, value: bool) -> Result<PropagationReport, CircuitError> {
        let node = graph::node_mut(&mut self.state, id)?;
        node.output = value;
        debug!("forced {:?} output to {}", id, value);
        propagation::propagate(&mut self.state, id, &self.limits)
    }

    /// Dispatch one edit command.
    pub fn apply(&mut self, command: &EditCommand) -> Result<PropagationReport, CircuitError> {
        match command {
            EditCommand::AddNode {
                id,
                logic,
                num_inputs,
                output,
            } => self
                .add_node(id, *logic, *num_inputs, *output)
                .map(|()| PropagationReport::default()),
            EditCommand::AddEdge { source, dest, slot } => self.add_edge(source, dest, *slot),
            EditCommand::ChangeOutput { id, value } => self.change_output(id, *value),
        }
    }

    // -- Reads ---------------------------------------------------------------

    pub fn node(&self, id: &str) -> Result<&Node, CircuitError> {
        graph::node(&self.state, id)
    }

    pub fn output(&self, id: &str) -> Result<bool, CircuitError> {
        Ok(self.node(id)?.output)
    }

    pub fn inputs(&self, id: &str) -> Result<&[bool], CircuitError> {
        Ok(&self.node(id)?.inputs)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.state.nodes.contains_key(id)
    }

    /// All nodes, sorted by id.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.state.nodes.values()
    }

    pub fn edges_from(&self, id: &str) -> &[Edge] {
        graph::outgoing(&self.state, id)
    }

    pub fn state(&self) -> &CircuitState {
        &self.state
    }

    pub fn into_state(self) -> CircuitState {
        self.state
    }

    pub fn limits(&self) -> &PropagationLimits {
        &self.limits
    }
}
