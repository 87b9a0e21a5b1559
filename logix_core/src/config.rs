//! Logix Core: Propagation Limits
//!
//! Guard that turns a non-settling propagation into
//! `CircuitError::CyclicGraph` instead of a hang.
//!
//! Depth needs no knob: on an acyclic graph the work stack is a simple
//! path, so it can never hold more frames than there are nodes.
//! `propagation` trips on that bound directly.

use serde::{Deserialize, Serialize};

/// Default cap on edge traversals for a single propagation run.
pub const DEFAULT_MAX_TRAVERSALS: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PropagationLimits {
    /// Edge traversals allowed per run. Reconvergent fan-out revisits
    /// nodes once per path, so this must cover the number of paths,
    /// not the number of edges.
    pub max_traversals: usize,
}

impl Default for PropagationLimits {
    fn default() -> Self {
        Self {
            max_traversals: DEFAULT_MAX_TRAVERSALS,
        }
    }
}
