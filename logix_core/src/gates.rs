//! Logix Core: Gate Logic Table
//!
//! Fixed mapping from gate kind to (arity, boolean function).
//! Resolved once when a node is created; never looked up by string
//! during propagation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CircuitError;

// ---------------------------------------------------------------------------
// Gate kinds
// ---------------------------------------------------------------------------

/// The eight gate kinds the editor offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    Or,
    And,
    Not,
    Nor,
    Nand,
    Xor,
    Xnor,
    Buffer,
}

impl GateKind {
    /// Every gate kind, in catalogue order.
    pub const ALL: [GateKind; 8] = [
        GateKind::Or,
        GateKind::And,
        GateKind::Not,
        GateKind::Nor,
        GateKind::Nand,
        GateKind::Xor,
        GateKind::Xnor,
        GateKind::Buffer,
    ];

    /// Number of input slots the gate consumes.
    pub const fn arity(self) -> usize {
        match self {
            GateKind::Not | GateKind::Buffer => 1,
            _ => 2,
        }
    }

    /// Lowercase catalogue name (`"nand"`, `"buffer"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            GateKind::Or => "or",
            GateKind::And => "and",
            GateKind::Not => "not",
            GateKind::Nor => "nor",
            GateKind::Nand => "nand",
            GateKind::Xor => "xor",
            GateKind::Xnor => "xnor",
            GateKind::Buffer => "buffer",
        }
    }

    /// Apply the gate's boolean function.
    ///
    /// Returns `None` when `inputs.len()` differs from [`GateKind::arity`].
    pub fn evaluate(self, inputs: &[bool]) -> Option<bool> {
        match (self, inputs) {
            (GateKind::Not, [a]) => Some(!a),
            (GateKind::Buffer, [a]) => Some(*a),
            (GateKind::Or, [a, b]) => Some(*a || *b),
            (GateKind::And, [a, b]) => Some(*a && *b),
            (GateKind::Nor, [a, b]) => Some(!(*a || *b)),
            (GateKind::Nand, [a, b]) => Some(!(*a && *b)),
            (GateKind::Xor, [a, b]) => Some(a != b),
            (GateKind::Xnor, [a, b]) => Some(a == b),
            _ => None,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GateKind {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CircuitError::UnknownGateKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Node logic
// ---------------------------------------------------------------------------

/// What a node computes: nothing (switches, buttons, constants,
/// indicators) or a gate function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Logic {
    Passive,
    Gate(GateKind),
}

impl Logic {
    /// Whether a node of this logic may be created with `num_inputs` slots.
    ///
    /// Passive nodes take 0 slots (sources) or 1 slot (output sinks).
    pub const fn accepts_inputs(self, num_inputs: usize) -> bool {
        match self {
            Logic::Passive => num_inputs <= 1,
            Logic::Gate(kind) => kind.arity() == num_inputs,
        }
    }

    /// Human-readable description of the accepted input counts.
    pub fn expected_inputs(self) -> String {
        match self {
            Logic::Passive => "0 or 1".to_string(),
            Logic::Gate(kind) => kind.arity().to_string(),
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Logic::Passive => f.write_str("passive"),
            Logic::Gate(kind) => kind.fmt(f),
        }
    }
}

impl From<GateKind> for Logic {
    fn from(kind: GateKind) -> Self {
        Logic::Gate(kind)
    }
}
