#![forbid(unsafe_code)]

//! Logix Core: circuit graph and signal propagation.
//!
//! Nodes (gates, forced inputs, output sinks) keyed by opaque id,
//! directed edges into numbered input slots, and depth-first
//! propagation of changed outputs. Single-threaded and synchronous.

/// Bumped when canonical serialization or propagation semantics change.
pub const CORE_VERSION: u32 = 1;

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod events;
pub mod gates;
pub mod graph;
pub mod hashing;
pub mod invariants;
pub mod propagation;

pub use config::PropagationLimits;
pub use domain::{CircuitState, Edge, Node};
pub use engine::Circuit;
pub use error::CircuitError;
pub use events::EditCommand;
pub use gates::{GateKind, Logic};
pub use propagation::PropagationReport;
