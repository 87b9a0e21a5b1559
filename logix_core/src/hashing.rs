//! Logix Core: Canonical Hashing
//!
//! Deterministic canonical serialization + SHA-256 hashing of a circuit
//! state. Two states hash equal iff they carry the same nodes, the same
//! signals and the same edges in the same per-source order.
//!
//! Rules:
//!   - Nodes sorted by id (UTF-8 byte order)
//!   - Edges grouped by source id (sorted); order within a source kept,
//!     since it decides propagation order
//!   - UTF-8 JSON, no whitespace, fixed field order

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::domain::CircuitState;
use crate::CORE_VERSION;

/// Canonical serialization of a CircuitState to UTF-8 JSON bytes.
pub fn canonical_serialize(state: &CircuitState) -> Vec<u8> {
    build_canonical_value(state).to_string().into_bytes()
}

/// SHA-256 of canonical serialization. Lowercase hex string.
pub fn canonical_hash(state: &CircuitState) -> String {
    let digest = Sha256::digest(canonical_serialize(state));
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Field order: core_version, nodes, edges.
fn build_canonical_value(state: &CircuitState) -> Value {
    let nodes: Vec<Value> = state
        .nodes
        .values()
        .map(|n| {
            let mut m = Map::new();
            m.insert("id".to_string(), Value::String(n.id.clone()));
            m.insert("logic".to_string(), Value::String(n.logic.to_string()));
            m.insert(
                "inputs".to_string(),
                Value::Array(n.inputs.iter().copied().map(Value::Bool).collect()),
            );
            m.insert("output".to_string(), Value::Bool(n.output));
            Value::Object(m)
        })
        .collect();

    let edges: Vec<Value> = state
        .edges
        .iter()
        .flat_map(|(source, list)| {
            list.iter().map(move |e| {
                let mut m = Map::new();
                m.insert("source".to_string(), Value::String(source.clone()));
                m.insert("dest".to_string(), Value::String(e.dest.clone()));
                m.insert("slot".to_string(), Value::from(e.slot));
                Value::Object(m)
            })
        })
        .collect();

    let mut root = Map::new();
    root.insert("core_version".to_string(), Value::from(CORE_VERSION));
    root.insert("nodes".to_string(), Value::Array(nodes));
    root.insert("edges".to_string(), Value::Array(edges));
    Value::Object(root)
}
