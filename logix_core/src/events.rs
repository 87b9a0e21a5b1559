//! Logix Core: Edit Commands
//!
//! Edits are pure data: intent and payload only, no logic. The editor
//! issues them; `Circuit::apply` dispatches them.

use serde::{Deserialize, Serialize};

use crate::gates::Logic;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditCommand {
    AddNode {
        id: String,
        logic: Logic,
        num_inputs: usize,
        #[serde(default)]
        output: bool,
    },
    AddEdge {
        source: String,
        dest: String,
        slot: usize,
    },
    ChangeOutput {
        id: String,
        value: bool,
    },
}

impl EditCommand {
    pub fn name(&self) -> &'static str {
        match self {
            EditCommand::AddNode { .. } => "add_node",
            EditCommand::AddEdge { .. } => "add_edge",
            EditCommand::ChangeOutput { .. } => "change_output",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::GateKind;

    #[test]
    fn output_defaults_to_false() {
        let cmd: EditCommand = serde_json::from_str(
            r#"{"command":"add_node","id":"g","logic":{"gate":"and"},"num_inputs":2}"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            EditCommand::AddNode {
                id: "g".to_string(),
                logic: Logic::Gate(GateKind::And),
                num_inputs: 2,
                output: false,
            }
        );
        assert_eq!(cmd.name(), "add_node");
    }

    #[test]
    fn tag_matches_name() {
        let cmd = EditCommand::ChangeOutput { id: "sw".to_string(), value: true };
        let value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(value["command"], cmd.name());
    }
}
