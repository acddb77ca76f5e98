//! Node registration metadata.
//!
//! The host's node registry consumes a JSON description of each node —
//! display name, grouping, version, configurable properties, and connection
//! counts. Nothing here is behavioral; [`descriptor()`] exists so the
//! registry entry and the code that honours it live in the same crate and
//! cannot drift apart silently.

use serde::{Deserialize, Serialize};

/// Registry description of a node type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
    pub display_name: String,
    pub name: String,
    pub group: Vec<String>,
    pub version: u32,
    pub description: String,
    pub defaults: NodeDefaults,
    /// Input connection names; always exactly one `"main"` for this node.
    pub inputs: Vec<String>,
    /// Output connection names; always exactly one `"main"` for this node.
    pub outputs: Vec<String>,
    pub properties: Vec<NodeProperty>,
}

/// Defaults applied when the node is dropped onto a workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDefaults {
    pub name: String,
}

/// One configurable parameter exposed in the host UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    pub display_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub default: String,
    pub placeholder: String,
    pub description: String,
}

/// The Any Text Reader registration: one string parameter
/// (`binaryPropertyName`, default `"data"`), one input, one output.
pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor {
        display_name: "Any Text Reader".to_string(),
        name: "anyTextReader".to_string(),
        group: vec!["transform".to_string()],
        version: 1,
        description: "Reads binary content and extracts text from it".to_string(),
        defaults: NodeDefaults {
            name: "Any Text Reader".to_string(),
        },
        inputs: vec!["main".to_string()],
        outputs: vec!["main".to_string()],
        properties: vec![NodeProperty {
            display_name: "Binary Property Name".to_string(),
            name: "binaryPropertyName".to_string(),
            kind: "string".to_string(),
            default: "data".to_string(),
            placeholder: "Name of the binary property to process".to_string(),
            description: "The name of the binary property containing the file data".to_string(),
        }],
    }
}
