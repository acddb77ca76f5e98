//! Item and attachment records exchanged with the workflow host.
//!
//! An [`ExecutionItem`] is one unit of work: a `json` mapping plus optional
//! named binary attachments. Items arrive from the host as JSON, so every
//! type here round-trips through serde with the field names the host uses.
//!
//! Input items are never mutated. The node only constructs fresh output
//! items, sharing the input's `binary` map by clone so the original payload
//! travels downstream unchanged.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One unit of data flowing through the workflow engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionItem {
    /// Arbitrary JSON payload attached to the item.
    #[serde(default)]
    pub json: Map<String, Value>,

    /// Named binary attachments, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<BTreeMap<String, BinaryAttachment>>,
}

impl ExecutionItem {
    /// An item with an empty JSON payload and no attachments.
    pub fn empty() -> Self {
        Self {
            json: Map::new(),
            binary: None,
        }
    }

    /// An item carrying a single binary attachment under `property`.
    pub fn with_attachment(property: impl Into<String>, attachment: BinaryAttachment) -> Self {
        let mut binary = BTreeMap::new();
        binary.insert(property.into(), attachment);
        Self {
            json: Map::new(),
            binary: Some(binary),
        }
    }

    /// Look up a named attachment on this item.
    pub fn attachment(&self, property: &str) -> Option<&BinaryAttachment> {
        self.binary.as_ref().and_then(|b| b.get(property))
    }

    /// Successful output shape: `json.extractedText` plus the input item's
    /// attachments, shared unchanged.
    pub fn extracted(text: String, binary: Option<BTreeMap<String, BinaryAttachment>>) -> Self {
        let mut json = Map::new();
        json.insert("extractedText".to_string(), Value::String(text));
        Self { json, binary }
    }

    /// Recovered-failure output shape: `json.error` carrying the message,
    /// no attachments.
    pub fn error(message: String) -> Self {
        let mut json = Map::new();
        json.insert("error".to_string(), Value::String(message));
        Self { json, binary: None }
    }
}

/// A named, base64-encoded byte payload attached to an item.
///
/// The metadata fields are carried for downstream consumers but never
/// inspected by this node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryAttachment {
    /// Base64-encoded file content.
    pub data: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl BinaryAttachment {
    /// Wrap raw bytes as a transport-encoded attachment.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: STANDARD.encode(bytes),
            mime_type: None,
            file_name: None,
            file_extension: None,
            file_size: Some(bytes.len() as u64),
        }
    }

    /// Set the MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Set the original file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Decode the base64 payload back into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.data)
    }
}
