//! # anytext-node
//!
//! A workflow node that extracts text from binary attachments.
//!
//! ## What it does
//!
//! For each item in a batch, the node locates a named binary attachment,
//! decodes it from its base64 transport encoding, hands the raw bytes to a
//! text-extraction backend, and emits a new item carrying the extracted
//! text alongside the original attachments. Format detection and parsing
//! belong entirely to the backend behind the [`TextExtractor`] seam — this
//! crate is the adapter between the host's item contract and that one call.
//!
//! ## Data Flow
//!
//! ```text
//! host batch
//!  │
//!  ├─ 1. Lookup   find the attachment named by binaryPropertyName
//!  ├─ 2. Decode   base64 → raw byte buffer
//!  ├─ 3. Extract  TextExtractor::from_buffer (the sole await point)
//!  └─ 4. Emit     { json: { extractedText }, binary: <unchanged> }
//! ```
//!
//! Items are processed strictly sequentially, in input order, with no state
//! carried between them.
//!
//! ## Quick Start
//!
//! ```rust
//! use anytext_node::{execute, BinaryAttachment, ExecutionItem, ReaderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let item = ExecutionItem::with_attachment(
//!         "data",
//!         BinaryAttachment::from_bytes(b"hello world"),
//!     );
//!     let branches = execute(&[item], &ReaderConfig::default()).await?;
//!     assert_eq!(branches[0][0].json["extractedText"], "hello world");
//!     Ok(())
//! }
//! ```
//!
//! ## Failure modes
//!
//! A missing attachment, an undecodable payload, or an extraction failure
//! is recoverable per item: with [`ReaderConfig::continue_on_fail`] set, the
//! affected item's output becomes `{ json: { error: <message> } }` and the
//! rest of the batch still runs. Without it, the first failure aborts the
//! whole call and the host sees a node execution failure.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `anytext` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod descriptor;
pub mod error;
pub mod execute;
pub mod extractor;
pub mod item;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ReaderConfig, ReaderConfigBuilder, DEFAULT_BINARY_PROPERTY};
pub use descriptor::{descriptor, NodeDescriptor, NodeDefaults, NodeProperty};
pub use error::NodeError;
pub use execute::execute;
pub use extractor::{ExtractorError, PlainTextExtractor, TextExtractor};
pub use item::{BinaryAttachment, ExecutionItem};
