//! Error types for the anytext-node library.
//!
//! Every failure raised while processing a single item is recoverable: under
//! continue-on-fail the batch loop folds it into an error output item and
//! moves on, and under fail-fast the same error aborts the whole `execute`
//! call. Only [`NodeError::InvalidParameter`] is raised before any item is
//! touched — bad configuration never produces a partial batch.
//!
//! The one hard contract on message text: a missing attachment always names
//! the property that was looked up, so a user reading the error output knows
//! which parameter to fix.

use thiserror::Error;

/// All errors returned by the anytext-node library.
#[derive(Debug, Clone, Error)]
pub enum NodeError {
    /// The named binary attachment is absent on the item.
    #[error("No binary data found for property \"{property}\" on item {item_index}")]
    MissingBinaryData { property: String, item_index: usize },

    /// The attachment exists but its base64 payload could not be decoded.
    ///
    /// Same recoverability class as [`NodeError::MissingBinaryData`]: the
    /// host promised a well-formed attachment and did not deliver one.
    #[error("Binary property \"{property}\" on item {item_index} is not valid base64: {detail}")]
    BinaryDecodeFailed {
        property: String,
        item_index: usize,
        detail: String,
    },

    /// The external extraction routine failed. The message is passed through
    /// opaque, never reinterpreted.
    #[error("Text extraction failed for item {item_index}: {message}")]
    ExtractionFailed { item_index: usize, message: String },

    /// Configuration validation failed.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
