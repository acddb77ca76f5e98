//! The node's entry point: run one batch of items through text extraction.
//!
//! Processing is strictly sequential and stateless across items — each
//! iteration owns its decoded buffer and extracted text, and item *i+1* is
//! not touched until item *i*'s extraction call has settled. The only
//! suspension point is the await on the extraction backend; there is no
//! shared mutable state and therefore no synchronisation.
//!
//! Failure propagation follows the host's two modes:
//!
//! * **Fail fast** (default) — the first per-item error aborts the call.
//!   No partial batch is returned; the host surfaces the error as a node
//!   execution failure.
//! * **Continue on fail** — the failing item's slot in the output carries
//!   `{ json: { error: <message> } }` and the rest of the batch is still
//!   attempted, so output length always equals input length.

use crate::config::ReaderConfig;
use crate::error::NodeError;
use crate::extractor::TextExtractor;
use crate::item::ExecutionItem;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Process a batch of items, extracting text from the configured binary
/// attachment of each.
///
/// Returns the host's branch shape: exactly one output branch, with one
/// output item per input item (in input order). An empty batch yields one
/// empty branch.
///
/// # Errors
/// With `continue_on_fail` disabled, the first item failure is returned as
/// `Err` and nothing is produced for the remaining items.
pub async fn execute(
    items: &[ExecutionItem],
    config: &ReaderConfig,
) -> Result<Vec<Vec<ExecutionItem>>, NodeError> {
    if config.binary_property_name.is_empty() {
        return Err(NodeError::InvalidParameter(
            "binary property name must not be empty".into(),
        ));
    }

    let extractor = config.resolve_extractor();
    info!(
        items = items.len(),
        property = %config.binary_property_name,
        continue_on_fail = config.continue_on_fail,
        "Starting text extraction batch"
    );

    let mut branch: Vec<ExecutionItem> = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        match process_item(item, index, &extractor, config).await {
            Ok(output) => branch.push(output),
            Err(err) if config.continue_on_fail => {
                warn!(item = index, error = %err, "Item failed, continuing");
                branch.push(ExecutionItem::error(err.to_string()));
            }
            Err(err) => return Err(err),
        }
    }

    info!(items = branch.len(), "Batch complete");
    Ok(vec![branch])
}

/// Read, decode, and extract one item; build its output record.
async fn process_item(
    item: &ExecutionItem,
    index: usize,
    extractor: &Arc<dyn TextExtractor>,
    config: &ReaderConfig,
) -> Result<ExecutionItem, NodeError> {
    let property = &config.binary_property_name;

    let attachment = item
        .attachment(property)
        .ok_or_else(|| NodeError::MissingBinaryData {
            property: property.clone(),
            item_index: index,
        })?;

    let buffer = attachment
        .decode()
        .map_err(|e| NodeError::BinaryDecodeFailed {
            property: property.clone(),
            item_index: index,
            detail: e.to_string(),
        })?;

    debug!(item = index, bytes = buffer.len(), "Decoded attachment");

    let text = extractor
        .from_buffer(&buffer)
        .await
        .map_err(|e| NodeError::ExtractionFailed {
            item_index: index,
            message: e.to_string(),
        })?;

    debug!(item = index, chars = text.len(), "Extracted text");

    // The input's attachments travel downstream untouched.
    Ok(ExecutionItem::extracted(text, item.binary.clone()))
}
