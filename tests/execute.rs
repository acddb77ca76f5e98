//! Behavior tests for the node's `execute` entry point.
//!
//! Backed by two test extractors: an echo backend that returns the buffer
//! decoded as UTF-8 (deterministic, so idempotence is checkable) and a
//! failing backend that rejects every buffer with a fixed message.

use anytext_node::{
    execute, BinaryAttachment, ExecutionItem, ExtractorError, NodeError, ReaderConfig,
    TextExtractor,
};
use async_trait::async_trait;
use std::sync::Arc;

// ── Test extractors ──────────────────────────────────────────────────────

/// Deterministic backend: text out equals bytes in.
struct EchoExtractor;

#[async_trait]
impl TextExtractor for EchoExtractor {
    async fn from_buffer(&self, buffer: &[u8]) -> Result<String, ExtractorError> {
        String::from_utf8(buffer.to_vec()).map_err(|e| ExtractorError::Malformed(e.to_string()))
    }
}

/// Backend that fails every call with an opaque message.
struct BrokenExtractor;

#[async_trait]
impl TextExtractor for BrokenExtractor {
    async fn from_buffer(&self, _buffer: &[u8]) -> Result<String, ExtractorError> {
        Err(ExtractorError::Failed("library exploded".into()))
    }
}

fn echo_config() -> ReaderConfig {
    ReaderConfig::builder()
        .extractor(Arc::new(EchoExtractor))
        .build()
        .expect("valid config")
}

fn text_item(property: &str, content: &str) -> ExecutionItem {
    ExecutionItem::with_attachment(property, BinaryAttachment::from_bytes(content.as_bytes()))
}

// ── Happy path ───────────────────────────────────────────────────────────

#[tokio::test]
async fn hello_world_example() {
    let item = text_item("data", "hello world");
    let branches = execute(&[item.clone()], &echo_config()).await.expect("ok");

    assert_eq!(branches.len(), 1, "exactly one output branch");
    assert_eq!(branches[0].len(), 1);
    let out = &branches[0][0];
    assert_eq!(out.json["extractedText"], "hello world");
    assert_eq!(out.binary, item.binary, "attachments pass through unchanged");
}

#[tokio::test]
async fn output_length_matches_input_length() {
    let items: Vec<ExecutionItem> = (0..5)
        .map(|i| text_item("data", &format!("document {i}")))
        .collect();
    let branches = execute(&items, &echo_config()).await.expect("ok");

    assert_eq!(branches[0].len(), 5);
    for (i, out) in branches[0].iter().enumerate() {
        assert_eq!(out.json["extractedText"], format!("document {i}"));
    }
}

#[tokio::test]
async fn empty_batch_yields_empty_branch() {
    let branches = execute(&[], &echo_config()).await.expect("ok");
    assert_eq!(branches.len(), 1);
    assert!(branches[0].is_empty());
}

#[tokio::test]
async fn property_name_selects_the_attachment() {
    let mut item = text_item("data", "from data");
    item.binary
        .as_mut()
        .expect("has binary")
        .insert("file".into(), BinaryAttachment::from_bytes(b"from file"));

    let via_data = execute(&[item.clone()], &echo_config()).await.expect("ok");
    assert_eq!(via_data[0][0].json["extractedText"], "from data");

    let config = ReaderConfig::builder()
        .binary_property_name("file")
        .extractor(Arc::new(EchoExtractor))
        .build()
        .expect("valid config");
    let via_file = execute(&[item], &config).await.expect("ok");
    assert_eq!(via_file[0][0].json["extractedText"], "from file");
}

#[tokio::test]
async fn execute_is_idempotent() {
    let items = vec![text_item("data", "same bytes"), text_item("data", "again")];
    let config = echo_config();
    let first = execute(&items, &config).await.expect("ok");
    let second = execute(&items, &config).await.expect("ok");
    assert_eq!(first, second);
}

// ── Failure propagation ──────────────────────────────────────────────────

#[tokio::test]
async fn missing_attachment_fails_fast_by_default() {
    let items = vec![
        text_item("data", "ok"),
        ExecutionItem::empty(), // no binary at all
        text_item("data", "never reached"),
    ];
    let err = execute(&items, &echo_config())
        .await
        .expect_err("must abort");

    assert!(matches!(err, NodeError::MissingBinaryData { item_index: 1, .. }));
    assert!(
        err.to_string().contains("data"),
        "message must name the property, got: {err}"
    );
}

#[tokio::test]
async fn missing_attachment_is_recorded_under_continue_on_fail() {
    let items = vec![
        text_item("data", "first"),
        ExecutionItem::empty(),
        text_item("data", "third"),
    ];
    let config = ReaderConfig::builder()
        .continue_on_fail(true)
        .extractor(Arc::new(EchoExtractor))
        .build()
        .expect("valid config");

    let branches = execute(&items, &config).await.expect("batch survives");
    let branch = &branches[0];

    assert_eq!(branch.len(), 3, "one output per input");
    assert_eq!(branch[0].json["extractedText"], "first");
    assert_eq!(branch[2].json["extractedText"], "third");

    let message = branch[1].json["error"].as_str().expect("error message");
    assert!(message.contains("data"), "got: {message}");
    assert!(branch[1].json.get("extractedText").is_none());
}

#[tokio::test]
async fn wrong_property_name_reports_that_name() {
    let items = vec![text_item("data", "content")];
    let config = ReaderConfig::builder()
        .binary_property_name("attachment_0")
        .extractor(Arc::new(EchoExtractor))
        .build()
        .expect("valid config");

    let err = execute(&items, &config).await.expect_err("must fail");
    assert!(err.to_string().contains("attachment_0"));
}

#[tokio::test]
async fn undecodable_payload_is_recoverable() {
    let bad = ExecutionItem::with_attachment(
        "data",
        BinaryAttachment {
            data: "!!! definitely not base64 !!!".into(),
            mime_type: None,
            file_name: None,
            file_extension: None,
            file_size: None,
        },
    );
    let items = vec![bad, text_item("data", "still processed")];
    let config = ReaderConfig::builder()
        .continue_on_fail(true)
        .extractor(Arc::new(EchoExtractor))
        .build()
        .expect("valid config");

    let branches = execute(&items, &config).await.expect("batch survives");
    assert!(branches[0][0].json.get("error").is_some());
    assert_eq!(branches[0][1].json["extractedText"], "still processed");
}

#[tokio::test]
async fn extraction_failure_passes_message_through() {
    let items = vec![text_item("data", "anything")];
    let config = ReaderConfig::builder()
        .extractor(Arc::new(BrokenExtractor))
        .build()
        .expect("valid config");

    let err = execute(&items, &config).await.expect_err("must fail");
    assert!(matches!(err, NodeError::ExtractionFailed { .. }));
    assert!(err.to_string().contains("library exploded"));
}

#[tokio::test]
async fn extraction_failure_is_recorded_under_continue_on_fail() {
    let items = vec![text_item("data", "anything")];
    let config = ReaderConfig::builder()
        .continue_on_fail(true)
        .extractor(Arc::new(BrokenExtractor))
        .build()
        .expect("valid config");

    let branches = execute(&items, &config).await.expect("batch survives");
    let message = branches[0][0].json["error"].as_str().expect("error message");
    assert!(message.contains("library exploded"));
}

// ── Defaults ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn default_config_uses_plain_text_extractor() {
    let items = vec![text_item("data", "plain utf-8 content")];
    let branches = execute(&items, &ReaderConfig::default()).await.expect("ok");
    assert_eq!(branches[0][0].json["extractedText"], "plain utf-8 content");
}
