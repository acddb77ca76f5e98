//! The extraction seam: raw bytes in, text out.
//!
//! Format detection and parsing are owned entirely by whatever sits behind
//! [`TextExtractor`] — this crate never inspects the buffer itself. The trait
//! is object-safe so callers can inject any backend (a document-parsing
//! library, an OCR service, a test double) through
//! [`crate::config::ReaderConfig`].
//!
//! [`ExtractorError`] is opaque to the batch loop: only its `Display` output
//! crosses the seam, carried verbatim into the item's error message.

use async_trait::async_trait;
use thiserror::Error;

/// Errors an extraction backend may raise.
///
/// The node never matches on these variants; they exist so backends can
/// produce readable messages without inventing their own error type.
#[derive(Debug, Clone, Error)]
pub enum ExtractorError {
    /// The backend does not understand this file format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The content was recognised but could not be parsed.
    #[error("malformed content: {0}")]
    Malformed(String),

    /// Any other backend failure (I/O, internal error).
    #[error("{0}")]
    Failed(String),
}

/// External text-extraction routine: one operation, bytes to text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract text from a raw byte buffer.
    async fn from_buffer(&self, buffer: &[u8]) -> Result<String, ExtractorError>;
}

/// Built-in fallback extractor: treats the buffer as UTF-8 text.
///
/// Used when no backend is injected. Anything that is not valid UTF-8 is
/// rejected rather than lossily transcoded, so binary formats surface a
/// clear failure instead of mojibake.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn from_buffer(&self, buffer: &[u8]) -> Result<String, ExtractorError> {
        String::from_utf8(buffer.to_vec())
            .map_err(|e| ExtractorError::Malformed(format!("not valid UTF-8: {e}")))
    }
}
