//! Configuration for a node execution.
//!
//! The host runtime hands a node its parameters implicitly; here they are an
//! explicit [`ReaderConfig`] passed into [`crate::execute`]. Keeping every
//! knob in one struct makes runs reproducible and trivially loggable.
//!
//! Built via [`ReaderConfig::builder()`] or [`ReaderConfig::default()`];
//! the builder validates so a bad parameter fails before any item is read.

use crate::error::NodeError;
use crate::extractor::{PlainTextExtractor, TextExtractor};
use std::fmt;
use std::sync::Arc;

/// Default binary property name, matching the host's convention for the
/// first attachment on an item.
pub const DEFAULT_BINARY_PROPERTY: &str = "data";

/// Configuration for one `execute` invocation.
///
/// # Example
/// ```rust
/// use anytext_node::ReaderConfig;
///
/// let config = ReaderConfig::builder()
///     .binary_property_name("attachment_0")
///     .continue_on_fail(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ReaderConfig {
    /// Which binary attachment to read on each item. Default: `"data"`.
    ///
    /// Supplied once per invocation, not per item. Must be non-empty.
    pub binary_property_name: String,

    /// Fold per-item failures into `{ json: { error } }` output items instead
    /// of aborting the batch. Default: `false` (fail fast, host convention).
    pub continue_on_fail: bool,

    /// Pre-constructed extraction backend. When `None`, a
    /// [`PlainTextExtractor`] is used.
    pub extractor: Option<Arc<dyn TextExtractor>>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            binary_property_name: DEFAULT_BINARY_PROPERTY.to_string(),
            continue_on_fail: false,
            extractor: None,
        }
    }
}

impl fmt::Debug for ReaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderConfig")
            .field("binary_property_name", &self.binary_property_name)
            .field("continue_on_fail", &self.continue_on_fail)
            .field(
                "extractor",
                &self.extractor.as_ref().map(|_| "<dyn TextExtractor>"),
            )
            .finish()
    }
}

impl ReaderConfig {
    /// Create a new builder for `ReaderConfig`.
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder {
            config: Self::default(),
        }
    }

    /// The extraction backend to use: the injected one, or the built-in
    /// plain-text fallback.
    pub(crate) fn resolve_extractor(&self) -> Arc<dyn TextExtractor> {
        match self.extractor {
            Some(ref e) => Arc::clone(e),
            None => Arc::new(PlainTextExtractor),
        }
    }
}

/// Builder for [`ReaderConfig`].
#[derive(Debug)]
pub struct ReaderConfigBuilder {
    config: ReaderConfig,
}

impl ReaderConfigBuilder {
    pub fn binary_property_name(mut self, name: impl Into<String>) -> Self {
        self.config.binary_property_name = name.into();
        self
    }

    pub fn continue_on_fail(mut self, v: bool) -> Self {
        self.config.continue_on_fail = v;
        self
    }

    pub fn extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.config.extractor = Some(extractor);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ReaderConfig, NodeError> {
        if self.config.binary_property_name.is_empty() {
            return Err(NodeError::InvalidParameter(
                "binary property name must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}
