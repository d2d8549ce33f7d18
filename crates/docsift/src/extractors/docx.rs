//! DOCX strategy.
//!
//! Supports: Microsoft Word (.docx)

use super::decode_blocking;
use crate::Result;
use crate::codec::{self, StructuredCodec};
use crate::core::config::ExtractionConfig;
use crate::plugins::TextStrategy;
use crate::types::{FileHandle, FormatKind};
use async_trait::async_trait;
use std::sync::Arc;

/// Structured-document strategy.
///
/// Loads the payload and hands it to a [`StructuredCodec`]. The process-wide
/// docx-lite codec is used unless one is supplied with [`DocxStrategy::with_codec`].
pub struct DocxStrategy {
    codec: Option<Arc<dyn StructuredCodec>>,
}

impl DocxStrategy {
    /// Create a strategy using the shared default codec.
    pub fn new() -> Self {
        Self { codec: None }
    }

    /// Create a strategy with an explicit codec.
    pub fn with_codec(codec: Arc<dyn StructuredCodec>) -> Self {
        Self { codec: Some(codec) }
    }

    fn codec(&self) -> Arc<dyn StructuredCodec> {
        match &self.codec {
            Some(codec) => Arc::clone(codec),
            None => codec::structured_codec(),
        }
    }
}

impl Default for DocxStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextStrategy for DocxStrategy {
    fn name(&self) -> &str {
        "docx-strategy"
    }

    fn format(&self) -> FormatKind {
        FormatKind::StructuredDocument
    }

    async fn extract(&self, file: &dyn FileHandle, _config: &ExtractionConfig) -> Result<String> {
        let bytes = file.read_bytes().await?;
        let codec = self.codec();

        tracing::debug!(codec = codec.name(), size_bytes = bytes.len(), "decoding structured document");
        let name = codec.name().to_string();
        decode_blocking(&name, move || codec.extract_raw_text(&bytes)).await
    }
}
