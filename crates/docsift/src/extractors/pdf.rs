//! PDF strategy.

use super::decode_blocking;
use crate::Result;
use crate::codec::{self, PaginatedCodec};
use crate::core::config::ExtractionConfig;
use crate::plugins::TextStrategy;
use crate::types::{FileHandle, FormatKind};
use async_trait::async_trait;
use std::sync::Arc;

/// Paginated-document strategy.
///
/// Pages are read strictly in order, 1 through N, and each page's text is
/// followed by the configured separator. The whole document either succeeds or
/// fails: text gathered from earlier pages is dropped if a later page fails.
///
/// The default codec's runtime is configured lazily on the first extraction in
/// the process (see [`codec::paginated_codec`]).
pub struct PdfStrategy {
    codec: Option<Arc<dyn PaginatedCodec>>,
}

impl PdfStrategy {
    /// Create a strategy using the shared default codec.
    pub fn new() -> Self {
        Self { codec: None }
    }

    /// Create a strategy with an explicit codec.
    pub fn with_codec(codec: Arc<dyn PaginatedCodec>) -> Self {
        Self { codec: Some(codec) }
    }

    fn codec(&self) -> Arc<dyn PaginatedCodec> {
        match &self.codec {
            Some(codec) => Arc::clone(codec),
            None => codec::paginated_codec(),
        }
    }
}

impl Default for PdfStrategy {
    fn default() -> Self {
        Self::new()
    }
}

/// Open `bytes` and concatenate every page's text, in page order.
fn extract_pages(codec: &dyn PaginatedCodec, bytes: &[u8], page_separator: &str) -> Result<String> {
    let document = codec.open(bytes)?;
    let page_count = document.page_count();
    let mut content = String::new();

    for page_number in 1..=page_count {
        let page_text = document.page_text(page_number)?;
        content.push_str(&page_text);
        content.push_str(page_separator);
    }

    tracing::debug!(page_count, "paginated document decoded");
    Ok(content.trim().to_string())
}

#[async_trait]
impl TextStrategy for PdfStrategy {
    fn name(&self) -> &str {
        "pdf-strategy"
    }

    fn format(&self) -> FormatKind {
        FormatKind::PaginatedDocument
    }

    async fn extract(&self, file: &dyn FileHandle, config: &ExtractionConfig) -> Result<String> {
        let bytes = file.read_bytes().await?;
        let codec = self.codec();
        let page_separator = config.pdf.page_separator.clone();

        tracing::debug!(codec = codec.name(), size_bytes = bytes.len(), "decoding paginated document");
        let name = codec.name().to_string();
        decode_blocking(&name, move || extract_pages(codec.as_ref(), &bytes, &page_separator)).await
    }
}
