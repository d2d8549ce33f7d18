//! Plain text and Markdown strategy.

use crate::Result;
use crate::core::config::ExtractionConfig;
use crate::plugins::TextStrategy;
use crate::types::{FileHandle, FormatKind};
use async_trait::async_trait;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Direct-decode strategy for `.txt`, `.md` and declared `text/*` files.
///
/// Bytes are decoded as UTF-8; invalid sequences become U+FFFD instead of
/// failing. Content is returned exactly as decoded, so an empty file is an
/// empty success.
pub struct PlainTextStrategy;

impl PlainTextStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextStrategy {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a text payload the way a browser's `readAsText` does.
pub fn decode_text(bytes: &[u8], strip_bom: bool) -> String {
    let bytes = if strip_bom {
        bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
    } else {
        bytes
    };

    String::from_utf8_lossy(bytes).into_owned()
}

#[async_trait]
impl TextStrategy for PlainTextStrategy {
    fn name(&self) -> &str {
        "plain-text-strategy"
    }

    fn format(&self) -> FormatKind {
        FormatKind::PlainText
    }

    async fn extract(&self, file: &dyn FileHandle, config: &ExtractionConfig) -> Result<String> {
        let bytes = file.read_bytes().await?;
        tracing::debug!(size_bytes = bytes.len(), "decoding plain text");
        Ok(decode_text(&bytes, config.text.strip_bom))
    }
}
