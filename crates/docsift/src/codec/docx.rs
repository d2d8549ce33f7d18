//! DOCX text extraction using docx-lite.

use super::StructuredCodec;
use crate::{DocsiftError, Result};

/// Structured document codec backed by docx-lite's streaming XML parser.
#[derive(Debug, Default)]
pub struct DocxLiteCodec;

impl DocxLiteCodec {
    pub fn new() -> Self {
        Self
    }
}

impl StructuredCodec for DocxLiteCodec {
    fn name(&self) -> &str {
        "docx-lite"
    }

    fn extract_raw_text(&self, bytes: &[u8]) -> Result<String> {
        docx_lite::extract_text_from_bytes(bytes)
            .map_err(|e| DocsiftError::decode(e.to_string()))
    }
}
