//! PDF page text extraction using lopdf.

use super::{PaginatedCodec, PaginatedDocument};
use crate::{DocsiftError, Result};
use lopdf::Document;

/// Paginated document codec backed by lopdf.
#[derive(Debug, Default)]
pub struct LopdfCodec;

impl LopdfCodec {
    pub fn new() -> Self {
        Self
    }
}

impl PaginatedCodec for LopdfCodec {
    fn name(&self) -> &str {
        "lopdf"
    }

    fn open(&self, bytes: &[u8]) -> Result<Box<dyn PaginatedDocument>> {
        let document = Document::load_mem(bytes)?;
        let page_numbers = document.get_pages().keys().copied().collect();
        Ok(Box::new(LopdfDocument { document, page_numbers }))
    }
}

/// An opened PDF. Page numbers are resolved once at open time.
struct LopdfDocument {
    document: Document,
    page_numbers: Vec<u32>,
}

impl PaginatedDocument for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, page_number: usize) -> Result<String> {
        let page = page_number
            .checked_sub(1)
            .and_then(|idx| self.page_numbers.get(idx))
            .ok_or_else(|| DocsiftError::decode(format!("Page {} not found", page_number)))?;

        Ok(self.document.extract_text(&[*page])?)
    }
}
