//! Document codec capabilities and their process-wide loaders.
//!
//! The structured and paginated strategies hand bytes to an external decoding
//! library. Those libraries sit behind two small traits so that a backend can be
//! swapped (or faked in tests) without touching the strategies:
//!
//! - [`StructuredCodec`] - bytes in, raw text out (word-processor documents)
//! - [`PaginatedCodec`] - bytes in, a [`PaginatedDocument`] session out
//!
//! The default backends are resolved once per process. The paginated runtime in
//! particular is set up lazily on first use behind an init-once guard, so any
//! number of concurrent first extractions observe exactly one initialization.

pub mod docx;
pub mod pdf;

use crate::Result;
use once_cell::sync::{Lazy, OnceCell};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub use docx::DocxLiteCodec;
pub use pdf::LopdfCodec;

/// Extracts raw text from a structured (word-processor) document.
///
/// Implementations must be thread-safe; one instance is shared by every
/// extraction in the process.
pub trait StructuredCodec: Send + Sync {
    fn name(&self) -> &str;

    /// Decode `bytes` and return the document's raw text.
    ///
    /// A document without text is `Ok(String::new())`, not an error.
    fn extract_raw_text(&self, bytes: &[u8]) -> Result<String>;
}

/// Opens paginated documents.
pub trait PaginatedCodec: Send + Sync {
    fn name(&self) -> &str;

    /// Parse `bytes` into a page-addressable document session.
    fn open(&self, bytes: &[u8]) -> Result<Box<dyn PaginatedDocument>>;
}

/// An opened paginated document.
pub trait PaginatedDocument {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Text content of a single page. Page numbers start at 1.
    fn page_text(&self, page_number: usize) -> Result<String>;
}

static PAGINATED_RUNTIME: OnceCell<Arc<dyn PaginatedCodec>> = OnceCell::new();

static PAGINATED_INITIALIZATIONS: AtomicUsize = AtomicUsize::new(0);

static STRUCTURED_CODEC: Lazy<Arc<dyn StructuredCodec>> = Lazy::new(|| {
    tracing::debug!("loading structured document codec");
    Arc::new(DocxLiteCodec::new())
});

/// Process-wide structured document codec.
pub fn structured_codec() -> Arc<dyn StructuredCodec> {
    Arc::clone(&STRUCTURED_CODEC)
}

/// Process-wide paginated document codec, configuring its runtime on first use.
///
/// Only the first caller performs setup; concurrent callers block until it
/// completes and then share the same instance.
pub fn paginated_codec() -> Arc<dyn PaginatedCodec> {
    let codec = PAGINATED_RUNTIME.get_or_init(|| {
        PAGINATED_INITIALIZATIONS.fetch_add(1, Ordering::SeqCst);
        let codec = LopdfCodec::new();
        tracing::debug!(codec = codec.name(), "paginated document runtime configured");
        Arc::new(codec)
    });
    Arc::clone(codec)
}

/// How many times the paginated runtime has been set up in this process (0 or 1).
pub fn paginated_initializations() -> usize {
    PAGINATED_INITIALIZATIONS.load(Ordering::SeqCst)
}
