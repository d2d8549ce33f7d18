//! Format classification.
//!
//! Maps a file's name suffix and declared media type to the [`FormatKind`]
//! whose strategy will extract it. Classification is pure and total: any name
//! and any media type produce a kind, and no bytes are read.

use crate::types::{FileHandle, FormatKind};

pub const PLAIN_TEXT_MIME_TYPE: &str = "text/plain";
pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";
pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const DOCX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Substring of a declared media type that marks the file as plain text.
const TEXT_MEDIA_INDICATOR: &str = "text";

/// Lower-cased substring after the last `.` of `name`, or `""` when there is no dot.
///
/// # Example
///
/// ```rust
/// use docsift::core::format::suffix_of;
///
/// assert_eq!(suffix_of("Report.DOCX"), "docx");
/// assert_eq!(suffix_of("archive.tar.gz"), "gz");
/// assert_eq!(suffix_of("README"), "");
/// ```
pub fn suffix_of(name: &str) -> String {
    let lowered = name.to_lowercase();
    match lowered.rfind('.') {
        Some(idx) => lowered[idx + 1..].to_string(),
        None => String::new(),
    }
}

/// Classify a file name and declared media type.
///
/// A media type containing `text` wins over the suffix, so a spoofed
/// `text/plain` upload named `scan.pdf` is decoded as plain text.
pub fn classify_parts(name: &str, media_type: &str) -> FormatKind {
    let suffix = suffix_of(name);

    if media_type.to_lowercase().contains(TEXT_MEDIA_INDICATOR) || suffix == "txt" || suffix == "md" {
        FormatKind::PlainText
    } else if suffix == "docx" {
        FormatKind::StructuredDocument
    } else if suffix == "pdf" {
        FormatKind::PaginatedDocument
    } else {
        FormatKind::Unsupported
    }
}

/// Classify a file handle without touching its payload.
pub fn classify(file: &dyn FileHandle) -> FormatKind {
    classify_parts(file.name(), file.media_type())
}
