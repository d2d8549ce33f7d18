//! Core value types: file handles, format kinds and extraction outcomes.

use crate::core::format::{DOCX_MIME_TYPE, PDF_MIME_TYPE, PLAIN_TEXT_MIME_TYPE};
use crate::error::{DocsiftError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A caller-owned file the extractor only reads.
///
/// `name` and `media_type` come from wherever the caller obtained the file
/// (a picker, an upload form, a path on disk). Neither is trusted: the name may
/// lack a suffix and the media type may be empty or disagree with the suffix.
///
/// # Example
///
/// ```rust
/// use docsift::types::{FileHandle, InputFile};
///
/// let file = InputFile::from_bytes("notes.txt", "text/plain", b"hello".to_vec());
/// assert_eq!(file.name(), "notes.txt");
/// assert_eq!(file.media_type(), "text/plain");
/// ```
#[async_trait]
pub trait FileHandle: Send + Sync {
    /// File name as presented by the caller, including its suffix.
    fn name(&self) -> &str;

    /// Declared media type; may be empty.
    fn media_type(&self) -> &str;

    /// Read the whole byte payload.
    async fn read_bytes(&self) -> std::io::Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
enum Payload {
    Memory(Arc<[u8]>),
    Disk(PathBuf),
}

/// Default [`FileHandle`] backed by an in-memory buffer or a path on disk.
#[derive(Debug, Clone)]
pub struct InputFile {
    name: String,
    media_type: String,
    payload: Payload,
}

impl InputFile {
    /// Wrap bytes already held in memory (e.g. an upload body).
    pub fn from_bytes(name: impl Into<String>, media_type: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            payload: Payload::Memory(bytes.into()),
        }
    }

    /// Reference a file on disk. The payload is read lazily on extraction.
    ///
    /// The name is the final path component and the declared media type is
    /// guessed from the extension, mirroring what a browser file picker reports.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let media_type = mime_guess::from_path(path)
            .first_raw()
            .map(str::to_string)
            .unwrap_or_default();

        Self {
            name,
            media_type,
            payload: Payload::Disk(path.to_path_buf()),
        }
    }

    /// Override the declared media type.
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Path backing this file, if it lives on disk.
    pub fn path(&self) -> Option<&Path> {
        match &self.payload {
            Payload::Disk(path) => Some(path),
            Payload::Memory(_) => None,
        }
    }
}

#[async_trait]
impl FileHandle for InputFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }

    async fn read_bytes(&self) -> std::io::Result<Vec<u8>> {
        match &self.payload {
            Payload::Memory(bytes) => Ok(bytes.to_vec()),
            Payload::Disk(path) => tokio::fs::read(path).await,
        }
    }
}

/// Extraction strategy family selected for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    /// `.txt`, `.md`, or any declared `text` media type.
    PlainText,
    /// Word-processor documents (`.docx`).
    StructuredDocument,
    /// Page-oriented documents (`.pdf`).
    PaginatedDocument,
    Unsupported,
}

impl FormatKind {
    /// Human-readable label used inside `parse failed` placeholders.
    pub fn label(&self) -> &'static str {
        match self {
            FormatKind::PlainText => "Text",
            FormatKind::StructuredDocument => "Word",
            FormatKind::PaginatedDocument => "PDF",
            FormatKind::Unsupported => "Unsupported",
        }
    }

    /// Canonical MIME type for the format, if it has one.
    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            FormatKind::PlainText => Some(PLAIN_TEXT_MIME_TYPE),
            FormatKind::StructuredDocument => Some(DOCX_MIME_TYPE),
            FormatKind::PaginatedDocument => Some(PDF_MIME_TYPE),
            FormatKind::Unsupported => None,
        }
    }
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormatKind::PlainText => "plain_text",
            FormatKind::StructuredDocument => "structured_document",
            FormatKind::PaginatedDocument => "paginated_document",
            FormatKind::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// Result of running one strategy on one file.
///
/// An empty `Success` is still a success; turning it into a placeholder is the
/// orchestrator's job.
#[derive(Debug)]
pub enum ExtractionOutcome {
    Success(String),
    Failure(DocsiftError),
}

impl ExtractionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionOutcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }
}

impl From<Result<String>> for ExtractionOutcome {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(text) => ExtractionOutcome::Success(text),
            Err(err) => ExtractionOutcome::Failure(err),
        }
    }
}
