//! Docsift - document-to-text extraction for uploads
//!
//! Docsift turns a caller-supplied file (plain text, Markdown, DOCX or PDF) into
//! a single normalized string. Extraction never fails the caller: when a file
//! cannot be used, a bracketed placeholder naming the file and the reason is
//! returned in place of its text.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use docsift::{InputFile, extract_text};
//!
//! # async fn example() {
//! let file = InputFile::from_path("resume.pdf");
//! let text = extract_text(&file).await;
//! println!("{text}");
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Core Module** (`core`): format classification, orchestration, placeholders, config loading
//! - **Plugin System** (`plugins`): the `TextStrategy` trait and the format-keyed registry
//! - **Extractors** (`extractors`): one strategy per supported format
//! - **Codecs** (`codec`): DOCX and PDF decoding backends with a lazily initialized PDF runtime

#![deny(unsafe_code)]

pub mod codec;
pub mod core;
pub mod error;
pub mod extractors;
pub mod plugins;
pub mod types;

pub use error::{DocsiftError, Result};
pub use types::*;

pub use core::config::{ExtractionConfig, PdfConfig, TextConfig};
pub use core::extractor::{TextExtractor, extract_text, extract_texts};
pub use core::format::classify;

pub use plugins::{StrategyRegistry, TextStrategy};
