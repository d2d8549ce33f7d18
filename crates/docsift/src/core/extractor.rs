//! Main extraction entry points.
//!
//! [`TextExtractor`] runs the whole pipeline for one file: classify the file,
//! look up the strategy for its format, run it once, and map the outcome to the
//! string handed back to the caller. Every path ends in a string; failures are
//! logged and rendered as bracketed placeholders instead of being raised.
//!
//! # Functions
//!
//! - [`extract_text`] - extract one file with the default extractor
//! - [`extract_texts`] - extract many files concurrently with the default extractor

use crate::DocsiftError;
use crate::core::config::ExtractionConfig;
use crate::core::{format, placeholder};
use crate::plugins::registry::StrategyRegistry;
use crate::types::{ExtractionOutcome, FileHandle, FormatKind};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

static DEFAULT_EXTRACTOR: Lazy<TextExtractor> = Lazy::new(TextExtractor::default);

/// Stateless document-to-text extractor.
///
/// Holds only the immutable strategy registry and configuration, so it is cheap
/// to clone and safe to share between concurrent extractions.
///
/// # Example
///
/// ```rust
/// use docsift::core::extractor::TextExtractor;
/// use docsift::types::InputFile;
///
/// # async fn example() {
/// let extractor = TextExtractor::default();
/// let file = InputFile::from_bytes("notes.txt", "text/plain", b"hello\nworld".to_vec());
/// assert_eq!(extractor.extract_text(&file).await, "hello\nworld");
///
/// let photo = InputFile::from_bytes("photo.xyz", "", Vec::new());
/// assert_eq!(extractor.extract_text(&photo).await, "[photo.xyz - unsupported format]");
/// # }
/// ```
#[derive(Clone)]
pub struct TextExtractor {
    registry: Arc<StrategyRegistry>,
    config: Arc<ExtractionConfig>,
}

impl TextExtractor {
    /// Create an extractor with the built-in strategies.
    pub fn new(config: ExtractionConfig) -> Self {
        Self::with_registry(StrategyRegistry::new(), config)
    }

    /// Create an extractor with a custom strategy registry.
    pub fn with_registry(registry: StrategyRegistry, config: ExtractionConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Classify `file` and run its strategy once, returning the typed outcome.
    pub async fn extract_outcome(&self, file: &dyn FileHandle) -> (FormatKind, ExtractionOutcome) {
        let kind = format::classify(file);
        tracing::debug!(format = %kind, "classified file");

        let outcome = self.registry.run(kind, file, &self.config).await;
        (kind, outcome)
    }

    /// Extract normalized text from `file`.
    ///
    /// Returns the extracted text, or one of the placeholders:
    ///
    /// - `[<name> content parsed empty]` when extraction produced only whitespace
    /// - `[<name> - unsupported format]` when no strategy handles the file
    /// - `[<name> - <label> parse failed: <reason>]` when reading or decoding failed
    #[tracing::instrument(skip_all, fields(file.name = %file.name(), format = tracing::field::Empty))]
    pub async fn extract_text(&self, file: &dyn FileHandle) -> String {
        let (kind, outcome) = self.extract_outcome(file).await;
        tracing::Span::current().record("format", tracing::field::display(kind));

        normalize(file.name(), kind, outcome)
    }

    /// Extract many files concurrently, returning one string per file in input order.
    ///
    /// Extractions are independent and bounded by
    /// [`ExtractionConfig::concurrency_limit`]. A task that dies unexpectedly
    /// yields a `parse failed` placeholder for its file only.
    pub async fn extract_texts(&self, files: Vec<Arc<dyn FileHandle>>) -> Vec<String> {
        if files.is_empty() {
            return Vec::new();
        }

        let semaphore = Arc::new(Semaphore::new(self.config.concurrency_limit()));
        let names: Vec<String> = files.iter().map(|f| f.name().to_string()).collect();
        let mut tasks = JoinSet::new();

        for (index, file) in files.into_iter().enumerate() {
            let extractor = self.clone();
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                (index, extractor.extract_text(file.as_ref()).await)
            });
        }

        let mut results: Vec<Option<String>> = vec![None; names.len()];

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, text)) => results[index] = Some(text),
                Err(join_err) => {
                    tracing::error!(error = %join_err, "extraction task failed");
                }
            }
        }

        results
            .into_iter()
            .zip(names)
            .map(|(text, name)| {
                text.unwrap_or_else(|| placeholder::parse_failed(&name, "Task", "extraction task failed"))
            })
            .collect()
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

/// Map a strategy outcome to the caller-facing string, logging failures.
pub fn normalize(file_name: &str, kind: FormatKind, outcome: ExtractionOutcome) -> String {
    match outcome {
        ExtractionOutcome::Success(text) if text.trim().is_empty() => {
            tracing::warn!(file = file_name, format = %kind, "extraction produced no text");
            placeholder::parsed_empty(file_name)
        }
        ExtractionOutcome::Success(text) => text,
        ExtractionOutcome::Failure(err @ DocsiftError::UnsupportedFormat(_)) => {
            tracing::warn!(file = file_name, error = %err, "unsupported format");
            placeholder::unsupported(file_name)
        }
        ExtractionOutcome::Failure(err) => {
            tracing::warn!(file = file_name, format = %kind, error = %err, "extraction failed");
            placeholder::parse_failed(file_name, kind.label(), &err.reason())
        }
    }
}

/// Extract one file with the process-wide default extractor.
pub async fn extract_text(file: &dyn FileHandle) -> String {
    DEFAULT_EXTRACTOR.extract_text(file).await
}

/// Extract many files concurrently with the process-wide default extractor.
pub async fn extract_texts(files: Vec<Arc<dyn FileHandle>>) -> Vec<String> {
    DEFAULT_EXTRACTOR.extract_texts(files).await
}
