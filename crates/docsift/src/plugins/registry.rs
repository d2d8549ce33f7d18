//! Strategy registration and lookup.
//!
//! The registry maps each [`FormatKind`] to the strategy that extracts it. It is
//! immutable once handed to an extractor, so lookups need no locking.

use crate::core::config::ExtractionConfig;
use crate::extractors::{DocxStrategy, PdfStrategy, PlainTextStrategy};
use crate::plugins::TextStrategy;
use crate::types::{ExtractionOutcome, FileHandle, FormatKind};
use crate::{DocsiftError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Validate a strategy name before registration.
///
/// # Rules
///
/// - Name cannot be empty
/// - Name cannot contain whitespace
fn validate_strategy_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(DocsiftError::config("Strategy name cannot be empty"));
    }

    if name.contains(char::is_whitespace) {
        return Err(DocsiftError::config(format!(
            "Strategy name '{}' cannot contain whitespace",
            name
        )));
    }

    Ok(())
}

/// Registry of extraction strategies keyed by format.
///
/// # Example
///
/// ```rust
/// use docsift::plugins::registry::StrategyRegistry;
/// use docsift::types::FormatKind;
///
/// let registry = StrategyRegistry::new();
/// assert!(registry.get(FormatKind::PaginatedDocument).is_some());
/// assert!(registry.get(FormatKind::Unsupported).is_none());
/// ```
pub struct StrategyRegistry {
    strategies: HashMap<FormatKind, Arc<dyn TextStrategy>>,
}

impl StrategyRegistry {
    /// Create a registry with the built-in plain-text, DOCX and PDF strategies.
    pub fn new() -> Self {
        let mut strategies: HashMap<FormatKind, Arc<dyn TextStrategy>> = HashMap::new();
        strategies.insert(FormatKind::PlainText, Arc::new(PlainTextStrategy::new()));
        strategies.insert(FormatKind::StructuredDocument, Arc::new(DocxStrategy::new()));
        strategies.insert(FormatKind::PaginatedDocument, Arc::new(PdfStrategy::new()));
        Self { strategies }
    }

    /// Create an empty registry; every lookup misses until strategies are registered.
    pub fn new_empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Register a strategy, replacing any previous one for the same format.
    ///
    /// # Errors
    ///
    /// - `Config` if the strategy name is invalid or it claims `FormatKind::Unsupported`
    pub fn register(&mut self, strategy: Arc<dyn TextStrategy>) -> Result<()> {
        validate_strategy_name(strategy.name())?;

        let format = strategy.format();
        if format == FormatKind::Unsupported {
            return Err(DocsiftError::config(format!(
                "Strategy '{}' cannot be registered for unsupported files",
                strategy.name()
            )));
        }

        if let Some(previous) = self.strategies.insert(format, strategy) {
            tracing::debug!(format = %format, replaced = previous.name(), "strategy replaced");
        }
        Ok(())
    }

    /// Strategy registered for `format`, if any.
    pub fn get(&self, format: FormatKind) -> Option<Arc<dyn TextStrategy>> {
        self.strategies.get(&format).cloned()
    }

    /// Names of all registered strategies, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.strategies.values().map(|s| s.name().to_string()).collect();
        names.sort();
        names
    }

    /// Run the strategy for `format` on `file`.
    ///
    /// Unsupported formats, and formats with no registered strategy, fail
    /// immediately without reading the file.
    pub async fn run(&self, format: FormatKind, file: &dyn FileHandle, config: &ExtractionConfig) -> ExtractionOutcome {
        let Some(strategy) = self.get(format) else {
            return ExtractionOutcome::Failure(DocsiftError::UnsupportedFormat(file.name().to_string()));
        };

        tracing::debug!(strategy = strategy.name(), format = %format, "running strategy");
        strategy.extract(file, config).await.into()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InputFile;
    use async_trait::async_trait;

    struct StaticStrategy {
        name: &'static str,
        format: FormatKind,
    }

    #[async_trait]
    impl TextStrategy for StaticStrategy {
        fn name(&self) -> &str {
            self.name
        }

        fn format(&self) -> FormatKind {
            self.format
        }

        async fn extract(&self, _file: &dyn FileHandle, _config: &ExtractionConfig) -> Result<String> {
            Ok(format!("from {}", self.name))
        }
    }

    #[test]
    fn test_default_registry_has_builtins() {
        let registry = StrategyRegistry::new();
        assert_eq!(registry.list(), vec!["docx-strategy", "pdf-strategy", "plain-text-strategy"]);
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = StrategyRegistry::new();
        registry
            .register(Arc::new(StaticStrategy {
                name: "custom-text",
                format: FormatKind::PlainText,
            }))
            .unwrap();

        assert_eq!(registry.get(FormatKind::PlainText).unwrap().name(), "custom-text");
        assert_eq!(registry.list().len(), 3);
    }

    #[test]
    fn test_register_rejects_bad_names() {
        let mut registry = StrategyRegistry::new_empty();
        let empty = registry.register(Arc::new(StaticStrategy {
            name: "",
            format: FormatKind::PlainText,
        }));
        assert!(empty.is_err());

        let spaced = registry.register(Arc::new(StaticStrategy {
            name: "my strategy",
            format: FormatKind::PlainText,
        }));
        assert!(spaced.is_err());
    }

    #[test]
    fn test_register_rejects_unsupported_format() {
        let mut registry = StrategyRegistry::new_empty();
        let result = registry.register(Arc::new(StaticStrategy {
            name: "catch-all",
            format: FormatKind::Unsupported,
        }));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_unsupported_fails_fast() {
        let registry = StrategyRegistry::new();
        let file = InputFile::from_path("/nonexistent/photo.xyz");
        let outcome = registry
            .run(FormatKind::Unsupported, &file, &ExtractionConfig::default())
            .await;

        assert!(matches!(
            outcome,
            ExtractionOutcome::Failure(DocsiftError::UnsupportedFormat(_))
        ));
    }

    #[tokio::test]
    async fn test_run_missing_strategy_is_unsupported() {
        let registry = StrategyRegistry::new_empty();
        let file = InputFile::from_bytes("a.txt", "text/plain", b"hi".to_vec());
        let outcome = registry.run(FormatKind::PlainText, &file, &ExtractionConfig::default()).await;
        assert!(outcome.is_failure());
    }

    #[tokio::test]
    async fn test_run_dispatches_to_registered_strategy() {
        let mut registry = StrategyRegistry::new_empty();
        registry
            .register(Arc::new(StaticStrategy {
                name: "fake-pdf",
                format: FormatKind::PaginatedDocument,
            }))
            .unwrap();

        let file = InputFile::from_bytes("a.pdf", "", Vec::new());
        match registry
            .run(FormatKind::PaginatedDocument, &file, &ExtractionConfig::default())
            .await
        {
            ExtractionOutcome::Success(text) => assert_eq!(text, "from fake-pdf"),
            ExtractionOutcome::Failure(err) => panic!("unexpected failure: {}", err),
        }
    }
}
