//! Extraction strategy trait.

use crate::Result;
use crate::core::config::ExtractionConfig;
use crate::types::{FileHandle, FormatKind};
use async_trait::async_trait;

/// One format-specific procedure turning a file's bytes into text.
///
/// A strategy owns all failure capture for its format: every read or decode
/// problem comes back as `Err`, never as a panic, so each format degrades on its
/// own. Success with empty text is a valid result.
///
/// Strategies must be thread-safe (`Send + Sync`); the registry shares one
/// instance across concurrent extractions.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use docsift::core::config::ExtractionConfig;
/// use docsift::plugins::TextStrategy;
/// use docsift::types::{FileHandle, FormatKind};
/// use docsift::Result;
///
/// struct ShoutingText;
///
/// #[async_trait]
/// impl TextStrategy for ShoutingText {
///     fn name(&self) -> &str { "shouting-text" }
///     fn format(&self) -> FormatKind { FormatKind::PlainText }
///
///     async fn extract(&self, file: &dyn FileHandle, _config: &ExtractionConfig) -> Result<String> {
///         let bytes = file.read_bytes().await?;
///         Ok(String::from_utf8_lossy(&bytes).to_uppercase())
///     }
/// }
/// ```
#[async_trait]
pub trait TextStrategy: Send + Sync {
    /// Unique strategy name (kebab-case).
    fn name(&self) -> &str;

    /// The format this strategy handles.
    fn format(&self) -> FormatKind;

    /// Extract text from `file`. Single attempt, no retry.
    async fn extract(&self, file: &dyn FileHandle, config: &ExtractionConfig) -> Result<String>;
}
