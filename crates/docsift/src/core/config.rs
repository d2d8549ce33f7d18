//! Configuration loading and management.
//!
//! [`ExtractionConfig`] can be built programmatically or loaded from TOML, YAML or
//! JSON. The defaults reproduce the stock extraction behavior exactly, so a
//! missing config file never changes results.

use crate::{DocsiftError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for by [`ExtractionConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "docsift.toml";

/// Main extraction configuration.
///
/// # Example
///
/// ```rust
/// use docsift::core::config::ExtractionConfig;
///
/// let config = ExtractionConfig::default();
/// assert_eq!(config.pdf.page_separator, "\n");
///
/// // let config = ExtractionConfig::from_toml_file("docsift.toml")?;
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Plain-text decoding options
    #[serde(default)]
    pub text: TextConfig,

    /// Paginated-document options
    #[serde(default)]
    pub pdf: PdfConfig,

    /// Maximum concurrent extractions in batch operations (None = num_cpus * 2).
    #[serde(default)]
    pub max_concurrent_extractions: Option<usize>,
}

/// Plain-text decoding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    /// Drop a leading UTF-8 byte-order mark
    #[serde(default = "default_true")]
    pub strip_bom: bool,
}

/// Paginated-document configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfConfig {
    /// Appended after the text of every page
    #[serde(default = "default_page_separator")]
    pub page_separator: String,
}

fn default_true() -> bool {
    true
}

fn default_page_separator() -> String {
    "\n".to_string()
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { strip_bom: true }
    }
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            page_separator: default_page_separator(),
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `DocsiftError::Config` if the file can't be read or is invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        toml::from_str(&content)
            .map_err(|e| DocsiftError::config(format!("Invalid TOML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        serde_yaml_ng::from_str(&content)
            .map_err(|e| DocsiftError::config(format!("Invalid YAML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        serde_json::from_str(&content)
            .map_err(|e| DocsiftError::config(format!("Invalid JSON in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration, picking the parser from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Self::from_toml_file(path),
            "yaml" | "yml" => Self::from_yaml_file(path),
            "json" => Self::from_json_file(path),
            other => Err(DocsiftError::config(format!(
                "Unsupported config format '{}' for {}",
                other,
                path.display()
            ))),
        }
    }

    /// Discover `docsift.toml` in the current directory or any parent.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir()
            .map_err(|e| DocsiftError::config_with_source("Failed to resolve current directory", e))?;

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "discovered config file");
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Effective batch concurrency limit.
    pub fn concurrency_limit(&self) -> usize {
        self.max_concurrent_extractions
            .filter(|limit| *limit > 0)
            .unwrap_or_else(|| num_cpus::get() * 2)
    }
}

fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        DocsiftError::config_with_source(format!("Failed to read config file {}", path.display()), e)
    })
}
