//! Error types for docsift.
//!
//! Every failure inside the extraction path is one of these variants. Strategies
//! return them, the orchestrator converts them into placeholder strings, and
//! nothing escapes to the caller as a fault.
//!
//! - `Read` - the byte payload could not be read (missing file, broken stream)
//! - `Decode` - a codec rejected the document as malformed
//! - `UnsupportedFormat` - no strategy exists for the file
//! - `Config` - a configuration file was unreadable or invalid
//!
//! # Example
//!
//! ```rust
//! use docsift::{DocsiftError, Result};
//!
//! fn decode(bytes: &[u8]) -> Result<String> {
//!     if bytes.is_empty() {
//!         return Err(DocsiftError::decode("no bytes"));
//!     }
//!     Ok(String::from_utf8_lossy(bytes).into_owned())
//! }
//!
//! assert_eq!(decode(b"").unwrap_err().reason(), "no bytes");
//! ```
use thiserror::Error;

/// Result type alias using `DocsiftError`.
pub type Result<T> = std::result::Result<T, DocsiftError>;

/// Main error type for all docsift operations.
#[derive(Debug, Error)]
pub enum DocsiftError {
    #[error("Read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("Decode error: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl From<lopdf::Error> for DocsiftError {
    fn from(err: lopdf::Error) -> Self {
        DocsiftError::Decode {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

macro_rules! error_constructor {
    ($name:ident, $variant:ident) => {
        pastey::paste! {
            #[doc = "Create a " $variant " error"]
            pub fn $name<S: Into<String>>(message: S) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: None,
                }
            }

            #[doc = "Create a " $variant " error with source"]
            pub fn [<$name _with_source>]<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
                message: S,
                source: E,
            ) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: Some(Box::new(source)),
                }
            }
        }
    };
}

impl DocsiftError {
    error_constructor!(decode, Decode);
    error_constructor!(config, Config);

    /// Short reason embedded in the `parse failed` placeholder.
    ///
    /// Read failures collapse to a generic `"read error"`; decode failures keep
    /// the library's own detail message.
    pub fn reason(&self) -> String {
        match self {
            DocsiftError::Read(_) => "read error".to_string(),
            DocsiftError::Decode { message, .. } => message.clone(),
            DocsiftError::Config { message, .. } => message.clone(),
            DocsiftError::UnsupportedFormat(_) => "unsupported format".to_string(),
        }
    }
}
