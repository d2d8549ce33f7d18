//! Built-in extraction strategies.
//!
//! One strategy per supported format; all implement [`TextStrategy`](crate::plugins::TextStrategy).

use crate::{DocsiftError, Result};
use std::panic::{AssertUnwindSafe, catch_unwind};

pub mod docx;
pub mod pdf;
pub mod text;

pub use docx::DocxStrategy;
pub use pdf::PdfStrategy;
pub use text::PlainTextStrategy;

/// Run a codec call, turning a panic inside the decoding library into a `Decode` error.
pub(crate) fn decode_guarded<F>(codec_name: &str, decode: F) -> Result<String>
where
    F: FnOnce() -> Result<String>,
{
    catch_unwind(AssertUnwindSafe(decode)).unwrap_or_else(|payload| {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        tracing::error!(codec = codec_name, detail = %detail, "codec panicked while decoding");
        Err(DocsiftError::decode(format!("{} decoder panicked: {}", codec_name, detail)))
    })
}

/// Run a synchronous codec call on tokio's blocking pool under [`decode_guarded`].
///
/// Decoding is CPU-bound; keeping it off the async workers lets concurrent
/// extractions make progress while a large document is parsed.
pub(crate) async fn decode_blocking<F>(codec_name: &str, decode: F) -> Result<String>
where
    F: FnOnce() -> Result<String> + Send + 'static,
{
    let name = codec_name.to_string();
    tokio::task::spawn_blocking(move || decode_guarded(&name, decode))
        .await
        .map_err(|e| DocsiftError::decode(format!("{} decode task failed: {}", codec_name, e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_guarded_passes_through() {
        assert_eq!(decode_guarded("test", || Ok("ok".to_string())).unwrap(), "ok");
        assert!(decode_guarded("test", || Err(DocsiftError::decode("no"))).is_err());
    }

    #[test]
    fn test_decode_guarded_catches_string_panic() {
        let err = decode_guarded("test", || panic!("offset {} out of range", 7)).unwrap_err();
        assert_eq!(err.reason(), "test decoder panicked: offset 7 out of range");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_decode_blocking_runs_off_the_runtime_thread() {
        let runtime_thread = std::thread::current().id();
        let decode_thread = decode_blocking("test", || Ok(format!("{:?}", std::thread::current().id())))
            .await
            .unwrap();
        assert_ne!(decode_thread, format!("{:?}", runtime_thread));
    }

    #[tokio::test]
    async fn test_decode_blocking_keeps_panic_detail() {
        let err = decode_blocking("test", || panic!("truncated stream")).await.unwrap_err();
        assert_eq!(err.reason(), "test decoder panicked: truncated stream");
    }
}
