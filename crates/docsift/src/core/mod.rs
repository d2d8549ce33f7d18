//! Core extraction orchestration.
//!
//! - [`format`] - FormatClassifier
//! - [`extractor`] - the `TextExtractor` entry point
//! - [`placeholder`] - diagnostic strings substituted for unusable text
//! - [`config`] - configuration loading

pub mod config;
pub mod extractor;
pub mod format;
pub mod placeholder;
