//! Docsift command-line interface
//!
//! Extracts normalized text from documents on disk. Extraction never fails a
//! file: unusable inputs print their bracketed placeholder instead.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use docsift::types::{FileHandle, InputFile};
use docsift::{ExtractionConfig, FormatKind, TextExtractor, classify};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Output rendering
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "docsift")]
#[command(version, about = "Extract normalized plain text from TXT, Markdown, DOCX and PDF files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from one or more files
    Extract {
        /// Files to extract
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Configuration file (TOML, YAML or JSON); defaults to a discovered docsift.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Declared media type for every file, overriding the guess from the extension
        #[arg(short, long)]
        media_type: Option<String>,

        /// Maximum concurrent extractions
        #[arg(short = 'j', long)]
        max_concurrent: Option<usize>,
    },

    /// Show which format each file is classified as, without reading it
    Classify {
        /// Files to classify
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Declared media type for every file
        #[arg(short, long)]
        media_type: Option<String>,
    },
}

#[derive(Serialize)]
struct ExtractedFile {
    file: String,
    text: String,
}

#[derive(Serialize)]
struct ClassifiedFile {
    file: String,
    media_type: String,
    format: FormatKind,
}

fn load_config(path: Option<&Path>) -> Result<ExtractionConfig> {
    if let Some(path) = path {
        return ExtractionConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    Ok(ExtractionConfig::discover()
        .context("Failed to discover docsift.toml")?
        .unwrap_or_default())
}

fn open_files(paths: &[PathBuf], media_type: Option<&str>) -> Vec<InputFile> {
    paths
        .iter()
        .map(|path| {
            let file = InputFile::from_path(path);
            match media_type {
                Some(media_type) => file.with_media_type(media_type),
                None => file,
            }
        })
        .collect()
}

async fn run_extract(
    paths: Vec<PathBuf>,
    format: OutputFormat,
    config: Option<PathBuf>,
    media_type: Option<String>,
    max_concurrent: Option<usize>,
) -> Result<()> {
    let mut config = load_config(config.as_deref())?;
    if max_concurrent.is_some() {
        config.max_concurrent_extractions = max_concurrent;
    }

    let files = open_files(&paths, media_type.as_deref());
    let names: Vec<String> = files.iter().map(|f| f.name().to_string()).collect();
    let handles: Vec<Arc<dyn FileHandle>> = files
        .into_iter()
        .map(|f| Arc::new(f) as Arc<dyn FileHandle>)
        .collect();

    tracing::debug!(count = handles.len(), "extracting files");
    let texts = TextExtractor::new(config).extract_texts(handles).await;

    match format {
        OutputFormat::Text => {
            let single = texts.len() == 1;
            for (name, text) in names.iter().zip(&texts) {
                if !single {
                    println!("==> {} <==", name);
                }
                println!("{}", text);
            }
        }
        OutputFormat::Json => {
            let output: Vec<ExtractedFile> = names
                .into_iter()
                .zip(texts)
                .map(|(file, text)| ExtractedFile { file, text })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("Failed to serialize results")?
            );
        }
    }

    Ok(())
}

fn run_classify(paths: Vec<PathBuf>, format: OutputFormat, media_type: Option<String>) -> Result<()> {
    let classified: Vec<ClassifiedFile> = open_files(&paths, media_type.as_deref())
        .iter()
        .map(|file| ClassifiedFile {
            file: file.name().to_string(),
            media_type: file.media_type().to_string(),
            format: classify(file),
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for entry in &classified {
                println!("{}\t{}", entry.file, entry.format);
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&classified).context("Failed to serialize results")?
            );
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            files,
            format,
            config,
            media_type,
            max_concurrent,
        } => run_extract(files, format, config, media_type, max_concurrent).await,
        Commands::Classify {
            files,
            format,
            media_type,
        } => run_classify(files, format, media_type),
    }
}
