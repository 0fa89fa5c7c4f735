//! # compliance-rag
//!
//! Prints the excerpt of a guideline document most relevant to a question or
//! to a piece of marketing copy.
//!
//! Usage:
//!   compliance-rag --document guide.txt --query "Can we promise returns?"
//!   compliance-rag --document guide.txt --query-file flyer.txt --json
//!   compliance-rag --document guide.txt --query "risk" --strategy dense   # needs `fastembed`

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use compliance_rag::{Document, EmbeddingStrategy, RetrievalConfig, Retriever, TextEncoder};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "compliance-rag",
    version,
    about = "Retrieve the most relevant excerpt of a compliance guideline document"
)]
struct Cli {
    /// Plain-text guideline document to search
    #[arg(short, long)]
    document: PathBuf,

    /// Question to answer
    #[arg(short, long, conflicts_with = "query_file", required_unless_present = "query_file")]
    query: Option<String>,

    /// File whose text is used as the query (e.g. extracted marketing copy)
    #[arg(long)]
    query_file: Option<PathBuf>,

    /// JSON configuration file (`max_chunk_size`, `strategy`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum chunk size in characters (overrides the config file)
    #[arg(long)]
    max_chunk_size: Option<usize>,

    /// Embedding strategy: statistical or dense (overrides the config file)
    #[arg(long)]
    strategy: Option<EmbeddingStrategy>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<RetrievalConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str::<RetrievalConfig>(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => RetrievalConfig::default(),
    };
    if let Some(size) = cli.max_chunk_size {
        config.max_chunk_size = size;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(feature = "fastembed")]
fn load_encoder() -> Result<Arc<dyn TextEncoder>> {
    let encoder: Arc<dyn TextEncoder> = compliance_rag::fastembed::FastEmbedEncoder::shared()?;
    Ok(encoder)
}

#[cfg(not(feature = "fastembed"))]
fn load_encoder() -> Result<Arc<dyn TextEncoder>> {
    bail!("the dense strategy requires building with `--features fastembed`")
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "compliance_rag=debug" } else { "compliance_rag=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    let dense = config.strategy == EmbeddingStrategy::Dense;

    let mut builder = Retriever::builder().config(config);
    if dense {
        builder = builder.encoder(load_encoder()?);
    }
    let retriever = builder.build()?;
    info!(
        max_chunk_size = retriever.config().max_chunk_size,
        strategy = %retriever.space().strategy(),
        "retriever ready"
    );

    let document_id = cli
        .document
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let document = Document::new(document_id, read_text(&cli.document)?)
        .with_metadata("source", cli.document.display().to_string());

    let query = match (&cli.query, &cli.query_file) {
        (Some(query), _) => query.clone(),
        (None, Some(path)) => read_text(path)?,
        (None, None) => bail!("either --query or --query-file is required"),
    };

    let hit = retriever.retrieve(&query, &document)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&hit)?);
        return Ok(());
    }

    match hit {
        Some(hit) => {
            println!(
                "Relevant excerpt (chunk {}, {} chars, score {:.4}):\n",
                hit.chunk.index,
                hit.chunk.char_len(),
                hit.score
            );
            println!("{}", hit.chunk.text);
        }
        None => println!("No relevant content found."),
    }

    Ok(())
}
