//! CLI binary for anytext-node.
//!
//! A thin shim over the library crate: wraps each input file as a workflow
//! item with a base64 attachment, runs the node's `execute`, and prints the
//! result. Useful for trying an extraction backend outside the host runtime.

use anyhow::{Context, Result};
use anytext_node::{
    descriptor, execute, BinaryAttachment, ExecutionItem, ReaderConfig, DEFAULT_BINARY_PROPERTY,
};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "anytext",
    version,
    about = "Extract text from files through the Any Text Reader node"
)]
struct Cli {
    /// Files to process; each becomes one item in the batch.
    #[arg(required_unless_present = "descriptor")]
    files: Vec<PathBuf>,

    /// Binary property name the attachment is stored under.
    #[arg(long, default_value = DEFAULT_BINARY_PROPERTY)]
    property: String,

    /// Record per-file failures as error output instead of aborting the batch.
    #[arg(long)]
    continue_on_fail: bool,

    /// Print output items as JSON instead of the raw extracted text.
    #[arg(long)]
    json: bool,

    /// Print the node's registry metadata and exit.
    #[arg(long)]
    descriptor: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.descriptor {
        println!("{}", serde_json::to_string_pretty(&descriptor())?);
        return Ok(());
    }

    let mut items = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        let attachment = BinaryAttachment::from_bytes(&bytes)
            .with_file_name(path.file_name().map_or_else(
                || path.display().to_string(),
                |n| n.to_string_lossy().into_owned(),
            ));
        items.push(ExecutionItem::with_attachment(&cli.property, attachment));
    }

    let config = ReaderConfig::builder()
        .binary_property_name(&cli.property)
        .continue_on_fail(cli.continue_on_fail)
        .build()?;

    let branches = execute(&items, &config).await?;

    for item in &branches[0] {
        if cli.json {
            println!("{}", serde_json::to_string(item)?);
        } else if let Some(text) = item.json.get("extractedText").and_then(|v| v.as_str()) {
            println!("{text}");
        } else if let Some(err) = item.json.get("error").and_then(|v| v.as_str()) {
            eprintln!("error: {err}");
        }
    }

    Ok(())
}
