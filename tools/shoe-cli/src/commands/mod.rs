//! CLI command implementations.

pub mod classify;
pub mod config;
pub mod render;

use std::io::Read;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use shoe_catalog::{parse_catalog, ShoeListing};

use crate::context::Context;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Catalog JSON file (`-` reads stdin).
    pub catalog: String,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Emit only the card grid, without the page wrapper.
    #[arg(long)]
    pub fragment: bool,

    /// Page title.
    #[arg(short, long, default_value = "Shoes")]
    pub title: String,
}

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Catalog JSON file (`-` reads stdin).
    pub catalog: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Create a shoefront.toml in the current directory.
    Init {
        /// Overwrite an existing file without asking.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the configuration.
    Validate,
}

/// Read and decode a catalog file.
pub(crate) fn load_catalog(ctx: &Context, source: &str) -> Result<Vec<ShoeListing>> {
    read_catalog(ctx, source, std::io::stdin().lock())
}

/// Decode a catalog from `source`, reading `stdin` when the source is `-`.
fn read_catalog(ctx: &Context, source: &str, mut stdin: impl Read) -> Result<Vec<ShoeListing>> {
    let content = if source == "-" {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .context("Failed to read catalog from stdin")?;
        buf
    } else {
        let path = ctx.resolve_path(source);
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?
    };

    let listings = parse_catalog(&content)
        .with_context(|| format!("Failed to parse catalog: {}", source))?;

    ctx.output
        .debug(&format!("Loaded {} listing(s) from {}", listings.len(), source));
    tracing::debug!(count = listings.len(), source, "loaded catalog");

    Ok(listings)
}
