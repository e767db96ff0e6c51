#![deny(missing_docs)]

//! # Declgen CLI
//!
//! Command Line Interface for running model passes on serialized models.
//!
//! Supported Commands:
//! - `enrich`: Appends deprecation notices derived from source markers.

use clap::{Parser, Subcommand};
use declgen_core::{AppResult, DeprecationEnricher};
use tracing_subscriber::EnvFilter;

mod enrich;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Declaration generator model tools")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Append `@deprecated` notices to nodes derived from deprecated constructs.
    Enrich(enrich::EnrichArgs),
}

fn init_tracing() {
    // stdout carries the model, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> AppResult<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Enrich(args) => {
            let enricher = DeprecationEnricher::new();
            enrich::execute(args, &enricher)?;
        }
    }

    Ok(())
}
