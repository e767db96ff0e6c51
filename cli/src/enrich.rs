#![deny(missing_docs)]

//! # Enrich Command
//!
//! Loads a serialized model, appends deprecation notices, and writes it back out.

use std::fs;
use std::path::PathBuf;

use declgen_core::pass::ModelPass;
use declgen_core::{
    count_deprecated_nodes, read_model, render_model, AppError, AppResult, ModelFormat,
};

/// Arguments for the enrich command.
#[derive(clap::Args, Debug, Clone)]
pub struct EnrichArgs {
    /// Path to the model document (`.json`, `.yaml` or `.yml`).
    #[clap(long, env = "DECLGEN_INPUT")]
    pub input: PathBuf,

    /// Where to write the enriched model. Defaults to stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Document format. Inferred from the input extension when omitted.
    #[clap(long, env = "DECLGEN_FORMAT", value_parser = parse_format)]
    pub format: Option<ModelFormat>,
}

fn parse_format(s: &str) -> Result<ModelFormat, String> {
    s.parse::<ModelFormat>().map_err(|e| e.to_string())
}

/// Executes the enrichment.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `pass` - The pass applied to the loaded model.
pub fn execute(args: &EnrichArgs, pass: &impl ModelPass) -> AppResult<()> {
    if !args.input.exists() {
        return Err(AppError::General(format!(
            "Model file not found: {:?}",
            args.input
        )));
    }

    let format = match args.format {
        Some(format) => format,
        None => ModelFormat::from_path(&args.input)?,
    };

    // 1. Read Model
    let model = read_model(&args.input, Some(format))?;
    let before = count_deprecated_nodes(&model);

    // 2. Apply Pass
    let enriched = pass.apply(model);
    let after = count_deprecated_nodes(&enriched);
    tracing::info!(
        pass = pass.name(),
        added = after.saturating_sub(before),
        total = after,
        "deprecation notices applied"
    );

    // 3. Write Model
    let text = render_model(&enriched, format)?;
    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, text)?;
            tracing::info!("Enriched model written to {:?}", path);
        }
        None => println!("{}", text),
    }

    Ok(())
}
