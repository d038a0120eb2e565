//! Validator Generator CLI
//!
//! Loads an API model document, lints it, and writes the generated
//! TypeScript validators.

use std::path::PathBuf;

use clap::Parser;
use guardgen::{generate, lint_model, load_model, GeneratorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "guardgen")]
#[command(about = "Generate TypeScript runtime validators from an API model")]
struct Cli {
    /// Path to the API model document (JSON)
    model: PathBuf,

    /// Output file (stdout when unset here and in config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to guardgen.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suppress the generated-file banner
    #[arg(long)]
    no_header: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = GeneratorConfig::load_from(cli.config.as_deref())?;
    if cli.no_header {
        config.output.header = false;
    }
    if let Some(output) = cli.output {
        config.output.path = Some(output);
    }

    tracing::debug!(model = %cli.model.display(), "loading model");
    let model = load_model(&cli.model)?;

    let report = lint_model(&model, &config.lint);
    for warning in &report.warnings {
        eprintln!("⚠️  [{}] {} ({})", warning.code, warning.message, warning.path);
    }
    for error in &report.errors {
        eprintln!("❌ [{}] {} ({})", error.code, error.message, error.path);
    }
    report.into_result()?;

    let output = generate(&model, &config.output)?;

    match &config.output.path {
        Some(path) => {
            std::fs::write(path, &output.code)?;
            println!(
                "✅ Wrote {} validator(s) to {} (fingerprint {})",
                output.predicate_count,
                path.display(),
                output.fingerprint
            );
        }
        None => {
            print!("{}", output.code);
        }
    }

    Ok(())
}
