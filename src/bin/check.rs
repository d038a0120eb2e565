//! Model Check CLI
//!
//! Validates an API model without writing output: lints the model, resolves
//! every predicate identifier, and compiles the whole document in memory.

use std::path::PathBuf;

use clap::Parser;
use guardgen::{generate, lint_model, load_model, GeneratorConfig, NameTable};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "guardgen-check")]
#[command(about = "Check an API model without writing generated code")]
struct Cli {
    /// Path to the API model document (JSON)
    model: PathBuf,

    /// Path to guardgen.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List every predicate identifier that would be generated
    #[arg(long)]
    list: bool,
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
    let config = GeneratorConfig::load_from(cli.config.as_deref())?;
    let model = load_model(&cli.model)?;

    println!(
        "🔍 Checking model: {} type(s), {} endpoint(s)",
        model.types.len(),
        model.endpoints.len()
    );
    for (name, descriptor) in &model.endpoints {
        println!("  {} {} ({})", descriptor.method, descriptor.route(), name);
    }

    let report = lint_model(&model, &config.lint);
    for warning in &report.warnings {
        println!("⚠️  [{}] {}", warning.code, warning.message);
    }
    for error in &report.errors {
        println!("❌ [{}] {}", error.code, error.message);
    }

    let table = NameTable::build(&model)?;
    if cli.list {
        println!();
        for identifier in table.identifiers() {
            println!("  {}", identifier);
        }
    }

    // Compile in memory to surface unresolved references and empty unions
    let output = generate(&model, &config.output)?;
    report.into_result()?;

    println!(
        "✅ {} predicate(s) compile cleanly (fingerprint {})",
        output.predicate_count, output.fingerprint
    );
    Ok(())
}
