//! restgen
//!
//! Generates a typed TypeScript REST client from a schema document.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use restgen_gen::output::generate_and_write;
use restgen_gen::source::{DEFAULT_SCHEMA_URL, SchemaSource, fetch_schema};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// restgen - generates a typed TypeScript REST client from a schema document
#[derive(Parser, Debug)]
#[command(name = "restgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Schema address: http(s) URL, `unix:<socket>[:<path>]`, or a file path
    #[arg(default_value = DEFAULT_SCHEMA_URL)]
    source: String,

    /// Output directory (replaced on every run)
    #[arg(default_value = "src/generated")]
    output: PathBuf,

    /// Print generated files instead of writing them
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize tracing based on verbosity level.
///
/// - 0 (default): WARN only
/// - 1 (-v): INFO (phases and summary)
/// - 2 (-vv): DEBUG (per model and per file)
/// - 3+ (-vvv): TRACE
///
/// `RUST_LOG` overrides the level when set.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,restgen_gen=info,restgen=info".to_string(),
            2 => "info,restgen_gen=debug,restgen=debug".to_string(),
            _ => "debug,restgen_gen=trace,restgen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source: SchemaSource = cli.source.parse()?;
    let schema = fetch_schema(&source)
        .await
        .wrap_err_with(|| format!("Could not load schema from {source}"))?;

    generate_and_write(&schema, &cli.output, cli.dry_run)
        .wrap_err_with(|| format!("Could not generate client into {}", cli.output.display()))?;

    Ok(())
}
