//! openapi-schema-resolver CLI
//!
//! Prints the resolved schema to stdout, or writes it to `--output` and
//! prints a JSON summary instead.

use clap::Parser;
use openapi_schema_resolver::{ResolveInput, ResolverConfig, SchemaResolver, resolve_schema};
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "openapi-schema-resolver", version, about)]
struct Cli {
    /// Write the schema to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Create missing parent directories of --output
    #[arg(long)]
    create_dirs: bool,

    /// Print a JSON summary instead of the document
    #[arg(long)]
    summary: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the document or summary
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ResolverConfig::from_env();
    tracing::debug!(
        environment = %config.environment_name,
        local_path = ?config.local_schema_path,
        "Loaded configuration"
    );

    let resolver = SchemaResolver::new(config)?;
    let input = ResolveInput {
        output: cli.output.clone(),
        create_dirs: cli.create_dirs,
    };
    let result = resolve_schema(&resolver, input).await;

    if !result.success {
        let message = result.error.unwrap_or_else(|| "unknown error".to_string());
        anyhow::bail!(message);
    }

    let mut stdout = std::io::stdout().lock();
    if cli.summary || cli.output.is_some() {
        serde_json::to_writer_pretty(&mut stdout, &result)?;
        writeln!(stdout)?;
    } else if let Some(document) = &result.document {
        stdout.write_all(document.as_str().as_bytes())?;
    }
    stdout.flush()?;

    Ok(())
}
