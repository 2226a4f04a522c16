//! Thali CLI binary.

use anyhow::Result;
use thali::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the thali CLI.
fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=thali=debug cargo run -- search biryani
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("thali=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting thali CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Thali CLI completed successfully");
    Ok(())
}
