//! CLI entry point - the composition root.
//!
//! Builds the HTTP listing client from the global flags and dispatches to
//! the command handlers.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use postlist_cli::{Cli, Commands, handlers};
use postlist_http::{DefaultListingClient, ListingClientConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so that `--json` output stays machine-readable
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = ListingClientConfig::new()
        .with_base_url(cli.base_url)
        .with_listing_path(cli.listing_path)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = Arc::new(DefaultListingClient::new(&config)?);

    match command {
        Commands::Browse(args) => handlers::browse::execute(client, &args).await,
    }
}
