//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the post listing browser.
#[derive(Parser)]
#[command(name = "postlist")]
#[command(about = "Browse a paginated, searchable post listing")]
#[command(version)]
pub struct Cli {
    /// Server base URL
    #[arg(
        long = "base-url",
        env = "POSTLIST_BASE_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    pub base_url: String,

    /// Path of the listing resource
    #[arg(long = "listing-path", default_value = "/api/v1/posts", global = true)]
    pub listing_path: String,

    /// Request timeout in seconds
    #[arg(long = "timeout-secs", default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "postlist",
            "--verbose",
            "--base-url",
            "https://blog.example.com",
            "browse",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.base_url, "https://blog.example.com");
        assert_eq!(cli.listing_path, "/api/v1/posts");
        assert_eq!(cli.timeout_secs, 30);
        assert!(matches!(cli.command, Some(Commands::Browse(_))));
    }
}
