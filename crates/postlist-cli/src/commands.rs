//! Main commands enum and their arguments.

use clap::{Args, Subcommand};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one page of posts and print it
    Browse(BrowseArgs),
}

/// Arguments for the browse command.
#[derive(Debug, Clone, Args)]
pub struct BrowseArgs {
    /// Page to start on
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Posts per page
    #[arg(long = "page-size", default_value_t = 12)]
    pub page_size: u32,

    /// Free-text filter
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Tag filter (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Debounce delay for parameter changes, in milliseconds
    #[arg(long = "debounce-ms", default_value_t = 300)]
    pub debounce_ms: u64,

    /// Move to the next page after the first load
    #[arg(long, conflicts_with = "prev")]
    pub next: bool,

    /// Move to the previous page after the first load
    #[arg(long)]
    pub prev: bool,

    /// Print the state as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
