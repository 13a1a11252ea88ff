//! Command-line front end for browsing a remote post listing.
//!
//! The binary wires the HTTP listing client into a `ListController`, runs
//! one browse step and prints the settled state.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

// Used by main.rs binary
use postlist_http as _;
use tracing_subscriber as _;

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use commands::{BrowseArgs, Commands};
pub use parser::Cli;
