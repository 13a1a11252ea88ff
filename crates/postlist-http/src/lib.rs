#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultListingClient is meant to be used
// through the PostListingPort trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultListingClient;

// Configuration
pub use config::ListingClientConfig;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
