//! Shared CLI presentation utilities.
//!
//! Keep this module format-only. Fetching and navigation live in the
//! handlers.

pub mod tables;

pub use tables::{format_posts_table, truncate_string};
