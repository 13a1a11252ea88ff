//! Command handlers.
//!
//! Each handler receives its dependencies from `main.rs` and returns
//! `anyhow::Result`.

pub mod browse;
