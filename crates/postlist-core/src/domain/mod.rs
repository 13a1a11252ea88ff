//! Core domain types.
//!
//! These types are shared between the controller, the listing port and
//! the adapters. They carry no transport details.
//!
//! # Structure
//!
//! - `post` - Listing items (`Post`) and the page envelope (`PostPage`)
//! - `query` - The composed listing query (`PostQuery`)

mod post;
mod query;

pub use post::{Post, PostId, PostPage};
pub use query::{DEFAULT_PAGE_SIZE, PostQuery};
