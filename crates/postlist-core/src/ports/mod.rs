//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or URL types in any signature
//! - Every transport failure is reported as a `ListingError`

mod error;
mod listing;

pub use error::{ListingError, ListingResult};
pub use listing::PostListingPort;

#[cfg(test)]
pub use listing::MockPostListingPort;
