//! Core domain types, the listing port, and the fetch-debounce-pagination
//! controller that drives a paginated, searchable, tag-filterable post list.
//!
//! The controller never talks to the network directly. It calls a
//! [`PostListingPort`] implementation (see `postlist-http`) and publishes
//! every state transition to its subscribers.
#![deny(unused_crate_dependencies)]

pub mod controller;
pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use controller::{
    ControllerError, ControllerOptions, DEFAULT_DEBOUNCE_DELAY, FETCH_FAILED_MESSAGE,
    ListController, ListState,
};
pub use domain::{DEFAULT_PAGE_SIZE, Post, PostId, PostPage, PostQuery};
pub use ports::{ListingError, ListingResult, PostListingPort};

#[cfg(test)]
pub(crate) mod testing;
