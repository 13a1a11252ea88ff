//! Port trait implementation for `ListingClient`.
//!
//! This module implements the core-owned `PostListingPort` trait, handling
//! the conversion between internal HTTP errors and core port errors.

use async_trait::async_trait;
use postlist_core::{ListingError, ListingResult, PostListingPort, PostPage, PostQuery};
use tracing::debug;

use crate::client::ListingClient;
use crate::error::HttpError;
use crate::http::HttpBackend;
use crate::url::build_listing_url;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `HttpError` to core `ListingError`.
fn map_error(err: HttpError) -> ListingError {
    match err {
        HttpError::RequestFailed { status, .. } => ListingError::Status { status },
        HttpError::InvalidConfig { message } => ListingError::Configuration { message },
        HttpError::Network(e) if e.is_decode() => ListingError::InvalidResponse {
            message: e.to_string(),
        },
        HttpError::Network(e) => ListingError::Network {
            message: e.to_string(),
        },
        HttpError::InvalidUrl(e) => ListingError::Configuration {
            message: e.to_string(),
        },
        HttpError::JsonParse(e) => ListingError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> PostListingPort for ListingClient<B> {
    async fn list_posts(&self, query: &PostQuery) -> ListingResult<PostPage> {
        let url = build_listing_url(&self.endpoint, query);
        debug!(%url, "Requesting post listing");

        self.backend.get_json(&url).await.map_err(map_error)
    }
}
