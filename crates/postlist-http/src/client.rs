//! Listing client.
//!
//! Generic over its HTTP backend so that tests can swap in a fake.

use postlist_core::{ListingError, ListingResult};
use url::Url;

use crate::config::ListingClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::url::resolve_endpoint;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default listing client using the reqwest HTTP backend.
pub type DefaultListingClient = ListingClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the remote listing endpoint.
///
/// Use `DefaultListingClient` for production code and interact with it
/// through the `PostListingPort` trait.
pub struct ListingClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) endpoint: Url,
}

impl DefaultListingClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &ListingClientConfig) -> ListingResult<Self> {
        let endpoint = resolve_endpoint(&config.base_url, &config.listing_path)
            .map_err(|e| ListingError::Configuration {
                message: e.to_string(),
            })?;
        let backend = ReqwestBackend::new(&config.user_agent, config.timeout).map_err(|e| {
            ListingError::Configuration {
                message: e.to_string(),
            }
        })?;

        Ok(Self { backend, endpoint })
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> ListingResult<Self> {
        Self::new(&ListingClientConfig::default())
    }
}

impl<B: HttpBackend> ListingClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(endpoint: Url, backend: B) -> Self {
        Self { backend, endpoint }
    }

    /// The resolved listing endpoint, without query parameters.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}
