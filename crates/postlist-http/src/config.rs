//! Public configuration for the listing client.
//!
//! This module provides a stable public API for configuring the HTTP client.
//! The resolved endpoint URL is derived from it when the client is built.

use std::time::Duration;

/// Default server the client talks to.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default path of the listing resource.
pub const DEFAULT_LISTING_PATH: &str = "/api/v1/posts";

/// Configuration for the listing client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use postlist_http::ListingClientConfig;
/// use std::time::Duration;
///
/// let config = ListingClientConfig::new()
///     .with_base_url("https://blog.example.com")
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ListingClientConfig {
    /// Scheme, host and optional path prefix of the server
    pub(crate) base_url: String,
    /// Path of the listing resource below `base_url`
    pub(crate) listing_path: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for ListingClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            user_agent: concat!("postlist-http/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ListingClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server base URL.
    ///
    /// Defaults to `http://localhost:3000`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the listing resource path.
    ///
    /// Defaults to `/api/v1/posts`.
    #[must_use]
    pub fn with_listing_path(mut self, path: impl Into<String>) -> Self {
        self.listing_path = path.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ListingClientConfig::new();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.listing_path, "/api/v1/posts");
        assert!(config.user_agent.contains("postlist-http"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ListingClientConfig::new()
            .with_base_url("https://custom.api/")
            .with_listing_path("/v2/articles")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "https://custom.api/");
        assert_eq!(config.listing_path, "/v2/articles");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
