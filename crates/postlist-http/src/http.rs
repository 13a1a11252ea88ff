//! HTTP backend abstraction for the listing endpoint.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and performs exactly one attempt per request.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{HttpError, HttpResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `PostListingPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Issue a GET request and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HttpResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend.
    pub fn new(user_agent: &str, timeout: Duration) -> HttpResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::InvalidConfig {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HttpResult<T> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "Listing endpoint responded");
        if !status.is_success() {
            return Err(HttpError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Decode from bytes so malformed bodies surface as JSON errors
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reqwest_backend_creation() {
        let backend = ReqwestBackend::new("postlist-test", Duration::from_secs(5));
        assert!(backend.is_ok());
    }

    #[tokio::test]
    async fn test_fake_backend_returns_canned_json() {
        let backend = FakeBackend::new(CannedResponse::Json(json!({"totalPages": 2})));

        let url = Url::parse("http://localhost/api/v1/posts?page=1").unwrap();
        let result: serde_json::Value = backend.get_json(&url).await.unwrap();

        assert_eq!(result["totalPages"], 2);
        assert_eq!(backend.requested(), vec![url]);
    }

    #[tokio::test]
    async fn test_fake_backend_returns_status_error() {
        let backend = FakeBackend::new(CannedResponse::Status(404));
        let url = Url::parse("http://localhost/unknown").unwrap();

        let result: HttpResult<serde_json::Value> = backend.get_json(&url).await;
        assert!(matches!(
            result,
            Err(HttpError::RequestFailed { status: 404, .. })
        ));
    }
}
