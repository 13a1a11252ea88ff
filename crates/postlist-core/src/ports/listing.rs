//! Listing port trait.

use async_trait::async_trait;

use super::error::ListingResult;
use crate::domain::{PostPage, PostQuery};

/// Port trait for fetching one page of posts.
///
/// The controller calls this once per issued fetch. Implementations own
/// request timeouts; the controller imposes none.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostListingPort: Send + Sync {
    /// Fetch the page described by `query`.
    async fn list_posts(&self, query: &PostQuery) -> ListingResult<PostPage>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn PostListingPort>) {}
}
