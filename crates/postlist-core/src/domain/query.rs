//! The composed listing query.

use serde::{Deserialize, Serialize};

/// Default number of posts per page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Parameters sent to the listing endpoint for one fetch.
///
/// Tag order is preserved so that the same tag list always produces the
/// same request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostQuery {
    /// 1-based page number
    pub page: u32,
    /// Posts per page
    pub page_size: u32,
    /// Free-text filter (empty means no filter)
    pub search_query: String,
    /// Tag filter
    pub tags: Vec<String>,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search_query: String::new(),
            tags: Vec::new(),
        }
    }
}

impl PostQuery {
    /// Create a query for the first page with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the free-text filter.
    #[must_use]
    pub fn with_search_query(mut self, search_query: impl Into<String>) -> Self {
        self.search_query = search_query.into();
        self
    }

    /// Set the tag filter.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Tags joined with commas, without any encoding.
    pub fn joined_tags(&self) -> String {
        self.tags.join(",")
    }
}
