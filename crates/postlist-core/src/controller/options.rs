//! Construction-time configuration for the list controller.

use std::time::Duration;

use super::error::ControllerError;
use crate::domain::{DEFAULT_PAGE_SIZE, PostQuery};

/// Default quiet period before re-fetching after a parameter change.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Options for starting a [`ListController`](super::ListController).
///
/// # Example
///
/// ```
/// use postlist_core::ControllerOptions;
/// use std::time::Duration;
///
/// let options = ControllerOptions::new()
///     .with_page_size(24)
///     .with_search_query("tokio")
///     .with_tags(["async"])
///     .with_debounce_delay(Duration::from_millis(150));
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOptions {
    pub(crate) initial_page: u32,
    pub(crate) page_size: u32,
    pub(crate) search_query: String,
    pub(crate) tags: Vec<String>,
    pub(crate) debounce_delay: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            initial_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search_query: String::new(),
            tags: Vec::new(),
            debounce_delay: DEFAULT_DEBOUNCE_DELAY,
        }
    }
}

impl ControllerOptions {
    /// Create options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting page. Must be at least 1.
    #[must_use]
    pub const fn with_initial_page(mut self, page: u32) -> Self {
        self.initial_page = page;
        self
    }

    /// Set the page size. Must be at least 1.
    ///
    /// Defaults to 12.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the initial free-text filter.
    #[must_use]
    pub fn with_search_query(mut self, search_query: impl Into<String>) -> Self {
        self.search_query = search_query.into();
        self
    }

    /// Set the initial tag filter.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the debounce delay.
    ///
    /// Defaults to 300ms.
    #[must_use]
    pub const fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }

    /// Check that the options describe a reachable state.
    pub fn validate(&self) -> Result<(), ControllerError> {
        if self.initial_page == 0 {
            return Err(ControllerError::InvalidOptions {
                message: "initial page must be at least 1".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(ControllerError::InvalidOptions {
                message: "page size must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn initial_query(&self) -> PostQuery {
        PostQuery {
            page: self.initial_page,
            page_size: self.page_size,
            search_query: self.search_query.clone(),
            tags: self.tags.clone(),
        }
    }
}
