//! Consumer-facing controller state.

use serde::Serialize;

use crate::domain::Post;

/// Snapshot of everything a renderer needs.
///
/// A fresh snapshot is published after every transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListState {
    /// Posts from the last successful fetch
    pub posts: Vec<Post>,
    /// True while the latest issued fetch is outstanding
    pub loading: bool,
    /// User-facing message from the last failed fetch
    pub error: Option<String>,
    /// Current 1-based page
    pub page: u32,
    /// Total pages reported by the last successful fetch (at least 1)
    pub total_pages: u32,
}

impl ListState {
    pub(crate) const fn initial(page: u32) -> Self {
        Self {
            posts: Vec::new(),
            loading: true,
            error: None,
            page,
            total_pages: 1,
        }
    }

    /// True when a previous page exists.
    pub const fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    /// True when a next page exists.
    pub const fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}
