//! Browse command handler.
//!
//! Starts a `ListController` against the listing port, waits for the
//! first settled state, optionally moves one page and prints the result.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use postlist_core::{ControllerOptions, ListController, ListState, PostListingPort};
use tokio::sync::watch;
use tracing::debug;

use crate::commands::BrowseArgs;
use crate::presentation::format_posts_table;

/// Execute the browse command.
///
/// # Errors
///
/// Returns an error if the options are invalid or the fetch failed.
pub async fn execute(port: Arc<dyn PostListingPort>, args: &BrowseArgs) -> Result<()> {
    let state = browse(port, args).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", format_posts_table(&state));
    }

    if let Some(error) = state.error {
        bail!(error);
    }
    Ok(())
}

/// Run one browse step and return the settled state.
pub async fn browse(port: Arc<dyn PostListingPort>, args: &BrowseArgs) -> Result<ListState> {
    let options = ControllerOptions::new()
        .with_initial_page(args.page)
        .with_page_size(args.page_size)
        .with_search_query(args.search.clone())
        .with_tags(args.tags.iter().cloned())
        .with_debounce_delay(Duration::from_millis(args.debounce_ms));

    let controller = ListController::start(port, options).context("Invalid browse options")?;
    let mut updates = controller.subscribe();

    let mut state = wait_until_settled(&controller, &mut updates).await?;

    let moved = if args.next {
        controller.go_to_next_page()
    } else if args.prev {
        controller.go_to_previous_page()
    } else {
        false
    };
    if moved {
        debug!(page = controller.page(), "Navigated, waiting for debounced fetch");
        state = wait_until_settled(&controller, &mut updates).await?;
    }

    controller.deactivate();
    Ok(state)
}

/// Wait until no fetch is pending or outstanding.
///
/// The pending flag is read before the state so that a timer firing in
/// between still shows up as `loading`.
async fn wait_until_settled(
    controller: &ListController,
    updates: &mut watch::Receiver<ListState>,
) -> Result<ListState> {
    loop {
        let pending = controller.has_pending_fetch();
        let state = updates.borrow_and_update().clone();
        if !pending && !state.loading {
            return Ok(state);
        }
        updates
            .changed()
            .await
            .context("List controller stopped publishing")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use postlist_core::{ListingError, ListingResult, Post, PostPage, PostQuery};
    use std::sync::Mutex;

    /// Serves `total_pages` pages with one post each, named after the page.
    struct PagedListing {
        total_pages: u32,
        fail: bool,
        queries: Mutex<Vec<PostQuery>>,
    }

    impl PagedListing {
        fn new(total_pages: u32) -> Self {
            Self {
                total_pages,
                fail: false,
                queries: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new(1)
            }
        }
    }

    #[async_trait]
    impl PostListingPort for PagedListing {
        async fn list_posts(&self, query: &PostQuery) -> ListingResult<PostPage> {
            self.queries.lock().unwrap().push(query.clone());
            if self.fail {
                return Err(ListingError::Status { status: 500 });
            }
            let post = Post::new(format!("p{}", query.page)).with_field("title", "Post");
            Ok(PostPage::new(vec![post], self.total_pages))
        }
    }

    fn args() -> BrowseArgs {
        BrowseArgs {
            page: 1,
            page_size: 12,
            search: String::new(),
            tags: Vec::new(),
            debounce_ms: 5,
            next: false,
            prev: false,
            json: false,
        }
    }

    #[tokio::test]
    async fn test_browse_first_page() {
        let listing = Arc::new(PagedListing::new(3));
        let state = browse(listing.clone(), &args()).await.unwrap();

        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.posts[0].id.as_str(), "p1");
        assert!(!state.loading);
        assert_eq!(listing.queries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_browse_next_waits_for_debounced_fetch() {
        let listing = Arc::new(PagedListing::new(3));
        let state = browse(
            listing.clone(),
            &BrowseArgs {
                next: true,
                search: "rust".to_string(),
                tags: vec!["async".to_string()],
                ..args()
            },
        )
        .await
        .unwrap();

        assert_eq!(state.page, 2);
        assert_eq!(state.posts[0].id.as_str(), "p2");

        let queries = listing.queries.lock().unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[1].search_query, "rust");
        assert_eq!(queries[1].tags, vec!["async"]);
    }

    #[tokio::test]
    async fn test_browse_prev_on_first_page_does_not_refetch() {
        let listing = Arc::new(PagedListing::new(3));
        let state = browse(
            listing.clone(),
            &BrowseArgs {
                prev: true,
                ..args()
            },
        )
        .await
        .unwrap();

        assert_eq!(state.page, 1);
        assert_eq!(listing.queries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_browse_failure_keeps_message() {
        let state = browse(Arc::new(PagedListing::failing()), &args())
            .await
            .unwrap();

        assert_eq!(state.error.as_deref(), Some(postlist_core::FETCH_FAILED_MESSAGE));
        assert!(state.posts.is_empty());
    }

    #[tokio::test]
    async fn test_browse_rejects_zero_page_size() {
        let result = browse(
            Arc::new(PagedListing::new(1)),
            &BrowseArgs {
                page_size: 0,
                ..args()
            },
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_execute_reports_fetch_failure() {
        let result = execute(Arc::new(PagedListing::failing()), &args()).await;
        tokio_test::assert_err!(result);
    }
}
