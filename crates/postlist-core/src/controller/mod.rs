//! Fetch-debounce-pagination controller.
//!
//! The controller owns the current page, the filter parameters and the
//! list state shown by a renderer. It decides when to hit the listing port:
//!
//! - once, immediately, when it is started
//! - immediately on [`ListController::refresh`]
//! - after a quiet period of `debounce_delay` following any change to the
//!   tracked parameters (page, page size, search text, tags, debounce delay)
//!
//! # Ordering
//!
//! Every issued fetch gets a monotonically increasing sequence number. Only
//! the response to the latest issued fetch may touch the state; older
//! responses are dropped when they arrive.
//!
//! # Lifecycle
//!
//! At most one debounce timer exists at any time. Scheduling a new one,
//! refreshing, deactivating or dropping the controller cancels the
//! outstanding timer. Once deactivated, late timers and responses are ignored.

mod error;
mod options;
mod state;

pub use error::ControllerError;
pub use options::{ControllerOptions, DEFAULT_DEBOUNCE_DELAY};
pub use state::ListState;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::domain::{PostPage, PostQuery};
use crate::ports::{ListingResult, PostListingPort};

/// Message stored in [`ListState::error`] when a fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch posts";

/// Handle for the outstanding debounce timer.
struct PendingFetch {
    cancel_token: CancellationToken,
}

/// Mutable controller state. Only touched while holding the lock, and the
/// lock is never held across an `.await`.
struct Inner {
    query: PostQuery,
    debounce_delay: Duration,
    state: ListState,
    active: bool,
    latest_seq: u64,
    pending: Option<PendingFetch>,
}

impl Inner {
    fn set_page(&mut self, page: u32) {
        self.query.page = page;
        self.state.page = page;
    }

    /// Cancel the outstanding timer, if any. Returns whether one existed.
    fn cancel_pending(&mut self) -> bool {
        self.pending
            .take()
            .map(|pending| pending.cancel_token.cancel())
            .is_some()
    }
}

/// State shared between the controller handle and its spawned tasks.
struct Shared {
    port: Arc<dyn PostListingPort>,
    inner: Mutex<Inner>,
    state_tx: watch::Sender<ListState>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &ListState) {
        self.state_tx.send_if_modified(|current| {
            if current == state {
                false
            } else {
                current.clone_from(state);
                true
            }
        });
    }

    /// Issue a fetch for the current query right away.
    fn issue_fetch(self: &Arc<Self>, inner: &mut Inner) {
        inner.latest_seq += 1;
        let seq = inner.latest_seq;
        let query = inner.query.clone();

        inner.state.loading = true;
        inner.state.error = None;
        self.publish(&inner.state);

        debug!(
            seq,
            page = query.page,
            page_size = query.page_size,
            search = %query.search_query,
            tags = ?query.tags,
            "Issuing listing fetch"
        );

        let shared = Arc::clone(self);
        tokio::spawn(async move {
            let result = shared.port.list_posts(&query).await;
            shared.complete_fetch(seq, result);
        });
    }

    /// Replace any outstanding timer with a new one for `debounce_delay`.
    fn schedule_fetch(self: &Arc<Self>, inner: &mut Inner) {
        if inner.cancel_pending() {
            debug!("Cancelled superseded fetch timer");
        }

        let cancel_token = CancellationToken::new();
        let timer_token = cancel_token.clone();
        let delay = inner.debounce_delay;
        let shared = Arc::clone(self);

        tokio::spawn(async move {
            tokio::select! {
                () = tokio::time::sleep(delay) => shared.fire_timer(&timer_token),
                () = timer_token.cancelled() => {}
            }
        });

        inner.pending = Some(PendingFetch { cancel_token });
        debug!(?delay, "Scheduled debounced fetch");
    }

    fn fire_timer(self: &Arc<Self>, token: &CancellationToken) {
        let mut inner = self.lock();
        // Cancellation happens under this lock, so a timer that lost the race
        // with a reschedule or teardown sees its token cancelled here.
        if token.is_cancelled() || !inner.active {
            return;
        }
        inner.pending = None;
        self.issue_fetch(&mut inner);
    }

    fn complete_fetch(&self, seq: u64, result: ListingResult<PostPage>) {
        let mut inner = self.lock();
        if !inner.active {
            debug!(seq, "Dropping listing response for deactivated controller");
            return;
        }
        if seq != inner.latest_seq {
            debug!(
                seq,
                latest = inner.latest_seq,
                "Dropping stale listing response"
            );
            return;
        }

        match result {
            Ok(page) => {
                debug!(
                    seq,
                    posts = page.posts.len(),
                    total_pages = page.total_pages,
                    "Listing fetch succeeded"
                );
                inner.state.posts = page.posts;
                inner.state.total_pages = page.total_pages.max(1);
            }
            Err(err) => {
                warn!(seq, error = %err, "Listing fetch failed");
                inner.state.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        inner.state.loading = false;
        self.publish(&inner.state);
    }
}

/// Drives a paginated, filterable post list against a [`PostListingPort`].
///
/// Must be started from within a tokio runtime. Dropping the controller
/// deactivates it.
pub struct ListController {
    shared: Arc<Shared>,
}

impl ListController {
    /// Validate `options`, activate the controller and issue the first
    /// fetch immediately.
    ///
    /// # Panics
    ///
    /// Panics if called outside the context of a tokio runtime.
    pub fn start(
        port: Arc<dyn PostListingPort>,
        options: ControllerOptions,
    ) -> Result<Self, ControllerError> {
        options.validate()?;

        let query = options.initial_query();
        let state = ListState::initial(query.page);
        let (state_tx, _) = watch::channel(state.clone());

        let shared = Arc::new(Shared {
            port,
            inner: Mutex::new(Inner {
                query,
                debounce_delay: options.debounce_delay,
                state,
                active: true,
                latest_seq: 0,
                pending: None,
            }),
            state_tx,
        });

        {
            let mut inner = shared.lock();
            debug!(
                page = inner.query.page,
                page_size = inner.query.page_size,
                "List controller activated"
            );
            shared.issue_fetch(&mut inner);
        }

        Ok(Self { shared })
    }

    /// Apply a parameter change and, when something actually changed,
    /// debounce a fetch for it.
    fn change(&self, operation: &'static str, apply: impl FnOnce(&mut Inner) -> bool) -> bool {
        let mut inner = self.shared.lock();
        if !inner.active {
            debug!(operation, "Ignoring change on deactivated controller");
            return false;
        }
        if !apply(&mut *inner) {
            return false;
        }
        self.shared.publish(&inner.state);
        self.shared.schedule_fetch(&mut inner);
        true
    }

    /// Move one page back. No-op on the first page.
    pub fn go_to_previous_page(&self) -> bool {
        self.change("previous_page", |inner| {
            if inner.query.page <= 1 {
                return false;
            }
            inner.set_page(inner.query.page - 1);
            true
        })
    }

    /// Move one page forward. No-op on the last known page.
    pub fn go_to_next_page(&self) -> bool {
        self.change("next_page", |inner| {
            if inner.query.page >= inner.state.total_pages {
                return false;
            }
            inner.set_page(inner.query.page + 1);
            true
        })
    }

    /// Jump to `page`, clamped into `1..=total_pages`.
    ///
    /// Returns the page the controller is on afterwards.
    pub fn go_to_page(&self, page: u32) -> u32 {
        self.change("go_to_page", |inner| {
            let target = page.clamp(1, inner.state.total_pages.max(1));
            if target != page {
                debug!(requested = page, target, "Clamped page into known range");
            }
            if target == inner.query.page {
                return false;
            }
            inner.set_page(target);
            true
        });
        self.page()
    }

    /// Re-fetch the current parameter set immediately, superseding any
    /// pending debounced fetch.
    pub fn refresh(&self) -> bool {
        let mut inner = self.shared.lock();
        if !inner.active {
            debug!("Ignoring refresh on deactivated controller");
            return false;
        }
        if inner.cancel_pending() {
            debug!("Refresh superseded pending fetch timer");
        }
        self.shared.issue_fetch(&mut inner);
        true
    }

    /// Update the free-text filter.
    pub fn set_search_query(&self, search_query: impl Into<String>) -> bool {
        let search_query = search_query.into();
        self.change("search_query", |inner| {
            if inner.query.search_query == search_query {
                return false;
            }
            inner.query.search_query = search_query;
            true
        })
    }

    /// Update the tag filter. The same tags in a different order count as
    /// a change.
    pub fn set_tags<I, S>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        self.change("tags", |inner| {
            if inner.query.tags == tags {
                return false;
            }
            inner.query.tags = tags;
            true
        })
    }

    /// Update the page size.
    pub fn set_page_size(&self, page_size: u32) -> Result<bool, ControllerError> {
        if page_size == 0 {
            return Err(ControllerError::InvalidPageSize);
        }
        Ok(self.change("page_size", |inner| {
            if inner.query.page_size == page_size {
                return false;
            }
            inner.query.page_size = page_size;
            true
        }))
    }

    /// Update the debounce delay. The pending timer, if any, is rescheduled
    /// with the new delay.
    pub fn set_debounce_delay(&self, delay: Duration) -> bool {
        self.change("debounce_delay", |inner| {
            if inner.debounce_delay == delay {
                return false;
            }
            inner.debounce_delay = delay;
            true
        })
    }

    /// Cancel the pending timer and stop reacting to responses.
    ///
    /// A fetch still in flight is abandoned, so `loading` is cleared and the
    /// final state is published once.
    pub fn deactivate(&self) {
        let mut inner = self.shared.lock();
        if !inner.active {
            return;
        }
        inner.active = false;
        let cancelled_timer = inner.cancel_pending();
        inner.state.loading = false;
        self.shared.publish(&inner.state);
        debug!(cancelled_timer, "List controller deactivated");
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ListState {
        self.shared.lock().state.clone()
    }

    /// Receiver that observes every published state transition.
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.shared.state_tx.subscribe()
    }

    /// The query the next fetch would use.
    pub fn query(&self) -> PostQuery {
        self.shared.lock().query.clone()
    }

    /// Current page.
    pub fn page(&self) -> u32 {
        self.shared.lock().query.page
    }

    /// Current debounce delay.
    pub fn debounce_delay(&self) -> Duration {
        self.shared.lock().debounce_delay
    }

    /// True until [`deactivate`](Self::deactivate) is called.
    pub fn is_active(&self) -> bool {
        self.shared.lock().active
    }

    /// True while a debounced fetch is waiting for its quiet period.
    pub fn has_pending_fetch(&self) -> bool {
        self.shared.lock().pending.is_some()
    }
}

impl Drop for ListController {
    fn drop(&mut self) {
        self.deactivate();
    }
}
