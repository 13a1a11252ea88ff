//! Test doubles for the listing port.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::domain::{Post, PostPage, PostQuery};
use crate::ports::{ListingError, ListingResult, PostListingPort};

/// A call observed by [`ScriptedListing`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub query: PostQuery,
    pub at: Instant,
}

enum Outcome {
    Page(PostPage),
    Failure(String),
}

struct Scripted {
    delay: Duration,
    outcome: Outcome,
}

/// Listing port that answers from a queue of scripted responses and
/// records every call with its (virtual) timestamp.
///
/// Once the queue is empty every call returns the fallback page.
pub struct ScriptedListing {
    script: Mutex<VecDeque<Scripted>>,
    fallback: PostPage,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedListing {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: PostPage::default(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_fallback(mut self, page: PostPage) -> Self {
        self.fallback = page;
        self
    }

    pub fn then_page(self, delay: Duration, page: PostPage) -> Self {
        self.script.lock().unwrap().push_back(Scripted {
            delay,
            outcome: Outcome::Page(page),
        });
        self
    }

    pub fn then_failure(self, delay: Duration, message: &str) -> Self {
        self.script.lock().unwrap().push_back(Scripted {
            delay,
            outcome: Outcome::Failure(message.to_string()),
        });
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PostListingPort for ScriptedListing {
    async fn list_posts(&self, query: &PostQuery) -> ListingResult<PostPage> {
        self.calls.lock().unwrap().push(RecordedCall {
            query: query.clone(),
            at: Instant::now(),
        });

        let next = self.script.lock().unwrap().pop_front();
        let Some(Scripted { delay, outcome }) = next else {
            return Ok(self.fallback.clone());
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match outcome {
            Outcome::Page(page) => Ok(page),
            Outcome::Failure(message) => Err(ListingError::Network { message }),
        }
    }
}

/// Build posts with the given ids and a matching title.
pub fn posts(ids: &[&str]) -> Vec<Post> {
    ids.iter()
        .map(|id| Post::new(*id).with_field("title", format!("Post {id}")))
        .collect()
}
