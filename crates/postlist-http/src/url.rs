//! URL construction helpers for the listing endpoint.
//!
//! Pure functions so that every request is built the same way and the
//! encoding rules can be tested without a server.

use postlist_core::PostQuery;
use url::Url;

use crate::error::{HttpError, HttpResult};

/// Resolve the listing endpoint from a base URL and a resource path.
///
/// Any path prefix on the base URL is kept, so `https://host/app` with
/// `/api/v1/posts` resolves to `https://host/app/api/v1/posts`.
pub fn resolve_endpoint(base_url: &str, listing_path: &str) -> HttpResult<Url> {
    let mut url = Url::parse(base_url)?;
    if url.cannot_be_a_base() {
        return Err(HttpError::InvalidConfig {
            message: format!("base URL cannot carry a path: {base_url}"),
        });
    }

    let path = format!(
        "{}/{}",
        url.path().trim_end_matches('/'),
        listing_path.trim_start_matches('/')
    );
    url.set_path(&path);
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Percent-encode each tag, then join with a literal comma.
///
/// A comma inside a tag name is encoded as `%2C`, so the separator stays
/// unambiguous.
pub fn encode_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| urlencoding::encode(tag))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build the listing URL for one query.
pub fn build_listing_url(endpoint: &Url, query: &PostQuery) -> Url {
    let mut url = endpoint.clone();

    let query_string = format!(
        "page={}&pageSize={}&searchQuery={}&tags={}",
        query.page,
        query.page_size,
        urlencoding::encode(&query.search_query),
        encode_tags(&query.tags)
    );
    url.set_query(Some(&query_string));

    url
}
