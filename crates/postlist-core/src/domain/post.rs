//! Listing items and the page envelope returned by the listing endpoint.
//!
//! The backend owns the shape of a post. Apart from its identifier the
//! controller treats every post as an opaque JSON record.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Identifier of a post.
///
/// Backends disagree on whether ids are strings or integers, so both are
/// accepted and normalised to their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Create an id from its textual form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the textual form of the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

/// A single listing item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier (`id` or `_id` on the wire)
    #[serde(alias = "_id")]
    pub id: PostId,
    /// Every other field, kept verbatim
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Post {
    /// Create a post with no fields besides its id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: PostId::new(id),
            fields: Map::new(),
        }
    }

    /// Builder-style helper to attach a field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Look up a field by name.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The post title, if the backend sends one as a string.
    pub fn title(&self) -> Option<&str> {
        self.field("title").and_then(Value::as_str)
    }
}

/// One page of listing results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    /// Posts on this page
    pub posts: Vec<Post>,
    /// Total number of pages for the query
    pub total_pages: u32,
}

impl Default for PostPage {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            total_pages: 1,
        }
    }
}

impl PostPage {
    /// Create a page from its parts.
    pub const fn new(posts: Vec<Post>, total_pages: u32) -> Self {
        Self { posts, total_pages }
    }
}
