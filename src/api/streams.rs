//! Stream content fetching (`GET v3/streams/contents`).
//!
//! A stream is Feedly's unit of readable content: a single feed, a user
//! category, or a system tag. The contents endpoint returns a page of
//! entries; pagination via the `continuation` token is the caller's business
//! (the token is surfaced but never followed automatically).

use crate::api::client::{ApiError, FeedlyClient};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Where an entry came from when it was crawled.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Origin {
    #[serde(default)]
    pub stream_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// A piece of entry text plus its reading direction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryText {
    #[serde(default)]
    pub content: Option<String>,
    /// `ltr` or `rtl`.
    #[serde(default)]
    pub direction: Option<String>,
}

/// One article within a stream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Entry id, the handle passed to the markers and tags endpoints.
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub unread: bool,
    /// Publication time claimed by the feed (milliseconds on the wire).
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub published: Option<DateTime<Utc>>,
    /// When Feedly's crawler picked the entry up.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub crawled: Option<DateTime<Utc>>,
    #[serde(default)]
    pub origin: Option<Origin>,
    #[serde(default)]
    pub summary: Option<EntryText>,
    #[serde(default)]
    pub content: Option<EntryText>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Fields beyond the documented schema (engagement, alternate links, …).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of a stream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamContents {
    /// The stream id the page belongs to.
    pub id: String,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub updated: Option<DateTime<Utc>>,
    /// Opaque token for requesting the next page. Never followed internally.
    #[serde(default)]
    pub continuation: Option<String>,
    #[serde(default)]
    pub items: Vec<Entry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeedlyClient {
    /// Fetch a page of entries from a stream.
    ///
    /// Query parameters are stringified the way the API expects:
    /// `unreadOnly` as `"true"`/`"false"`, `newerThan` as a fraction-free
    /// decimal (milliseconds since epoch).
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] on network failure, [`ApiError::Status`] on a
    /// non-2xx response, [`ApiError::Decode`] on a malformed body.
    pub async fn stream_contents(
        &self,
        access_token: &str,
        stream_id: &str,
        unread_only: bool,
        newer_than: i64,
    ) -> Result<StreamContents, ApiError> {
        let query = [
            ("streamId", stream_id.to_owned()),
            ("unreadOnly", unread_only.to_string()),
            ("newerThan", newer_than.to_string()),
        ];
        self.get_json("v3/streams/contents", access_token, &query)
            .await
    }
}
