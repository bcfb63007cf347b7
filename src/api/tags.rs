//! Save-for-later tagging (`PUT v3/tags/...`).
//!
//! The tag resource id `user/<id>/tag/global.saved` contains slashes, and
//! the API expects it to travel as a single percent-encoded path segment —
//! `/` becomes `%2F`. The user id itself is encoded too, so arbitrary ids
//! cannot break out of the segment.

use crate::api::client::{ApiError, FeedlyClient, RawResponse};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;
use serde::Serialize;

/// Everything outside the RFC 3986 unreserved set stays escaped.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'_')
    .remove(b'~');

/// Path of the user's `global.saved` tag, as one encoded segment.
fn saved_tag_path(user_id: &str) -> String {
    format!(
        "v3/tags/user%2F{}%2Ftag%2Fglobal.saved",
        utf8_percent_encode(user_id, SEGMENT)
    )
}

/// Body for tagging entries.
#[derive(Debug, Serialize)]
struct TagRequest<'a> {
    #[serde(rename = "entryIds")]
    entry_ids: &'a [String],
}

impl FeedlyClient {
    /// Save one or more entries to the user's `global.saved` tag
    /// (Feedly's "read later" list).
    ///
    /// Returns the raw response, like [`mark_as_read`](Self::mark_as_read) —
    /// the endpoint has no documented body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] on network failure. Non-2xx statuses are not
    /// errors here; they arrive in [`RawResponse::status`].
    pub async fn save_for_later(
        &self,
        access_token: &str,
        user_id: &str,
        entry_ids: &[String],
    ) -> Result<RawResponse, ApiError> {
        tracing::debug!(entries = entry_ids.len(), "Saving entries for later");
        let path = saved_tag_path(user_id);
        self.send_json_raw(Method::PUT, &path, access_token, &TagRequest { entry_ids })
            .await
    }
}
