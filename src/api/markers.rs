//! Read-state marking (`POST v3/markers`).

use crate::api::client::{ApiError, FeedlyClient, RawResponse};
use reqwest::Method;
use serde::Serialize;

/// Body for a mark-as-read action on individual entries.
#[derive(Debug, Serialize)]
struct MarkerRequest<'a> {
    action: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "entryIds")]
    entry_ids: &'a [String],
}

impl FeedlyClient {
    /// Mark one or more entries as read.
    ///
    /// Returns the raw response — Feedly documents no body for this
    /// endpoint, so no status mapping or decoding is applied; the asymmetry
    /// with the decoded read endpoints is intentional.
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] on network failure. Non-2xx statuses are not
    /// errors here; they arrive in [`RawResponse::status`].
    pub async fn mark_as_read(
        &self,
        access_token: &str,
        entry_ids: &[String],
    ) -> Result<RawResponse, ApiError> {
        tracing::debug!(entries = entry_ids.len(), "Marking entries as read");
        let body = MarkerRequest {
            action: "markAsRead",
            kind: "entries",
            entry_ids,
        };
        self.send_json_raw(Method::POST, "v3/markers", access_token, &body)
            .await
    }
}
