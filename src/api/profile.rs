//! User profile retrieval (`GET v3/user`).

use crate::api::client::{ApiError, FeedlyClient};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A Feedly user profile.
///
/// Only `id` is guaranteed by the API; the identity-provider fields come and
/// go depending on how the account was linked, and anything undocumented is
/// preserved in `extra`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Feedly user id, e.g. `user/abcd-1234`.
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    /// Product wave the account is on, e.g. `2013.26`.
    #[serde(default)]
    pub wave: Option<String>,
    /// Client that created the account.
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// Account creation time (Feedly serves milliseconds since epoch).
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Fields beyond the documented schema (twitter/google/reader handles, …).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeedlyClient {
    /// Fetch the profile of the user the access token belongs to.
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] on network failure, [`ApiError::Status`] on a
    /// non-2xx response, [`ApiError::Decode`] on a malformed body.
    pub async fn user_profile(&self, access_token: &str) -> Result<Profile, ApiError> {
        self.get_json("v3/user", access_token, &[]).await
    }
}
