//! Subscription listing (`GET v3/subscriptions`).

use crate::api::client::{ApiError, FeedlyClient};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A category a subscription is filed under.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category id, e.g. `user/abcd-1234/category/tech`.
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// One feed the user is subscribed to.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Stream id of the feed, e.g. `feed/http://example.com/rss`.
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// The feed's website (not the XML URL).
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub visual_url: Option<String>,
    /// When the user subscribed (milliseconds since epoch on the wire).
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub added: Option<DateTime<Utc>>,
    /// Last time the feed was updated.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub updated: Option<DateTime<Utc>>,
    /// Fields beyond the documented schema (velocity, sortid, …).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeedlyClient {
    /// List the feeds the user is subscribed to.
    ///
    /// The endpoint returns a JSON array, not an object.
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] on network failure, [`ApiError::Status`] on a
    /// non-2xx response, [`ApiError::Decode`] on a malformed body.
    pub async fn subscriptions(&self, access_token: &str) -> Result<Vec<Subscription>, ApiError> {
        self.get_json("v3/subscriptions", access_token, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_subscription_list_deserialization() {
        let json = r#"[
            {
                "id": "feed/http://feeds.example.com/tech.rss",
                "title": "Example Tech",
                "website": "http://example.com",
                "categories": [
                    {"id": "user/abcd/category/tech", "label": "tech"}
                ],
                "visualUrl": "http://example.com/logo.png",
                "added": 1367539068016,
                "updated": 1367539168016,
                "velocity": 48.5
            },
            {
                "id": "feed/http://feeds.example.com/quiet.rss"
            }
        ]"#;
        let subs: Vec<Subscription> = serde_json::from_str(json).unwrap();
        assert_eq!(subs.len(), 2);

        let first = &subs[0];
        assert_eq!(first.id, "feed/http://feeds.example.com/tech.rss");
        assert_eq!(first.title.as_deref(), Some("Example Tech"));
        assert_eq!(first.categories.len(), 1);
        assert_eq!(first.categories[0].label.as_deref(), Some("tech"));
        assert_eq!(first.added.unwrap().timestamp_millis(), 1367539068016);
        assert_eq!(
            first.extra.get("velocity").and_then(Value::as_f64),
            Some(48.5)
        );

        let second = &subs[1];
        assert!(second.title.is_none());
        assert!(second.categories.is_empty());
        assert!(second.added.is_none());
    }

    #[test]
    fn test_empty_subscription_list() {
        let subs: Vec<Subscription> = serde_json::from_str("[]").unwrap();
        assert!(subs.is_empty());
    }
}
