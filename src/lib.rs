//! Async client for the Feedly cloud API.
//!
//! A thin wrapper mapping Feedly's REST endpoints one-to-one onto methods of
//! [`FeedlyClient`]: OAuth token exchange, profile retrieval, subscription
//! listing, stream content fetch, read-state marking, and save-for-later
//! tagging. Every call is independent — build URL, attach headers, one HTTP
//! request, decode JSON — with no retries, caching, or token refresh
//! scheduling behind the caller's back.
//!
//! # Architecture
//!
//! - [`config`] - validated, immutable client configuration
//! - [`api`] - the client itself plus per-resource endpoint modules
//!
//! # Example
//!
//! ```no_run
//! use feedly::{ClientConfig, FeedlyClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = ClientConfig::new("my-client-id", "my-client-secret");
//! config.sandbox = true;
//! let client = FeedlyClient::new(config)?;
//!
//! // Send the user here, then trade the callback code for tokens.
//! println!("{}", client.authorization_url("https://example.com/callback"));
//! let tokens = client
//!     .exchange_code("https://example.com/callback", "code-from-callback")
//!     .await?;
//!
//! let profile = client.user_profile(&tokens.access_token).await?;
//! println!("signed in as {}", profile.id);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;

pub use api::{
    ApiError, Category, Entry, EntryText, FeedlyClient, Origin, Profile, RawResponse,
    StreamContents, Subscription, TokenResponse,
};
pub use config::{ClientConfig, ConfigError};
