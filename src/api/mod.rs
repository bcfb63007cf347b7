//! The Feedly API surface, one module per remote resource.
//!
//! All endpoint methods hang off [`FeedlyClient`] and share its request
//! plumbing; the modules exist to keep each resource's types and tests next
//! to the operation that uses them:
//!
//! - `client` - `FeedlyClient`, `ApiError`, `RawResponse`
//! - `auth` - OAuth authorization URL and token exchange
//! - `profile` - the signed-in user
//! - `subscriptions` - the user's feed list
//! - `streams` - entry pages for a feed, category, or tag
//! - `markers` - read-state writes
//! - `tags` - save-for-later writes

mod auth;
mod client;
mod markers;
mod profile;
mod streams;
mod subscriptions;
mod tags;

pub use auth::TokenResponse;
pub use client::{ApiError, FeedlyClient, RawResponse};
pub use profile::Profile;
pub use streams::{Entry, EntryText, Origin, StreamContents};
pub use subscriptions::{Category, Subscription};
