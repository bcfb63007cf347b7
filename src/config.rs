//! Client configuration for the Feedly API.
//!
//! `ClientConfig` is assembled once by the caller and handed to
//! [`FeedlyClient::new`](crate::FeedlyClient::new), which validates it and
//! owns it for the lifetime of the client. There is no file- or
//! environment-based configuration layer — credentials arrive as explicit
//! typed fields, and construction fails fast on missing or malformed values
//! instead of panicking on first use.
//!
//! `client_secret`, `token`, and `secret` are held as [`SecretString`] and
//! masked in `Debug` output to prevent credential leakage in logs, error
//! messages, and debug dumps.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("client_id must not be empty")]
    MissingClientId,

    #[error("client_secret must not be empty")]
    MissingClientSecret,

    /// An additional header name is not a valid HTTP header name.
    #[error("Invalid header name in additional_headers: {0}")]
    InvalidHeaderName(String),

    /// An additional header value contains bytes HTTP forbids (e.g. newlines).
    #[error("Invalid header value in additional_headers for key: {0}")]
    InvalidHeaderValue(String),

    /// The service base URL could not be parsed.
    #[error("Invalid service base URL: {0}")]
    InvalidServiceBase(String),

    /// The service base URL is plain HTTP on a non-loopback host.
    #[error("Insecure service base URL: HTTPS required (except localhost for testing): {0}")]
    InsecureServiceBase(String),
}

// ============================================================================
// Configuration
// ============================================================================

/// Identity and credential material for a [`FeedlyClient`](crate::FeedlyClient).
///
/// Created once at startup and never mutated after the client takes
/// ownership. The sandbox flag selects which API host every request targets.
pub struct ClientConfig {
    /// OAuth client identifier issued by Feedly.
    pub client_id: String,

    /// OAuth client secret paired with `client_id`.
    pub client_secret: SecretString,

    /// Target `sandbox.feedly.com` instead of `cloud.feedly.com`.
    pub sandbox: bool,

    /// Fixed headers merged into every request (e.g. tracing or partner IDs).
    pub additional_headers: HashMap<String, String>,

    /// Previously obtained access token, stored for the caller's convenience.
    /// Endpoint methods take the token explicitly; this field is never read
    /// implicitly and no expiry tracking is performed on it.
    pub token: Option<SecretString>,

    /// Previously obtained refresh secret, stored for the caller's convenience.
    pub secret: Option<SecretString>,
}

impl ClientConfig {
    /// Create a configuration with the required credential pair.
    ///
    /// Remaining fields start empty: production host, no additional headers,
    /// no stored token material.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
            sandbox: false,
            additional_headers: HashMap::new(),
            token: None,
            secret: None,
        }
    }

    /// Check the validated-construction contract.
    ///
    /// Called by `FeedlyClient::new` so an unusable configuration is rejected
    /// up front rather than surfacing as a confusing HTTP 401 later.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.client_id.trim().is_empty() {
            return Err(ConfigError::MissingClientId);
        }
        if self.client_secret.expose_secret().trim().is_empty() {
            return Err(ConfigError::MissingClientSecret);
        }
        Ok(())
    }

    /// Convert `additional_headers` into a typed header map.
    ///
    /// Parsing happens once at client construction; a bad header name or
    /// value fails here instead of on every request.
    pub(crate) fn header_map(&self) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::with_capacity(self.additional_headers.len());
        for (name, value) in &self.additional_headers {
            let header_name = name
                .parse::<HeaderName>()
                .map_err(|_| ConfigError::InvalidHeaderName(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| ConfigError::InvalidHeaderValue(name.clone()))?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }
}

/// Mask credential fields in Debug output to prevent secret leakage.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("sandbox", &self.sandbox)
            .field("additional_headers", &self.additional_headers)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
