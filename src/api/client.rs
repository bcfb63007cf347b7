//! Client core: construction, service-base resolution, and the shared
//! request plumbing every endpoint method goes through.

use crate::config::{ClientConfig, ConfigError};
use futures::StreamExt;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use url::Url;

/// Production API host.
const CLOUD_BASE: &str = "https://cloud.feedly.com";

/// Sandbox API host for testing without touching production data.
const SANDBOX_BASE: &str = "https://sandbox.feedly.com";

/// Response bodies larger than this are rejected rather than buffered.
const MAX_RESPONSE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Errors that can occur during an API call.
///
/// Every method performs exactly one HTTP request: a failure is surfaced to
/// the caller as-is, never retried internally.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx response on an endpoint that decodes its body.
    /// The raw body is kept so callers can inspect Feedly's error payload.
    #[error("HTTP error: status {status}")]
    Status { status: u16, body: String },
    /// Response body was not the JSON shape the endpoint documents.
    /// Never silently absorbed into an empty result.
    #[error("Decode error: {0}")]
    Decode(String),
    /// Response body exceeded the size limit
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    /// Response body was not valid UTF-8
    #[error("Invalid UTF-8 in response")]
    InvalidUtf8,
}

/// Raw outcome of a write endpoint with no documented response schema.
///
/// `mark_as_read` and `save_for_later` return this instead of a decoded
/// structure — Feedly documents nothing about their bodies, so the status
/// and body travel to the caller verbatim.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code of the response.
    pub status: u16,
    /// Response body, unparsed.
    pub body: String,
}

impl RawResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async client for the Feedly cloud API.
///
/// Holds the validated configuration, the resolved service base, and one
/// shared `reqwest::Client`. Nothing is mutated after construction, so the
/// client is safe to share across tasks; each method call is a single
/// independent HTTP request. The client imposes no timeout of its own —
/// cancellation belongs to the caller or the underlying HTTP layer.
#[derive(Debug)]
pub struct FeedlyClient {
    pub(crate) config: ClientConfig,
    base: Url,
    additional_headers: HeaderMap,
    http: reqwest::Client,
}

impl FeedlyClient {
    /// Create a client for the host selected by `config.sandbox`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the credential pair is incomplete or an
    /// additional header cannot be parsed.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let base = if config.sandbox { SANDBOX_BASE } else { CLOUD_BASE };
        Self::with_service_base(config, base)
    }

    /// Create a client against an explicit service base URL.
    ///
    /// Intended for tests that point the client at a local mock server.
    /// HTTPS is required for any non-loopback host so credentials never
    /// travel in the clear.
    pub fn with_service_base(config: ClientConfig, base_url: &str) -> Result<Self, ConfigError> {
        config.validate()?;

        if !base_url.starts_with("https://") {
            let is_localhost = base_url.starts_with("http://127.0.0.1")
                || base_url.starts_with("http://localhost");
            if !is_localhost {
                return Err(ConfigError::InsecureServiceBase(base_url.to_owned()));
            }
            tracing::warn!(base_url = %base_url, "Using non-HTTPS service base (localhost only)");
        }

        let base = Url::parse(base_url)
            .map_err(|_| ConfigError::InvalidServiceBase(base_url.to_owned()))?;
        let additional_headers = config.header_map()?;

        tracing::debug!(base = %base, sandbox = config.sandbox, "Feedly client created");

        Ok(Self {
            config,
            base,
            additional_headers,
            http: reqwest::Client::new(),
        })
    }

    /// The resolved service base, e.g. `https://cloud.feedly.com/`.
    pub fn service_base(&self) -> &str {
        self.base.as_str()
    }

    /// The configuration this client was constructed with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Join an API path (optionally carrying percent-encoded segments) onto
    /// the service base. String concatenation rather than `Url::join` so
    /// pre-encoded segments like `user%2F...` pass through untouched.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base.as_str().trim_end_matches('/'), path)
    }

    /// A copy of the base URL, for building URLs that never hit the network.
    pub(crate) fn base_url(&self) -> Url {
        self.base.clone()
    }

    /// GET an endpoint with the `OAuth` bearer header and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        tracing::debug!(url = %url, "GET");

        let mut request = self
            .http
            .get(&url)
            .headers(self.additional_headers.clone())
            .header(AUTHORIZATION, format!("OAuth {access_token}"));
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(ApiError::Transport)?;
        self.decode_json(response).await
    }

    /// POST a form-encoded body (token endpoint) and decode the JSON response.
    /// No bearer header: the credentials ride in the form itself.
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        tracing::debug!(url = %url, "POST (form)");

        let response = self
            .http
            .post(&url)
            .headers(self.additional_headers.clone())
            .form(params)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        self.decode_json(response).await
    }

    /// Send a JSON-bodied write request and return the raw response.
    ///
    /// Used by the endpoints whose response schema Feedly leaves undocumented;
    /// no status mapping, no decoding — the caller sees what the wire carried.
    pub(crate) async fn send_json_raw<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        access_token: &str,
        body: &B,
    ) -> Result<RawResponse, ApiError> {
        let url = self.endpoint(path);
        tracing::debug!(url = %url, method = %method, "JSON write");

        let response = self
            .http
            .request(method, &url)
            .headers(self.additional_headers.clone())
            .header(AUTHORIZATION, format!("OAuth {access_token}"))
            .json(body)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status().as_u16();
        let body = read_limited_text(response, MAX_RESPONSE_SIZE).await?;
        Ok(RawResponse { status, body })
    }

    /// Shared decode path: reject non-2xx, cap the body size, parse JSON.
    async fn decode_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = read_limited_text(response, MAX_RESPONSE_SIZE)
                .await
                .unwrap_or_default();
            tracing::warn!(status = %status, "Feedly API returned error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = read_limited_text(response, MAX_RESPONSE_SIZE).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Stream the response body into memory, rejecting anything over `limit`.
async fn read_limited_text(
    response: reqwest::Response,
    limit: usize,
) -> Result<String, ApiError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(ApiError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(ApiError::Transport)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(ApiError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    String::from_utf8(bytes).map_err(|_| ApiError::InvalidUtf8)
}
