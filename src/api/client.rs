//! # API Client Core
//!
//! This module contains the ApiClient structure and the request/response
//! pipeline shared by every Lagoon API operation: URL composition, bearer
//! authentication, JSON body encoding, dispatch, and response
//! classification.

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Error types for API operations.
///
/// This enum is a closed set of failure kinds, allowing callers to branch
/// on the kind programmatically instead of parsing message text.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be serialized to JSON.
    ///
    /// Reported before any network I/O is attempted.
    #[error("failed to encode request body: {message}")]
    Encoding {
        /// Human-readable error message
        message: String,
    },

    /// The absolute URL or request object could not be built
    /// (e.g. a malformed origin).
    #[error("failed to build request: {message}")]
    Construction {
        /// Human-readable error message
        message: String,
    },

    /// The network exchange itself failed (DNS, connection, timeout).
    ///
    /// Reported as-is from the underlying HTTP client, not classified
    /// further.
    #[error("network error: {message}")]
    Transport {
        /// Human-readable error message
        message: String,
    },

    /// The remote service rejected the request with a failing status code
    /// (strictly greater than 400).
    ///
    /// `status_line` carries the HTTP status line verbatim
    /// (e.g. `"404 Not Found"`) for backward-compatible display.
    #[error("HTTP error: {status_line}")]
    RemoteRejection {
        /// Numeric HTTP status code
        status: u16,
        /// Status code plus reason phrase, e.g. "404 Not Found"
        status_line: String,
    },

    /// The response body could not be fully read after a successful status.
    #[error("failed to read response body: {message}")]
    BodyRead {
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Check if this is a transport-level (network) error.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }

    /// Check if this is a remote rejection (failing HTTP status).
    pub fn is_remote_rejection(&self) -> bool {
        matches!(self, ApiError::RemoteRejection { .. })
    }

    /// The rejecting status code, if this error is a remote rejection.
    pub fn rejection_status(&self) -> Option<u16> {
        match self {
            ApiError::RemoteRejection { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Immutable client configuration, created once per command invocation.
///
/// `client_id` and `client_secret` are carried for the configuration
/// collaborator's sake but are not used by the request pipeline itself.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the remote service (scheme + host)
    pub origin: String,
    /// Opaque client identifier
    pub client_id: String,
    /// Opaque client secret
    pub client_secret: String,
    /// Bearer token sent with every request; may be empty if not yet
    /// authenticated, in which case the remote service rejects the request
    pub access_token: String,
}

/// Observer invoked with the method and composed URL before each dispatch.
///
/// Installed by the caller when request-level visibility is wanted; the
/// client itself performs no logging.
pub type RequestObserver = Arc<dyn Fn(&Method, &str) + Send + Sync>;

/// HTTP client for the Lagoon API.
///
/// Translates a logical operation (`get`, `post`, `patch`) into a single
/// completed HTTP exchange and returns either the raw response bytes or a
/// classified [`ApiError`]. Never retries, never parses the body.
///
/// The client holds no per-call mutable state and the underlying
/// `reqwest::Client` is safe for concurrent use, so one `ApiClient` may
/// serve concurrent calls. The token is fixed at construction; rotation
/// requires constructing a new client.
///
/// # Example
///
/// ```rust,no_run
/// use lagoon::api::{ApiClient, ClientConfig};
///
/// let client = ApiClient::new(ClientConfig {
///     origin: "https://lagoon.social".to_string(),
///     client_id: "cid".to_string(),
///     client_secret: "secret".to_string(),
///     access_token: "token".to_string(),
/// });
/// ```
pub struct ApiClient {
    config: ClientConfig,
    http: Client,
    observer: Option<RequestObserver>,
}

/// Version of the CLI, used in User-Agent header
const VERSION: &str = env!("CARGO_PKG_VERSION");

impl ApiClient {
    /// Create a new API client.
    ///
    /// The underlying HTTP client is configured with:
    /// - User-Agent: `lagoon/<version>` to identify the CLI
    /// - Accept: `application/json` for API responses
    ///
    /// Content-Type is attached per request, only when a body is present.
    pub fn new(config: ClientConfig) -> Self {
        let mut headers = HeaderMap::new();

        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("lagoon/{VERSION}"))
                .unwrap_or_else(|_| HeaderValue::from_static("lagoon/0.1.0")),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            config,
            http,
            observer: None,
        }
    }

    /// Install a request observer, called with the method and composed URL
    /// before each dispatch.
    pub fn with_observer(mut self, observer: RequestObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The configuration this client was constructed with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch a resource.
    ///
    /// `path` is a relative resource path (e.g. `/v1/posts`); it is joined
    /// to the origin with the fixed `/api` separator. The request carries
    /// no body but still attaches the Authorization header.
    pub async fn get(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        self.dispatch(Method::GET, path, None).await
    }

    /// Create a resource.
    ///
    /// `body` is serialized to a JSON document before any network I/O;
    /// serialization failure returns [`ApiError::Encoding`] without
    /// dispatching a request.
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Vec<u8>, ApiError> {
        let payload = encode_body(body)?;
        self.dispatch(Method::POST, path, Some(payload)).await
    }

    /// Update a resource.
    ///
    /// Same body contract as [`post`](ApiClient::post).
    pub async fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<Vec<u8>, ApiError> {
        let payload = encode_body(body)?;
        self.dispatch(Method::PATCH, path, Some(payload)).await
    }

    /// Compose the absolute URL for a resource path.
    ///
    /// The service routes every client request under `/api`, so the URL is
    /// exactly `origin + "/api" + path`. This is a fixed separator
    /// insertion, not a general URL join; callers must not pass paths that
    /// would double the separator.
    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.config.origin, path)
    }

    /// The Authorization header value: the two tokens `Bearer` and the
    /// access token joined by one space, even when the token is empty.
    fn bearer_value(&self) -> String {
        format!("Bearer {}", self.config.access_token)
    }

    /// Perform one request/response exchange.
    ///
    /// Exactly one network round trip; the full body is buffered before
    /// returning. Statuses strictly greater than 400 classify as failure;
    /// 400 itself and everything below is success.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, ApiError> {
        let url = self.api_url(path);

        if let Some(observer) = &self.observer {
            observer(&method, &url);
        }

        let mut builder = self
            .http
            .request(method, &url)
            .header(AUTHORIZATION, self.bearer_value());

        if let Some(payload) = body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(payload);
        }

        let request = builder.build().map_err(|e| ApiError::Construction {
            message: e.to_string(),
        })?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| ApiError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.as_u16() > 400 {
            return Err(ApiError::RemoteRejection {
                status: status.as_u16(),
                status_line: status_line(status),
            });
        }

        let bytes = response.bytes().await.map_err(|e| ApiError::BodyRead {
            message: e.to_string(),
        })?;

        Ok(bytes.to_vec())
    }
}

/// Serialize a request body to a JSON document.
fn encode_body<B: Serialize>(body: &B) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(body).map_err(|e| ApiError::Encoding {
        message: e.to_string(),
    })
}

/// Reconstruct the HTTP status line: the numeric code plus its reason
/// phrase (e.g. "404 Not Found"), or the bare code when the reason is
/// unknown.
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
