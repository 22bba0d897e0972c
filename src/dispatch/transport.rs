//! The transport seam: one HTTP request in, one response or error out.
//!
//! The dispatcher never opens sockets itself. It hands a fully-built
//! [`HttpRequest`] to a [`Transport`] and receives either a status code with
//! a body, or a [`TransportError`] when no response was obtained at all.
//! Connection pooling, TLS, and any socket-level retry policy live behind
//! this trait.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::routes::Method;

/// A fully-built HTTP request, ready for transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: Method,
    /// The absolute URL, including any query string.
    pub url: String,
    /// Header name/value pairs.
    pub headers: Vec<(String, String)>,
    /// The request body, if the operation carries one.
    pub body: Option<Vec<u8>>,
}

/// A response obtained from the server, success or not.
///
/// Any response with a status code lands here; status classification is the
/// dispatcher's job, not the transport's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The raw response body. May be empty (e.g., 204 on delete).
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A request-level failure: the request could not be sent, or no response
/// was received (connection refused, timeout, DNS failure).
#[derive(Debug, Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    /// A human-readable description of the failure.
    pub message: String,

    /// The underlying error, if available.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Creates a transport error from a message alone.
    pub fn message(message: impl Into<String>) -> Self {
        TransportError {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a transport error wrapping an underlying error.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TransportError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Performs one HTTP request and yields one response or error.
///
/// Implementations must complete exactly once per call. The dispatcher issues
/// exactly one `send` per dispatch; it never retries.
///
/// # Example (mock for testing)
///
/// ```ignore
/// struct MockTransport {
///     responses: Mutex<VecDeque<HttpResponse>>,
/// }
///
/// impl Transport for MockTransport {
///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
///         self.responses
///             .lock()
///             .unwrap()
///             .pop_front()
///             .ok_or_else(|| TransportError::message("unexpected request"))
///     }
/// }
/// ```
pub trait Transport {
    /// Transmit the request and return the server's response.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// The default production transport, backed by a [`reqwest::Client`].
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Default per-request timeout applied by [`ReqwestTransport::new`].
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a transport with a fresh client and the default timeout.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Self::DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| TransportError::with_source("failed to build HTTP client", e))?;
        Ok(ReqwestTransport { client })
    }

    /// Creates a transport from a pre-configured client.
    ///
    /// Use this to control pooling, proxies, or TLS settings yourself.
    pub fn from_client(client: reqwest::Client) -> Self {
        ReqwestTransport { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::with_source("request failed", e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::with_source("failed to read response body", e))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        for status in [200, 201, 204, 299] {
            assert!(HttpResponse { status, body: vec![] }.is_success());
        }
        for status in [199, 301, 304, 400, 404, 500] {
            assert!(!HttpResponse { status, body: vec![] }.is_success());
        }
    }

    #[test]
    fn transport_error_display_carries_message() {
        let err = TransportError::message("connection refused");
        assert_eq!(err.to_string(), "transport error: connection refused");
    }

    #[test]
    fn transport_error_preserves_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = TransportError::with_source("request failed", io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
