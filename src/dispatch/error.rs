//! Error taxonomy for release operations.
//!
//! Four distinct failure classes reach the caller, always through the same
//! `Result` channel the success value uses:
//!
//! - **Transport** — no response was obtained at all (network, timeout)
//! - **Decode** — a success response arrived but its body did not match the
//!   expected schema (missing field, malformed date, type mismatch)
//! - **Api** — the server answered with a non-success status code
//! - **Encode** — request parameters could not be serialized
//!
//! No failure is retried or silently recovered here; a single dispatch
//! produces exactly one success or exactly one of these errors.

use serde::Deserialize;
use thiserror::Error;

use super::transport::TransportError;

/// An error from dispatching a release operation.
#[derive(Debug, Error)]
pub enum ReleasesError {
    /// The request could not be sent or no response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A success response had a body that did not match the expected schema.
    #[error("failed to decode response body: {message}")]
    Decode {
        /// What went wrong during decoding.
        message: String,
        /// The raw response body, kept for diagnostics.
        body: String,
    },

    /// The server answered with a non-success status code.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The server-supplied message, or a generic placeholder when the
        /// error body was undecodable.
        message: String,
    },

    /// Request parameters could not be serialized.
    #[error("failed to encode request parameters")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReleasesError>;

/// The error payload the server attaches to non-success responses.
///
/// Decoded best-effort: when the body is not this shape (or not JSON at
/// all), the dispatcher falls back to a generic message so the status code
/// is never lost.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub documentation_url: Option<String>,
}

impl ReleasesError {
    /// Builds the error for a non-success response, decoding the server's
    /// error payload when possible and falling back to the bare status code
    /// when not.
    pub(crate) fn from_status(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(parsed) => ReleasesError::Api {
                status,
                message: parsed.message,
            },
            Err(_) => {
                tracing::warn!(status, "error response body was not decodable");
                ReleasesError::Api {
                    status,
                    message: format!("HTTP {}", status),
                }
            }
        }
    }

    /// Builds a decode error, attaching the raw body for diagnostics.
    pub(crate) fn decode(err: serde_json::Error, body: &[u8]) -> Self {
        ReleasesError::Decode {
            message: err.to_string(),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }
}
