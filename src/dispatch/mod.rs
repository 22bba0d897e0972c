//! Dispatching routes: request building, execution, and response decoding.
//!
//! The dispatcher turns a [`Route`](crate::routes::Route) into a concrete
//! HTTP request, delegates transmission to an injected [`Transport`], and
//! decodes the result into a typed value or a typed [`ReleasesError`].
//!
//! Key properties:
//! - One dispatch is exactly one HTTP request; no retries, no caching
//! - Exactly one completion per dispatch, success or failure
//! - No shared mutable state across dispatches; connection sharing, if any,
//!   lives inside the transport

mod client;
mod dispatcher;
mod error;
mod transport;

pub use client::ReleasesClient;
pub use error::{ApiErrorBody, ReleasesError, Result};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
