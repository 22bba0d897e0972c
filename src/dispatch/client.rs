//! The client: configuration plus an injected transport.

use std::fmt;

use crate::config::ClientConfig;

use super::transport::{ReqwestTransport, Transport, TransportError};

/// A releases API client.
///
/// Pairs a read-only [`ClientConfig`] with a [`Transport`] that performs the
/// actual HTTP requests. The typed operations live in `impl` blocks in the
/// dispatcher module; this type only holds the pieces together.
///
/// Clients hold no per-dispatch state: concurrent dispatches through one
/// client are independent, and any connection sharing lives inside the
/// transport.
pub struct ReleasesClient<T> {
    config: ClientConfig,
    transport: T,
}

impl ReleasesClient<ReqwestTransport> {
    /// Creates a client for the public API using the default transport and
    /// a personal access token.
    pub fn from_token(token: impl Into<String>) -> Result<Self, TransportError> {
        Ok(ReleasesClient {
            config: ClientConfig::with_token(token),
            transport: ReqwestTransport::new()?,
        })
    }

    /// Creates an unauthenticated client for the public API.
    pub fn unauthenticated() -> Result<Self, TransportError> {
        Ok(ReleasesClient {
            config: ClientConfig::default(),
            transport: ReqwestTransport::new()?,
        })
    }
}

impl<T: Transport> ReleasesClient<T> {
    /// Creates a client from a configuration and any transport.
    ///
    /// Use this to inject a custom transport (a mock in tests, or a wrapped
    /// client with caller-controlled pooling and retry behavior).
    pub fn new(config: ClientConfig, transport: T) -> Self {
        ReleasesClient { config, transport }
    }

    /// The configuration this client dispatches with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// A reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T> fmt::Debug for ReleasesClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleasesClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
