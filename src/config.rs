//! Client configuration: where requests go and how they authenticate.

use std::fmt;

/// The default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Read-only configuration consulted by the dispatcher.
///
/// Holds the API base URL and optional authentication material. The
/// dispatcher queries it when building a request and never mutates it.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    token: Option<String>,
}

impl ClientConfig {
    /// Creates a configuration for the given base URL with no authentication.
    ///
    /// A trailing slash on the base URL is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Creates a configuration for the public API authenticated with a
    /// personal access token.
    pub fn with_token(token: impl Into<String>) -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: Some(token.into()),
        }
    }

    /// Sets the token on an existing configuration.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// The `Authorization` header value contributed by this configuration,
    /// if any authentication material is present.
    pub fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::new(DEFAULT_BASE_URL)
    }
}

impl fmt::Debug for ClientConfig {
    // The token must not leak into logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "https://api.github.com");
        assert_eq!(config.auth_header(), None);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::new("https://ghe.example.com/api/v3/");
        assert_eq!(config.base_url(), "https://ghe.example.com/api/v3");
    }

    #[test]
    fn token_contributes_bearer_header() {
        let config = ClientConfig::with_token("s3cret");
        assert_eq!(config.auth_header(), Some("Bearer s3cret".to_string()));
    }

    #[test]
    fn debug_does_not_leak_token() {
        let rendered = format!("{:?}", ClientConfig::with_token("s3cret"));
        assert!(!rendered.contains("s3cret"));
    }
}
