//! The uniform dispatch path: route in, typed value or typed error out.
//!
//! Every operation goes through the same pipeline:
//!
//! 1. Derive method, encoding, path, and params from the [`Route`].
//! 2. Build the absolute URL (query string for query-encoded routes) and the
//!    JSON body (for JSON-encoded routes), plus standard headers.
//! 3. Hand the request to the transport. One dispatch is exactly one HTTP
//!    request; there are no retries here.
//! 4. A transport failure propagates as-is, without attempting a decode.
//! 5. A non-success status decodes the server's error payload best-effort,
//!    falling back to a generic error carrying the status code.
//! 6. A success status decodes the body as the operation's declared
//!    result type, with the raw body attached to any decode failure.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::routes::{Encoding, Route};
use crate::types::{NewRelease, NotesParams, Release, ReleaseId, ReleaseNotes, RepoId};

use super::client::ReleasesClient;
use super::error::{ReleasesError, Result};
use super::transport::{HttpRequest, HttpResponse, Transport};

const ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("gh-releases/", env!("CARGO_PKG_VERSION"));

impl<T: Transport> ReleasesClient<T> {
    /// Lists the repository's releases, most recent first.
    ///
    /// `per_page` defaults to 30 when `None`. The server caps page sizes at
    /// 100; values above that are passed through unvalidated and the server's
    /// behavior is authoritative.
    ///
    /// # Errors
    ///
    /// Returns [`ReleasesError::Transport`] when no response was obtained,
    /// [`ReleasesError::Api`] on a non-success status, and
    /// [`ReleasesError::Decode`] when a success body does not decode.
    pub async fn list_releases(
        &self,
        repo: RepoId,
        per_page: Option<u32>,
    ) -> Result<Vec<Release>> {
        self.dispatch(Route::list_releases(repo, per_page)).await
    }

    /// Fetches the release associated with a tag.
    ///
    /// # Errors
    ///
    /// Returns [`ReleasesError::Api`] with status 404 when no release exists
    /// for the tag, plus the failure classes listed on
    /// [`list_releases`](Self::list_releases).
    pub async fn get_release_by_tag(
        &self,
        repo: RepoId,
        tag: impl Into<String>,
    ) -> Result<Release> {
        self.dispatch(Route::GetReleaseByTag {
            repo,
            tag: tag.into(),
        })
        .await
    }

    /// Creates a release and returns the server's snapshot of it.
    ///
    /// Optional fields of [`NewRelease`] that are `None` are omitted from
    /// the request body entirely, so the server applies its own defaults.
    pub async fn create_release(&self, repo: RepoId, params: NewRelease) -> Result<Release> {
        self.dispatch(Route::CreateRelease { repo, params }).await
    }

    /// Deletes a release by its numeric identifier.
    ///
    /// Deletion is not idempotent at this level: deleting an already-deleted
    /// release surfaces whatever error the server produces (typically a 404),
    /// unmasked.
    pub async fn delete_release(&self, repo: RepoId, release_id: ReleaseId) -> Result<()> {
        self.dispatch_no_content(Route::DeleteRelease { repo, release_id })
            .await
    }

    /// Generates release notes without creating a release.
    pub async fn generate_release_notes(
        &self,
        repo: RepoId,
        params: NotesParams,
    ) -> Result<ReleaseNotes> {
        self.dispatch(Route::GenerateNotes { repo, params }).await
    }

    /// Dispatches a route and decodes the success body as `R`.
    async fn dispatch<R: DeserializeOwned>(&self, route: Route) -> Result<R> {
        let response = self.execute(route).await?;
        serde_json::from_slice(&response.body)
            .map_err(|e| ReleasesError::decode(e, &response.body))
    }

    /// Dispatches a route whose success response carries no body to decode.
    async fn dispatch_no_content(&self, route: Route) -> Result<()> {
        self.execute(route).await?;
        Ok(())
    }

    /// Builds, sends, and status-classifies one request.
    ///
    /// Returns the raw response only for success statuses; everything else
    /// becomes a typed error.
    async fn execute(&self, route: Route) -> Result<HttpResponse> {
        let request = self.build_request(&route)?;
        tracing::debug!(
            method = request.method.as_str(),
            url = %request.url,
            "dispatching release request"
        );

        let response = self.transport().send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ReleasesError::from_status(response.status, &response.body))
        }
    }

    /// Derives the concrete request from a route and this client's config.
    fn build_request(&self, route: &Route) -> Result<HttpRequest> {
        let params = route.params().map_err(ReleasesError::Encode)?;
        let path = route.path();

        let mut headers = vec![
            ("Accept".to_string(), ACCEPT.to_string()),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
        ];
        if let Some(auth) = self.config().auth_header() {
            headers.push(("Authorization".to_string(), auth));
        }

        let (url, body) = match route.encoding() {
            Encoding::Query => {
                let mut url = format!("{}/{}", self.config().base_url(), path);
                if !params.is_empty() {
                    url.push('?');
                    url.push_str(&query_string(&params));
                }
                (url, None)
            }
            Encoding::Json => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                let body = serde_json::to_vec(&params).map_err(ReleasesError::Encode)?;
                (format!("{}/{}", self.config().base_url(), path), Some(body))
            }
        };

        Ok(HttpRequest {
            method: route.method(),
            url,
            headers,
            body,
        })
    }
}

/// Encodes a parameter map as a URL query string.
fn query_string(params: &serde_json::Map<String, Value>) -> String {
    let pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| {
            // Query params are strings on the wire; non-string values would
            // only appear if a JSON payload were ever query-encoded.
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&value)
            )
        })
        .collect();
    pairs.join("&")
}
