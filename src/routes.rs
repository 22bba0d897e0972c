//! Release operations as data.
//!
//! [`Route`] describes one API operation without executing it. Each variant
//! carries exactly the arguments needed to build that request; the HTTP
//! method, parameter encoding, path, and parameter map are all derived from
//! the variant by total matches. Keeping the operations as one closed enum
//! lets the dispatcher stay a single uniform code path instead of five
//! hand-rolled request builders.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::{NewRelease, NotesParams, ReleaseId, RepoId};

/// Page size used by [`Route::list_releases`] when the caller does not
/// override it.
pub const DEFAULT_PER_PAGE: u32 = 30;

/// The HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    /// Returns the method as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// How an operation's parameters are attached to the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Parameters become URL query parameters.
    Query,
    /// Parameters become a JSON request body.
    Json,
}

/// One release API operation, described as data.
///
/// Routes are plain values: construct one immediately before dispatch and
/// discard it after. They hold no resources and never mutate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// List the repository's releases.
    ListReleases { repo: RepoId, per_page: u32 },

    /// Fetch the release associated with a tag.
    GetReleaseByTag { repo: RepoId, tag: String },

    /// Create a release.
    CreateRelease { repo: RepoId, params: NewRelease },

    /// Delete a release by its numeric identifier.
    DeleteRelease { repo: RepoId, release_id: ReleaseId },

    /// Generate release notes without creating a release.
    GenerateNotes { repo: RepoId, params: NotesParams },
}

impl Route {
    /// Builds a list-releases route, defaulting the page size to
    /// [`DEFAULT_PER_PAGE`] when `per_page` is `None`.
    pub fn list_releases(repo: RepoId, per_page: Option<u32>) -> Self {
        Route::ListReleases {
            repo,
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE),
        }
    }

    /// The HTTP method for this operation.
    ///
    /// A function of the variant tag alone; argument values never change it.
    pub fn method(&self) -> Method {
        match self {
            Route::ListReleases { .. } | Route::GetReleaseByTag { .. } => Method::Get,
            Route::CreateRelease { .. } | Route::GenerateNotes { .. } => Method::Post,
            Route::DeleteRelease { .. } => Method::Delete,
        }
    }

    /// How this operation's parameters are encoded.
    ///
    /// GET and DELETE operations use query parameters; POST operations carry
    /// a JSON body. Like [`method`](Self::method), this depends only on the
    /// variant tag.
    pub fn encoding(&self) -> Encoding {
        match self {
            Route::ListReleases { .. }
            | Route::GetReleaseByTag { .. }
            | Route::DeleteRelease { .. } => Encoding::Query,
            Route::CreateRelease { .. } | Route::GenerateNotes { .. } => Encoding::Json,
        }
    }

    /// The request path, relative to the API base URL.
    ///
    /// The tag segment is percent-encoded (git tags may contain `/`);
    /// owner and repo are interpolated as-is since the server requires them
    /// to be URL-safe already.
    pub fn path(&self) -> String {
        match self {
            Route::ListReleases { repo, .. } | Route::CreateRelease { repo, .. } => {
                format!("repos/{}/{}/releases", repo.owner, repo.repo)
            }
            Route::GetReleaseByTag { repo, tag } => {
                format!(
                    "repos/{}/{}/releases/tags/{}",
                    repo.owner,
                    repo.repo,
                    urlencoding::encode(tag)
                )
            }
            Route::DeleteRelease { repo, release_id } => {
                format!("repos/{}/{}/releases/{}", repo.owner, repo.repo, release_id)
            }
            Route::GenerateNotes { repo, .. } => {
                format!("repos/{}/{}/releases/generate-notes", repo.owner, repo.repo)
            }
        }
    }

    /// The parameter map for this operation.
    ///
    /// Empty for get-by-tag and delete. For create-release, optional fields
    /// the caller did not supply are not present in the map at all.
    pub fn params(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match self {
            Route::ListReleases { per_page, .. } => {
                let mut map = Map::new();
                map.insert("per_page".to_string(), Value::String(per_page.to_string()));
                Ok(map)
            }
            Route::GetReleaseByTag { .. } | Route::DeleteRelease { .. } => Ok(Map::new()),
            Route::CreateRelease { params, .. } => to_object(params),
            Route::GenerateNotes { params, .. } => to_object(params),
        }
    }
}

/// Serializes a payload struct to a JSON object map.
fn to_object<T: Serialize>(params: &T) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(map),
        other => Err(serde::ser::Error::custom(format!(
            "expected parameters to serialize to an object, got {}",
            other
        ))),
    }
}
