//! Typed client for the GitHub releases API.
//!
//! This library shapes requests and interprets responses for the releases
//! family of operations (list, fetch-by-tag, create, delete, generate-notes).
//! It is not a full HTTP client: execution is delegated to an injectable
//! [`Transport`](dispatch::Transport), so callers choose the connection
//! pooling, TLS, and retry behavior themselves.

pub mod config;
pub mod dispatch;
pub mod routes;
pub mod types;

pub use config::ClientConfig;
pub use dispatch::{
    HttpRequest, HttpResponse, ReleasesClient, ReleasesError, ReqwestTransport, Transport,
    TransportError,
};
pub use routes::{Encoding, Method, Route};
pub use types::{NewRelease, NotesParams, Release, ReleaseId, ReleaseNotes, RepoId, User};
