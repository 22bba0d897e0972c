//! Domain types for the releases API.
//!
//! Response values (`Release`, `ReleaseNotes`) are immutable snapshots decoded
//! from one response body; they hold no network resources and mutating the
//! remote release does not affect them.

pub mod ids;
pub mod release;
pub mod timestamp;

// Re-export commonly used types at the module level
pub use ids::{ReleaseId, RepoId};
pub use release::{NewRelease, NotesParams, Release, ReleaseNotes, User};
