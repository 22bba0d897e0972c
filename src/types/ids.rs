//! Newtype wrappers for domain identifiers.
//!
//! These types prevent accidental mixing of different identifiers (e.g., using
//! a release ID where a repository is expected) and make the code more
//! self-documenting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepoId {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// The numeric identifier of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseId(pub u64);

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ReleaseId {
    fn from(n: u64) -> Self {
        ReleaseId(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_id_display() {
        assert_eq!(RepoId::new("octo", "kit").to_string(), "octo/kit");
    }

    #[test]
    fn release_id_serde_transparent() {
        let id: ReleaseId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ReleaseId(42));
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }
}
