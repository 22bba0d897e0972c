//! Release values decoded from responses, and the payloads sent to create them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ReleaseId;
use super::timestamp;

/// A published or draft release, as returned by the API.
///
/// This is a snapshot taken at decode time, not a live handle: deleting or
/// editing the release on the server does not change this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// The numeric release identifier.
    pub id: ReleaseId,
    /// Canonical API URL of the release.
    pub url: String,
    /// Browser-facing URL of the release.
    pub html_url: String,
    /// URL of the release's asset collection.
    pub assets_url: String,
    /// URL of the source tarball for the tagged commit.
    pub tarball_url: String,
    /// URL of the source zipball for the tagged commit.
    pub zipball_url: String,
    /// Stable external node identifier.
    pub node_id: String,
    /// The git tag the release points at.
    pub tag_name: String,
    /// The commitish the tag was (or will be) created from.
    pub target_commitish: String,
    /// Display name of the release.
    pub name: String,
    /// Body text (release notes) of the release.
    pub body: String,
    /// Whether the release is an unpublished draft.
    pub draft: bool,
    /// Whether the release is marked as a prerelease.
    pub prerelease: bool,
    /// When the release was created. Always present.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// When the release was published. `None` for drafts that have never
    /// been published.
    #[serde(default, with = "timestamp::option")]
    pub published_at: Option<DateTime<Utc>>,
    /// The user that authored the release.
    pub author: User,
}

/// The authoring user attached to a release.
///
/// An opaque reference to a user owned elsewhere; only the identifying
/// fields are decoded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub id: u64,
}

/// Generated release notes, as returned by the generate-notes operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseNotes {
    /// The generated release name.
    pub name: String,
    /// The generated body text.
    pub body: String,
}

/// Parameters for creating a release.
///
/// The three optional fields distinguish "not supplied" from any sentinel
/// value: an absent field is omitted from the encoded JSON body entirely,
/// never sent as `null`, so the server applies its own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRelease {
    /// The tag to create the release for.
    pub tag_name: String,
    /// Whether to mark the release as a prerelease.
    pub prerelease: bool,
    /// Whether to create the release as a draft.
    pub draft: bool,
    /// Whether the server should generate the release notes itself.
    pub generate_release_notes: bool,
    /// The commitish to tag, when the tag does not exist yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
    /// Display name of the release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Body text of the release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl NewRelease {
    /// Creates parameters for a plain release of `tag_name`: not a draft, not
    /// a prerelease, no generated notes, all optionals absent.
    pub fn for_tag(tag_name: impl Into<String>) -> Self {
        NewRelease {
            tag_name: tag_name.into(),
            prerelease: false,
            draft: false,
            generate_release_notes: false,
            target_commitish: None,
            name: None,
            body: None,
        }
    }
}

/// Parameters for generating release notes. All three fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesParams {
    /// The tag the notes describe.
    pub tag_name: String,
    /// The commitish the tag points at.
    pub target_commitish: String,
    /// The previous tag to diff against.
    pub previous_tag_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn release_json(published_at: Option<&str>) -> String {
        let published = match published_at {
            Some(ts) => format!(r#""{}""#, ts),
            None => "null".to_string(),
        };
        format!(
            r#"{{
                "id": 1,
                "url": "https://api.github.com/repos/octo/kit/releases/1",
                "html_url": "https://github.com/octo/kit/releases/v1.0.0",
                "assets_url": "https://api.github.com/repos/octo/kit/releases/1/assets",
                "tarball_url": "https://api.github.com/repos/octo/kit/tarball/v1.0.0",
                "zipball_url": "https://api.github.com/repos/octo/kit/zipball/v1.0.0",
                "node_id": "MDc6UmVsZWFzZTE=",
                "tag_name": "v1.0.0",
                "target_commitish": "master",
                "name": "v1.0.0",
                "body": "Description of the release",
                "draft": false,
                "prerelease": false,
                "created_at": "2013-02-27T19:35:32Z",
                "published_at": {published},
                "author": {{ "login": "octocat", "id": 1 }}
            }}"#
        )
    }

    #[test]
    fn decode_published_release() {
        let release: Release =
            serde_json::from_str(&release_json(Some("2013-02-27T19:35:32Z"))).unwrap();

        assert_eq!(release.id, ReleaseId(1));
        assert_eq!(release.tag_name, "v1.0.0");
        assert_eq!(release.target_commitish, "master");
        assert_eq!(release.node_id, "MDc6UmVsZWFzZTE=");
        assert!(!release.draft);
        assert_eq!(release.author.login, "octocat");
        assert_eq!(
            release.created_at,
            Utc.with_ymd_and_hms(2013, 2, 27, 19, 35, 32).unwrap()
        );
        assert_eq!(
            release.published_at,
            Some(Utc.with_ymd_and_hms(2013, 2, 27, 19, 35, 32).unwrap())
        );
    }

    #[test]
    fn decode_unpublished_draft_has_no_published_at() {
        // Null published_at (draft never published) decodes to None, not an error.
        let release: Release = serde_json::from_str(&release_json(None)).unwrap();
        assert_eq!(release.published_at, None);
    }

    #[test]
    fn decode_absent_published_at_key() {
        let json = release_json(Some("x"));
        let json = json.replace(r#""published_at": "x","#, "");
        let release: Release = serde_json::from_str(&json).unwrap();
        assert_eq!(release.published_at, None);
    }

    #[test]
    fn decode_rejects_malformed_created_at() {
        let json = release_json(None).replace("2013-02-27T19:35:32Z", "yesterday-ish");
        let err = serde_json::from_str::<Release>(&json);
        assert!(err.is_err(), "malformed created_at must fail decode");
    }

    #[test]
    fn decode_rejects_missing_required_field() {
        let json = release_json(None).replace(r#""tag_name": "v1.0.0","#, "");
        assert!(serde_json::from_str::<Release>(&json).is_err());
    }

    #[test]
    fn new_release_omits_absent_optionals() {
        let params = NewRelease {
            generate_release_notes: true,
            ..NewRelease::for_tag("v1.0")
        };
        let encoded = serde_json::to_string(&params).unwrap();
        assert_eq!(
            encoded,
            r#"{"tag_name":"v1.0","prerelease":false,"draft":false,"generate_release_notes":true}"#
        );
    }

    #[test]
    fn new_release_includes_supplied_optionals() {
        let params = NewRelease {
            name: Some("First".to_string()),
            ..NewRelease::for_tag("v1.0")
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["name"], "First");
        assert!(value.get("body").is_none());
        assert!(value.get("target_commitish").is_none());
    }

    proptest! {
        /// An optional field left as None never appears in the encoded body,
        /// not even as null, regardless of the other arguments.
        #[test]
        fn absent_optionals_never_encoded(
            tag in "[a-zA-Z0-9._/-]{1,30}",
            prerelease in any::<bool>(),
            draft in any::<bool>(),
            generate in any::<bool>(),
            commitish in proptest::option::of("[a-z0-9]{1,20}"),
            name in proptest::option::of(".{0,40}"),
            body in proptest::option::of(".{0,40}"),
        ) {
            let params = NewRelease {
                tag_name: tag,
                prerelease,
                draft,
                generate_release_notes: generate,
                target_commitish: commitish.clone(),
                name: name.clone(),
                body: body.clone(),
            };
            let value = serde_json::to_value(&params).unwrap();
            let object = value.as_object().unwrap();

            for (field, supplied) in [
                ("target_commitish", commitish.is_some()),
                ("name", name.is_some()),
                ("body", body.is_some()),
            ] {
                prop_assert_eq!(object.contains_key(field), supplied);
            }
            // Required keys are always present.
            for field in ["tag_name", "prerelease", "draft", "generate_release_notes"] {
                prop_assert!(object.contains_key(field));
            }
        }

        #[test]
        fn new_release_serde_roundtrip(
            tag in "[a-zA-Z0-9._/-]{1,30}",
            name in proptest::option::of(".{0,40}"),
        ) {
            let params = NewRelease {
                name,
                ..NewRelease::for_tag(tag)
            };
            let json = serde_json::to_string(&params).unwrap();
            let parsed: NewRelease = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(params, parsed);
        }
    }
}
