//! Serde adapters for the API's textual timestamp format.
//!
//! The server emits RFC 3339 timestamps (`2013-02-27T19:35:32Z`). This module
//! pins that format in one place: every dated field references it with a
//! `#[serde(with = ...)]` attribute, so there is no process-wide decoder state
//! and a field cannot silently pick up a different strategy.
//!
//! A string that does not parse as RFC 3339 fails the whole decode; it is
//! never coerced to a zero or default date.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Parses an RFC 3339 timestamp string, normalizing to UTC.
pub(crate) fn parse(s: &str) -> chrono::ParseResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s).map(|t| t.with_timezone(&Utc))
}

pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(serde::de::Error::custom)
}

/// Adapter for optional timestamp fields.
///
/// Use together with `#[serde(default)]` so that an absent key and an explicit
/// `null` both decode to `None`. A present-but-malformed string is still an
/// error.
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => super::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => super::parse(&s).map(Some).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_utc_timestamp() {
        let dt = parse("2013-02-27T19:35:32Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2013, 2, 27, 19, 35, 32).unwrap());
    }

    #[test]
    fn parse_normalizes_offset_to_utc() {
        let dt = parse("2013-02-27T19:35:32+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2013, 2, 27, 17, 35, 32).unwrap());
    }

    #[test]
    fn parse_rejects_non_rfc3339() {
        assert!(parse("27 Feb 2013").is_err());
        assert!(parse("2013-02-27 19:35:32").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn roundtrip_through_serde() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Dated {
            #[serde(with = "crate::types::timestamp")]
            at: DateTime<Utc>,
        }

        let json = r#"{"at":"2013-02-27T19:35:32Z"}"#;
        let dated: Dated = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&dated).unwrap(), json);
    }
}
