//! Timestamp parsing and formatting shared by every record shape.
//!
//! GitHub and the snapshot file both use `YYYY-MM-DDTHH:MM:SS` followed by either `Z` or a
//! `±HH:MM` offset. Everything is normalized to UTC on the way in.

use super::SnapshotError;
use chrono::{DateTime, SecondsFormat, Utc};

/// Parse an optional timestamp. Absent and empty inputs both map to `None`.
pub fn parse(text: Option<&str>) -> Result<Option<DateTime<Utc>>, SnapshotError> {
    match text {
        None | Some("") => Ok(None),
        Some(text) => parse_required(text).map(Some),
    }
}

/// Parse a timestamp that must be present.
pub fn parse_required(text: &str) -> Result<DateTime<Utc>, SnapshotError> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| SnapshotError::Format(format!("invalid timestamp '{text}': {e}")))
}

/// Format a timestamp the way the snapshot file stores it, e.g. `2021-01-01T10:00:00+00:00`.
#[must_use]
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Format a timestamp for GitHub's `since` query parameter, e.g. `2021-01-01T10:00:00Z`.
#[must_use]
pub fn format_query(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Serde adapter for required timestamps in the snapshot file.
pub mod iso8601 {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::parse_required(&text).map_err(serde::de::Error::custom)
    }
}
